// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public handle types: menu identifiers, chain links, and mount state.

/// Identifier for a menu in a [`MenuTree`](crate::MenuTree) (generational).
///
/// Handles stay `Copy` and cheap to store inside [`MenuItem`](crate::MenuItem)s, which is how
/// one submenu can be shared by several parent items. Once a menu is disposed its handle goes
/// stale and every operation taking it becomes a no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MenuId(pub(crate) u32, pub(crate) u32);

impl MenuId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The currently open submenu of a menu, together with the item that opened it.
///
/// Holding both halves in one value means a menu can never have a child menu without a
/// child index (or the reverse).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChildLink {
    /// The open submenu.
    pub menu: MenuId,
    /// Index of the submenu item in the parent menu.
    pub index: usize,
}

/// Where an open menu is mounted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mount {
    /// Not displayed.
    #[default]
    Detached,
    /// Displayed as a top-level overlay: the root of a chain.
    Overlay,
    /// Displayed next to an item of its parent menu.
    Submenu,
}

impl Mount {
    /// Returns `true` for either displayed state.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Detached)
    }
}
