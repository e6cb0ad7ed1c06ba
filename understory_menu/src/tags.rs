// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style tags applied to item nodes.

use crate::item::{ItemFlags, ItemKind, MenuItem};

bitflags::bitflags! {
    /// Composable style markers for an item node, one per concern.
    ///
    /// Exactly one type marker is set for every item; the state markers compose freely.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemTags: u16 {
        /// Present on every item node.
        const ITEM      = 1 << 0;
        /// Type marker for [`ItemKind::Normal`].
        const NORMAL    = 1 << 1;
        /// Type marker for [`ItemKind::Check`].
        const CHECK     = 1 << 2;
        /// Type marker for [`ItemKind::Radio`].
        const RADIO     = 1 << 3;
        /// Type marker for [`ItemKind::Submenu`].
        const SUBMENU   = 1 << 4;
        /// Type marker for [`ItemKind::Separator`].
        const SEPARATOR = 1 << 5;
        /// The item is the active (selected) item of its menu.
        const ACTIVE    = 1 << 6;
        /// The item is disabled.
        const DISABLED  = 1 << 7;
        /// The item is checked.
        const CHECKED   = 1 << 8;
        /// The item is hidden by its own flag.
        const HIDDEN    = 1 << 9;
        /// The item is a separator suppressed by collapsing.
        const COLLAPSED = 1 << 10;
    }
}

const CLASS_NAMES: [(ItemTags, &str); 11] = [
    (ItemTags::ITEM, "menu-item"),
    (ItemTags::NORMAL, "menu-item-normal-type"),
    (ItemTags::CHECK, "menu-item-check-type"),
    (ItemTags::RADIO, "menu-item-radio-type"),
    (ItemTags::SUBMENU, "menu-item-submenu-type"),
    (ItemTags::SEPARATOR, "menu-item-separator-type"),
    (ItemTags::ACTIVE, "menu-item-active"),
    (ItemTags::DISABLED, "menu-item-disabled"),
    (ItemTags::CHECKED, "menu-item-checked"),
    (ItemTags::HIDDEN, "menu-item-hidden"),
    (ItemTags::COLLAPSED, "menu-item-collapsed"),
];

impl ItemTags {
    /// Type marker for a kind.
    #[must_use]
    pub const fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Normal => Self::NORMAL,
            ItemKind::Check => Self::CHECK,
            ItemKind::Radio => Self::RADIO,
            ItemKind::Submenu => Self::SUBMENU,
            ItemKind::Separator => Self::SEPARATOR,
        }
    }

    /// Tags derived from the item record alone (no active or collapsed state).
    #[must_use]
    pub fn for_item(item: &MenuItem) -> Self {
        let mut tags = Self::ITEM | Self::for_kind(item.kind);
        tags.set(Self::DISABLED, item.flags.contains(ItemFlags::DISABLED));
        tags.set(Self::CHECKED, item.flags.contains(ItemFlags::CHECKED));
        tags.set(Self::HIDDEN, item.flags.contains(ItemFlags::HIDDEN));
        tags
    }

    /// Whether the node takes no space: hidden, or a collapsed separator.
    #[must_use]
    pub const fn is_suppressed(self) -> bool {
        self.intersects(Self::HIDDEN.union(Self::COLLAPSED))
    }

    /// Class-like names for the set markers, in a stable order.
    pub fn class_names(self) -> impl Iterator<Item = &'static str> {
        CLASS_NAMES
            .into_iter()
            .filter(move |(tag, _)| self.contains(*tag))
            .map(|(_, name)| name)
    }
}
