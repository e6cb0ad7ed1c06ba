// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by the engine and input types consumed by it.

use kurbo::Point;

use crate::item::MenuItem;
use crate::types::MenuId;

/// A notification queued by a [`MenuTree`](crate::MenuTree).
///
/// Drain them with [`MenuTree::drain_events`](crate::MenuTree::drain_events).
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEvent {
    /// `menu` was mounted, either as a root overlay or as a submenu.
    Opened {
        /// The menu.
        menu: MenuId,
    },
    /// An item was triggered.
    ///
    /// One event is queued for the menu holding the item and one for each of its ancestors,
    /// in leaf→root order, so a host watching only the root observes triggers from any depth.
    Triggered {
        /// The menu this notification is addressed to.
        menu: MenuId,
        /// The triggered item.
        item: MenuItem,
    },
    /// `menu` was closed and detached.
    Closed {
        /// The menu.
        menu: MenuId,
    },
}

impl MenuEvent {
    /// The menu the notification is addressed to.
    #[must_use]
    pub fn menu(&self) -> MenuId {
        match self {
            Self::Opened { menu } | Self::Triggered { menu, .. } | Self::Closed { menu } => *menu,
        }
    }
}

/// Pointer button identifier. `0` is the primary button.
pub type Button = u8;

/// The primary pointer button.
pub const PRIMARY_BUTTON: Button = 0;

/// What happened to the pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A button was pressed.
    Down,
    /// A button was released.
    Up,
    /// The pointer moved.
    Move,
    /// The pointer left the document.
    Leave,
}

/// A pointer event in document coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Pointer position.
    pub position: Point,
    /// Button involved in a press or release.
    pub button: Button,
    /// Event timestamp in milliseconds.
    pub time: u64,
}

impl PointerEvent {
    /// A primary-button pointer event.
    #[must_use]
    pub fn new(kind: PointerKind, position: Point, time: u64) -> Self {
        Self {
            kind,
            position,
            button: PRIMARY_BUTTON,
            time,
        }
    }

    /// A primary-button press.
    #[must_use]
    pub fn down(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Down, position, time)
    }

    /// A primary-button release.
    #[must_use]
    pub fn up(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Up, position, time)
    }

    /// A move.
    #[must_use]
    pub fn moved(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Move, position, time)
    }

    /// The pointer left the document.
    #[must_use]
    pub fn leave(position: Point, time: u64) -> Self {
        Self::new(PointerKind::Leave, position, time)
    }
}

/// A key relevant to menu navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Trigger the active item, or open its submenu.
    Enter,
    /// Close the menu.
    Escape,
    /// Close the submenu and return to its parent.
    Left,
    /// Open the active item's submenu.
    Right,
    /// Select the previous item.
    Up,
    /// Select the next item.
    Down,
    /// A typed character, used for mnemonic activation.
    Char(char),
}

/// Whether input was handled by the menu chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputResult {
    /// The chain handled the input; stop propagating it.
    Consumed,
    /// The chain did not handle the input; let it continue.
    Ignored,
}
