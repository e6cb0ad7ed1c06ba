// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu item records.

use alloc::string::String;
use core::str::FromStr;

use crate::error::TemplateError;
use crate::types::MenuId;

/// Two-character marker placed immediately before a mnemonic character in a label.
pub const MNEMONIC_MARKER: &str = "&&";

/// Discriminant deciding which [`MenuItem`] fields are meaningful.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ItemKind {
    /// A plain command item.
    #[default]
    Normal,
    /// A command item with an independent checked state.
    Check,
    /// A command item that is checked as part of a group.
    Radio,
    /// An item that opens [`MenuItem::submenu`].
    Submenu,
    /// A divider line. Never selectable.
    Separator,
}

impl ItemKind {
    /// The lowercase name used by option records and style tags.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Check => "check",
            Self::Radio => "radio",
            Self::Submenu => "submenu",
            Self::Separator => "separator",
        }
    }
}

impl FromStr for ItemKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "check" => Ok(Self::Check),
            "radio" => Ok(Self::Radio),
            "submenu" => Ok(Self::Submenu),
            "separator" => Ok(Self::Separator),
            other => Err(TemplateError::UnknownKind(other.into())),
        }
    }
}

bitflags::bitflags! {
    /// Per-item state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is checked. Only meaningful for [`ItemKind::Check`] and [`ItemKind::Radio`].
        const CHECKED  = 0b0000_0001;
        /// Item is shown but cannot be selected or triggered.
        const DISABLED = 0b0000_0010;
        /// Item is not shown and is transparent to separator collapsing.
        const HIDDEN   = 0b0000_0100;
    }
}

/// One row of a menu.
///
/// This is a plain record: every field is stored for every kind, and fields that do not apply
/// to [`MenuItem::kind`] are simply ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuItem {
    /// Which fields are meaningful.
    pub kind: ItemKind,
    /// Display text. May contain a mnemonic, see [`MNEMONIC_MARKER`].
    pub label: String,
    /// Icon class tag.
    pub icon: String,
    /// Shortcut decoration. Display only; no binding is installed.
    pub shortcut: String,
    /// Checked, disabled and hidden state.
    pub flags: ItemFlags,
    /// Extra style tag for the item's node.
    pub class_name: String,
    /// Command identifier reported back to the host on trigger.
    pub command: String,
    /// Opaque command argument, never interpreted by the engine.
    pub args: Option<String>,
    /// Nested menu for [`ItemKind::Submenu`].
    ///
    /// The item does not own the submenu; the same menu may be referenced by several items.
    pub submenu: Option<MenuId>,
}

impl MenuItem {
    /// A [`ItemKind::Normal`] item.
    pub fn normal(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// A [`ItemKind::Check`] item.
    pub fn check(label: impl Into<String>, checked: bool) -> Self {
        let mut item = Self {
            kind: ItemKind::Check,
            label: label.into(),
            ..Self::default()
        };
        item.flags.set(ItemFlags::CHECKED, checked);
        item
    }

    /// A [`ItemKind::Radio`] item.
    pub fn radio(label: impl Into<String>, checked: bool) -> Self {
        Self {
            kind: ItemKind::Radio,
            ..Self::check(label, checked)
        }
    }

    /// A [`ItemKind::Submenu`] item opening `submenu`.
    pub fn submenu(label: impl Into<String>, submenu: MenuId) -> Self {
        Self {
            kind: ItemKind::Submenu,
            label: label.into(),
            submenu: Some(submenu),
            ..Self::default()
        }
    }

    /// A [`ItemKind::Separator`] item.
    pub fn separator() -> Self {
        Self {
            kind: ItemKind::Separator,
            ..Self::default()
        }
    }

    /// Set the command identifier.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Set the shortcut decoration.
    #[must_use]
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = shortcut.into();
        self
    }

    /// Set the icon class tag.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Replace all state flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mark the item disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.flags |= ItemFlags::DISABLED;
        self
    }

    /// Mark the item hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.flags |= ItemFlags::HIDDEN;
        self
    }

    /// Whether the item is hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(ItemFlags::HIDDEN)
    }

    /// Whether the item is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(ItemFlags::DISABLED)
    }

    /// Whether the item is checked.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.flags.contains(ItemFlags::CHECKED)
    }

    /// Whether the item can become the active item: not a separator, not disabled, not hidden.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.kind != ItemKind::Separator
            && !self.flags.intersects(ItemFlags::DISABLED | ItemFlags::HIDDEN)
    }

    /// Whether the label carries the mnemonic marker immediately followed by `ch`,
    /// compared case-insensitively.
    #[must_use]
    pub fn has_mnemonic(&self, ch: char) -> bool {
        self.label
            .match_indices(MNEMONIC_MARKER)
            .filter_map(|(at, marker)| self.label[at + marker.len()..].chars().next())
            .any(|c| c.to_lowercase().eq(ch.to_lowercase()))
    }

    /// The label with every mnemonic marker removed.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label.replace(MNEMONIC_MARKER, "")
    }
}
