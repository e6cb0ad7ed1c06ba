// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item rendering capability.
//!
//! The engine never looks inside a node. It asks the renderer to create one per item, to refresh
//! it with the item's current [`ItemTags`] on every render pass, and to report the row's natural
//! size so menus can be laid out, measured, and hit tested.

use alloc::string::String;
use kurbo::Size;

use crate::item::{ItemKind, MenuItem};
use crate::tags::ItemTags;

/// Pluggable strategy turning [`MenuItem`]s into visual nodes.
pub trait ItemRenderer {
    /// Host-side visual node for one item.
    type Node;

    /// Create a node for a freshly inserted item.
    ///
    /// Content may be left empty; [`ItemRenderer::update_node`] runs before the node is shown.
    fn create_node(&mut self, item: &MenuItem) -> Self::Node;

    /// Bring `node` up to date with `item` and its current style `tags`.
    fn update_node(&mut self, node: &mut Self::Node, item: &MenuItem, tags: ItemTags);

    /// Natural size of the row displaying `node`.
    ///
    /// Only called for rows that take space; suppressed rows are laid out with zero height.
    fn measure(&self, node: &Self::Node, item: &MenuItem, tags: ItemTags) -> Size;
}

/// Node produced by [`TextRenderer`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextNode {
    /// Label with mnemonic markers removed.
    pub text: String,
    /// Shortcut decoration.
    pub shortcut: String,
    /// Style tags applied on the last update.
    pub tags: ItemTags,
}

/// A simple renderer for monospace text rows.
///
/// Widths are derived from character counts, which is enough for terminal-style hosts and for
/// exercising layout in tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRenderer {
    /// Height of every non-separator row.
    pub row_height: f64,
    /// Height of a visible separator row.
    pub separator_height: f64,
    /// Advance of one character.
    pub char_width: f64,
    /// Space reserved for the check/icon column, the submenu arrow, and the label/shortcut gap.
    pub chrome_width: f64,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            row_height: 24.0,
            separator_height: 9.0,
            char_width: 8.0,
            chrome_width: 48.0,
        }
    }
}

impl ItemRenderer for TextRenderer {
    type Node = TextNode;

    fn create_node(&mut self, _item: &MenuItem) -> TextNode {
        TextNode::default()
    }

    fn update_node(&mut self, node: &mut TextNode, item: &MenuItem, tags: ItemTags) {
        if item.kind == ItemKind::Separator {
            node.text.clear();
            node.shortcut.clear();
        } else {
            node.text = item.display_label();
            node.shortcut.clone_from(&item.shortcut);
        }
        node.tags = tags;
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "Label lengths are far below f64's exact integer range."
    )]
    fn measure(&self, node: &TextNode, _item: &MenuItem, tags: ItemTags) -> Size {
        if tags.contains(ItemTags::SEPARATOR) {
            return Size::new(self.chrome_width, self.separator_height);
        }
        let chars = node.text.chars().count() + node.shortcut.chars().count();
        Size::new(
            self.chrome_width + chars as f64 * self.char_width,
            self.row_height,
        )
    }
}
