// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Separator collapsing.
//!
//! Hidden items are transparent when judging adjacency, so hiding an item can turn two
//! separators into neighbours (or push a separator to the edge) without any collection change.
//! The result therefore has to be recomputed on every render pass.

use alloc::{vec, vec::Vec};

use crate::item::{ItemKind, MenuItem};

/// Compute which separators should be suppressed.
///
/// The returned vector has one entry per item; `true` marks a separator that is either part of
/// the leading run, part of the trailing run, or immediately follows another visible separator.
/// Only separators are ever marked; hidden items are already suppressed by their own flag.
///
/// ```rust
/// use understory_menu::{MenuItem, collapsed_separators};
///
/// let items = [
///     MenuItem::separator(),
///     MenuItem::normal("A"),
///     MenuItem::separator(),
///     MenuItem::separator(),
///     MenuItem::normal("B"),
///     MenuItem::separator(),
/// ];
/// assert_eq!(
///     collapsed_separators(&items),
///     [true, false, false, true, false, true]
/// );
/// ```
pub fn collapsed_separators(items: &[MenuItem]) -> Vec<bool> {
    let mut collapsed = vec![false; items.len()];
    let is_separator = |item: &MenuItem| item.kind == ItemKind::Separator && !item.is_hidden();
    let is_content = |item: &MenuItem| item.kind != ItemKind::Separator && !item.is_hidden();

    let (Some(first), Some(last)) = (
        items.iter().position(is_content),
        items.iter().rposition(is_content),
    ) else {
        // Nothing but separators and hidden items.
        for (flag, item) in collapsed.iter_mut().zip(items) {
            *flag = is_separator(item);
        }
        return collapsed;
    };

    for i in (0..first).chain(last + 1..items.len()) {
        collapsed[i] = is_separator(&items[i]);
    }

    let mut after_separator = false;
    for i in first + 1..last {
        let item = &items[i];
        if item.is_hidden() {
            continue;
        }
        if item.kind != ItemKind::Separator {
            after_separator = false;
        } else if after_separator {
            collapsed[i] = true;
        } else {
            after_separator = true;
        }
    }
    collapsed
}
