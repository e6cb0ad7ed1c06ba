// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic scans over selectable items.
//!
//! Every scan starts just past the current selection and wraps around, visiting the current
//! item last. With no selection, forward scans start at the first item and backward scans at
//! the last.

use crate::item::MenuItem;

fn scan_forward(
    items: &[MenuItem],
    current: Option<usize>,
    pred: impl Fn(&MenuItem) -> bool,
) -> Option<usize> {
    let n = items.len();
    let start = current.map_or(0, |c| c + 1);
    (0..n)
        .map(|step| (start + step) % n)
        .find(|&i| pred(&items[i]))
}

fn scan_backward(
    items: &[MenuItem],
    current: Option<usize>,
    pred: impl Fn(&MenuItem) -> bool,
) -> Option<usize> {
    let n = items.len();
    let start = current.unwrap_or(n);
    (1..=n)
        .map(|step| (start + n - step) % n)
        .find(|&i| pred(&items[i]))
}

/// Next selectable item after `current`, wrapping around.
pub(crate) fn next_selectable(items: &[MenuItem], current: Option<usize>) -> Option<usize> {
    scan_forward(items, current, MenuItem::is_selectable)
}

/// Previous selectable item before `current`, wrapping around.
pub(crate) fn previous_selectable(items: &[MenuItem], current: Option<usize>) -> Option<usize> {
    scan_backward(items, current, MenuItem::is_selectable)
}

/// First selectable item after `current` whose mnemonic matches `ch`.
pub(crate) fn find_mnemonic(items: &[MenuItem], current: Option<usize>, ch: char) -> Option<usize> {
    scan_forward(items, current, |item| {
        item.is_selectable() && item.has_mnemonic(ch)
    })
}
