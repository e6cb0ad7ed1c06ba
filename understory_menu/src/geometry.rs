// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of menus within the viewport.
//!
//! All coordinates are in document space. The [`Viewport`] describes which part of the
//! document is visible: its origin is the scroll offset and its size the client area.
//! Menus are measured before any fit decision is made, so every function here takes the
//! menu's final size as input.

use kurbo::{Insets, Point, Rect, Size, Vec2};

/// The visible region of the document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Document scroll offset.
    pub scroll: Vec2,
    /// Size of the visible client area.
    pub size: Size,
}

impl Viewport {
    /// A viewport with no scroll offset.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            scroll: Vec2::ZERO,
            size,
        }
    }

    /// The visible region in document coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll.to_point(), self.size)
    }
}

/// Options for [`MenuTree::open`](crate::MenuTree::open).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OpenOptions {
    /// Honor the requested x exactly, even if the menu overflows the right edge.
    pub force_x: bool,
    /// Honor the requested y exactly, even if the menu overflows the bottom edge.
    pub force_y: bool,
}

/// Maximum height of a root menu opened at `y`.
///
/// A forced y cannot move up, so only the space below it is available.
#[must_use]
pub fn root_max_height(viewport: &Viewport, y: f64, force_y: bool) -> f64 {
    let offered = if force_y { y - viewport.scroll.y } else { 0.0 };
    (viewport.size.height - offered).max(0.0)
}

/// Final size of a menu whose content measures `natural`.
///
/// Content taller than `max_height` is clipped to it and the menu widens to make room for a
/// vertical scrollbar.
#[must_use]
pub fn fit_size(natural: Size, max_height: f64, scrollbar_thickness: f64) -> Size {
    if natural.height > max_height {
        Size::new(natural.width + scrollbar_thickness, max_height)
    } else {
        natural
    }
}

/// Origin of a root menu of `size` requested at `at`.
///
/// Unforced coordinates are pulled back inside the viewport's right and bottom edges; both
/// coordinates are then clamped to be non-negative.
#[must_use]
pub fn place_root(viewport: &Viewport, at: Point, size: Size, options: OpenOptions) -> Point {
    let bounds = viewport.rect();
    let Point { mut x, mut y } = at;

    if !options.force_x && x + size.width > bounds.x1 {
        x -= x + size.width - bounds.x1;
    }
    if !options.force_y && y + size.height > bounds.y1 {
        y = if y > bounds.y1 {
            bounds.y1 - size.height
        } else {
            y - (y + size.height - bounds.y1)
        };
    }

    Point::new(x.max(0.0), y.max(0.0))
}

/// Origin of a submenu of `size` opened next to the parent item at `item`.
///
/// The submenu prefers the item's right side, overlapping it by `overlap`, and flips to the
/// left side when that would overflow. Vertically it aligns its first row with the item,
/// flipping to align its last row with the item when that would overflow. `insets` are the
/// submenu's own border and padding.
#[must_use]
pub fn place_submenu(
    viewport: &Viewport,
    item: Rect,
    size: Size,
    insets: Insets,
    overlap: f64,
) -> Point {
    let bounds = viewport.rect();

    let mut x = item.x1 - overlap;
    if x + size.width > bounds.x1 {
        x = item.x0 + overlap - size.width;
    }

    let mut y = item.y0 - insets.y0;
    if y + size.height > bounds.y1 {
        y = item.y1 + insets.y1 - size.height;
    }

    Point::new(x.max(0.0), y.max(0.0))
}
