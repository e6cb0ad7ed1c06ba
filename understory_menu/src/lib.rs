// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: a headless popup-menu engine.
//!
//! Understory Menu models context menus and dropdowns the way a desktop toolkit does, without
//! owning any presentation. It keeps the menu state; the host supplies events, time, and a
//! renderer for rows.
//!
//! - Menus are ordered lists of items: normal, check, radio, submenu, and separator.
//! - Open menus form chains: a root overlay plus at most one open submenu per menu.
//! - Pointer hover opens and closes submenus through debounced timers.
//! - Keyboard input (arrows, Enter, Escape, mnemonics) always goes to the deepest open menu.
//! - Menus are positioned against a [`Viewport`], flipping and clamping to stay visible.
//!
//! ## Host integration
//!
//! The engine owns no clock and no widgets.
//! - Rows are created, re-tagged, and measured through an [`ItemRenderer`]. [`TextRenderer`] is a
//!   plain-text implementation useful for terminals and tests.
//! - Pointer events carry a millisecond timestamp. Hosts call [`MenuTree::advance`] to let hover
//!   timers fire; [`MenuTree::next_deadline`] says when that next matters.
//! - Notifications ([`MenuEvent::Opened`], [`MenuEvent::Triggered`], [`MenuEvent::Closed`]) are
//!   queued and read with [`MenuTree::drain_events`].
//!
//! ## API overview
//!
//! - [`MenuTree`]: arena of menus, renderer, configuration, and the event queue.
//! - [`MenuId`]: generational handle of a menu.
//! - [`MenuItem`], [`ItemKind`], [`ItemFlags`]: item records.
//! - [`ItemTags`]: style markers applied to rendered rows.
//! - [`MenuConfig`]: hover delay, overlap, insets, and template limits.
//! - [`ItemOptions`] / [`TemplateEntry`]: plain records for [`MenuTree::from_template`].
//!
//! Key operations:
//! - [`MenuTree::insert`] / [`MenuTree::remove`] / [`MenuTree::clear`] edit a menu's items.
//! - [`MenuTree::open`] mounts a root at a point; [`MenuTree::close`] closes a menu and its
//!   descendants.
//! - [`MenuTree::handle_pointer`] and [`MenuTree::dispatch_key`] route input into a chain.
//! - [`MenuTree::trigger_active_item`] triggers programmatically.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_menu::{
//!     InputResult, Key, MenuEvent, MenuItem, MenuTree, OpenOptions, PointerEvent,
//!     TextRenderer, Viewport,
//! };
//!
//! let mut tree = MenuTree::new(TextRenderer::default());
//! tree.set_viewport(Viewport::new(Size::new(1024.0, 768.0)));
//!
//! let recent = tree.create_menu();
//! tree.add(recent, MenuItem::normal("notes.txt").with_command("open-recent"));
//!
//! let file = tree.create_menu();
//! tree.add(file, MenuItem::normal("&&Open").with_command("open"));
//! tree.add(file, MenuItem::submenu("&&Recent", recent));
//! tree.add(file, MenuItem::separator());
//! tree.add(file, MenuItem::normal("&&Quit").with_command("quit"));
//!
//! tree.open(file, Point::new(100.0, 100.0), OpenOptions::default());
//!
//! // Hovering the submenu item opens it once the hover delay has passed.
//! let row = tree.item_bounds(file, 1).unwrap().center();
//! tree.handle_pointer(file, PointerEvent::moved(row, 1_000));
//! tree.advance(1_000 + tree.config().hover_delay_ms);
//! assert!(tree.is_open(recent));
//!
//! // Keys go to the deepest open menu.
//! assert_eq!(tree.dispatch_key(file, Key::Down), InputResult::Consumed);
//! tree.dispatch_key(file, Key::Enter);
//!
//! let triggered: Vec<_> = tree
//!     .drain_events()
//!     .filter_map(|event| match event {
//!         MenuEvent::Triggered { menu, item } => Some((menu, item.command)),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(
//!     triggered,
//!     [(recent, String::from("open-recent")), (file, String::from("open-recent"))]
//! );
//! assert!(!tree.is_open(file));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collapse;
mod config;
mod error;
mod event;
mod geometry;
mod input;
mod item;
mod navigation;
mod render;
mod tags;
mod template;
mod timer;
mod tree;
mod types;

pub use collapse::collapsed_separators;
pub use config::MenuConfig;
pub use error::TemplateError;
pub use event::{Button, InputResult, Key, MenuEvent, PRIMARY_BUTTON, PointerEvent, PointerKind};
pub use geometry::{OpenOptions, Viewport, fit_size, place_root, place_submenu, root_max_height};
pub use input::MenuHit;
pub use item::{ItemFlags, ItemKind, MNEMONIC_MARKER, MenuItem};
pub use render::{ItemRenderer, TextNode, TextRenderer};
pub use tags::ItemTags;
pub use template::{ItemOptions, TemplateEntry};
pub use timer::TimerKind;
pub use tree::{Chain, MenuTree};
pub use types::{ChildLink, MenuId, Mount};
