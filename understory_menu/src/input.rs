// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and keyboard routing for open menu chains.
//!
//! Pointer events are hit-tested against the whole chain, deepest menu first, and translated
//! into hover transitions (enter, move, leave) on the menus they touch. Hover never opens or
//! closes a submenu directly: it arms the per-menu timers, which fire from
//! [`MenuTree::advance`]. Keyboard input only ever reaches the leaf of a chain.

use kurbo::Point;
use tracing::debug;

use crate::event::{InputResult, Key, PRIMARY_BUTTON, PointerEvent, PointerKind};
use crate::item::ItemKind;
use crate::render::ItemRenderer;
use crate::timer::TimerKind;
use crate::tree::MenuTree;
use crate::types::MenuId;

/// Result of hit testing a chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuHit {
    /// The deepest open menu whose frame contains the point.
    pub menu: MenuId,
    /// The visible row under the point, if any.
    pub index: Option<usize>,
}

impl<R: ItemRenderer> MenuTree<R> {
    /// Find the menu and row under `point` in the chain containing `id`.
    ///
    /// Submenus are tested before their parents, so an overlapping submenu wins.
    pub fn hit_test(&self, id: MenuId, point: Point) -> Option<MenuHit> {
        self.chain(id).iter().rev().find_map(|&menu| {
            let frame = self.frame(menu)?;
            if !frame.contains(point) {
                return None;
            }
            let index = (0..self.len(menu)).find(|&i| {
                self.tags(menu, i).is_some_and(|tags| !tags.is_suppressed())
                    && self.item_bounds(menu, i).is_some_and(|r| r.contains(point))
            });
            Some(MenuHit { menu, index })
        })
    }

    /// Route a pointer event to the chain containing `id`.
    ///
    /// - A press outside every menu of the chain closes the chain and is left for the host.
    /// - A move updates hover state and the hover timers.
    /// - A primary release over an item triggers it, or opens its submenu.
    pub fn handle_pointer(&mut self, id: MenuId, event: PointerEvent) -> InputResult {
        self.observe_time(event.time);
        if !self.is_open(id) {
            return InputResult::Ignored;
        }
        let root = self.root_of(id);
        let hit = self.hit_test(root, event.position);

        match event.kind {
            PointerKind::Down => {
                if hit.is_some() {
                    return InputResult::Consumed;
                }
                debug!(menu = ?root, "press outside menu chain");
                self.close(root);
                InputResult::Ignored
            }
            PointerKind::Move => {
                self.set_hovered(hit.map(|h| h.menu), event.position);
                match hit {
                    Some(hit) => {
                        self.pointer_move(hit.menu, hit.index);
                        InputResult::Consumed
                    }
                    None => InputResult::Ignored,
                }
            }
            PointerKind::Up => {
                let Some(hit) = hit else {
                    return InputResult::Ignored;
                };
                if event.button == PRIMARY_BUTTON && hit.index.is_some() {
                    self.pointer_move(hit.menu, hit.index);
                    self.pointer_release(hit.menu);
                }
                InputResult::Consumed
            }
            PointerKind::Leave => {
                self.set_hovered(None, event.position);
                InputResult::Ignored
            }
        }
    }

    fn set_hovered(&mut self, target: Option<MenuId>, position: Point) {
        if self.hovered == target {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.pointer_leave(previous, position);
        }
        if let Some(next) = target {
            self.pointer_enter(next);
        }
        self.hovered = target;
    }

    /// The pointer entered `id`: every ancestor keeps its submenu item selected and stops any
    /// pending hover timer.
    fn pointer_enter(&mut self, id: MenuId) {
        let mut cursor = self.parent_of(id);
        while let Some(ancestor) = cursor {
            self.cancel_timers(ancestor);
            let index = self.child_index(ancestor);
            self.set_active_index(ancestor, index);
            cursor = self.parent_of(ancestor);
        }
    }

    fn pointer_move(&mut self, id: MenuId, index: Option<usize>) {
        if index == self.active_index(id) {
            return;
        }
        self.set_active_index(id, index);
        let index = self.active_index(id);
        let child_index = self.child_index(id);
        if index == child_index {
            self.cancel_timers(id);
            return;
        }
        if child_index.is_some() {
            self.start_timer(id, TimerKind::Close);
        }
        self.cancel_timer(id, TimerKind::Open);
        if self
            .active_item(id)
            .is_some_and(|item| item.kind == ItemKind::Submenu && item.submenu.is_some())
        {
            self.start_timer(id, TimerKind::Open);
        }
    }

    fn pointer_leave(&mut self, id: MenuId, position: Point) {
        self.cancel_timer(id, TimerKind::Open);
        let Some(link) = self.child_of(id) else {
            self.set_active_index(id, None);
            return;
        };
        let into_submenu = self
            .chain(link.menu)
            .iter()
            .skip_while(|&&menu| menu != link.menu)
            .any(|&menu| self.frame(menu).is_some_and(|f| f.contains(position)));
        if into_submenu {
            self.cancel_timer(id, TimerKind::Close);
            return;
        }
        self.set_active_index(id, None);
        self.start_timer(id, TimerKind::Close);
    }

    fn pointer_release(&mut self, id: MenuId) {
        let Some(kind) = self.active_item(id).map(|item| item.kind) else {
            return;
        };
        if kind == ItemKind::Submenu {
            self.cancel_timers(id);
            self.open_child_menu(id, false);
        } else {
            self.trigger_active_item(id);
        }
    }

    /// Apply a key to `id`.
    ///
    /// Only the leaf of a chain (an open menu with no open submenu) handles keys; anything
    /// else reports [`InputResult::Ignored`]. Use [`MenuTree::dispatch_key`] to route a key to
    /// whichever menu currently is the leaf.
    pub fn handle_key(&mut self, id: MenuId, key: Key) -> InputResult {
        if !self.is_open(id) || self.child_of(id).is_some() {
            return InputResult::Ignored;
        }
        match key {
            Key::Enter => self.trigger_active_item(id),
            Key::Escape => self.close(id),
            Key::Left => {
                if self.parent_of(id).is_none() {
                    return InputResult::Ignored;
                }
                self.close(id);
            }
            Key::Right => {
                if self.active_item(id).map(|item| item.kind) != Some(ItemKind::Submenu) {
                    return InputResult::Ignored;
                }
                self.open_active_submenu(id);
            }
            Key::Up => self.activate_previous(id),
            Key::Down => self.activate_next(id),
            Key::Char(ch) => self.activate_mnemonic(id, ch),
        }
        InputResult::Consumed
    }

    /// Route a key to the leaf of the chain containing `id`.
    pub fn dispatch_key(&mut self, id: MenuId, key: Key) -> InputResult {
        let leaf = self.leaf_of(self.root_of(id));
        self.handle_key(leaf, key)
    }
}
