// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core menu arena: collections, selection, chain links, open/close, and timers.

use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::collapse::collapsed_separators;
use crate::config::MenuConfig;
use crate::event::MenuEvent;
use crate::geometry::{OpenOptions, Viewport, fit_size, place_root, place_submenu, root_max_height};
use crate::item::{ItemFlags, ItemKind, MenuItem};
use crate::navigation::{find_mnemonic, next_selectable, previous_selectable};
use crate::render::ItemRenderer;
use crate::tags::ItemTags;
use crate::timer::{Timer, TimerKind};
use crate::types::{ChildLink, MenuId, Mount};

/// Menu ids of a chain, root first.
pub type Chain = SmallVec<[MenuId; 4]>;

/// Arena owning every menu, the item renderer, and the pending notifications.
///
/// Menus are addressed by [`MenuId`]. A menu holds an ordered list of [`MenuItem`]s and one
/// renderer node per item, at the same position. Open menus form chains: a root opened with
/// [`MenuTree::open`] and at most one open submenu per menu below it.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_menu::{MenuEvent, MenuItem, MenuTree, OpenOptions, TextRenderer, Viewport};
///
/// let mut tree = MenuTree::new(TextRenderer::default());
/// tree.set_viewport(Viewport::new(Size::new(800.0, 600.0)));
///
/// let menu = tree.create_menu();
/// tree.add(menu, MenuItem::normal("&&Copy").with_command("edit:copy"));
/// tree.add(menu, MenuItem::normal("&&Paste").with_command("edit:paste"));
///
/// tree.open(menu, Point::new(20.0, 20.0), OpenOptions::default());
/// tree.activate_next(menu);
/// tree.trigger_active_item(menu);
///
/// let events: Vec<_> = tree.drain_events().collect();
/// assert!(matches!(
///     &events[1],
///     MenuEvent::Triggered { item, .. } if item.command == "edit:copy"
/// ));
/// assert!(!tree.is_open(menu));
/// ```
pub struct MenuTree<R: ItemRenderer> {
    /// slots
    menus: Vec<Option<Menu<R::Node>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    renderer: R,
    config: MenuConfig,
    viewport: Viewport,
    now: u64,
    events: Vec<MenuEvent>,
    /// Menu currently under the pointer.
    pub(crate) hovered: Option<MenuId>,
}

impl<R: ItemRenderer> core::fmt::Debug for MenuTree<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.menus.len();
        let alive = self.menus.iter().filter(|m| m.is_some()).count();
        let open = self
            .menus
            .iter()
            .flatten()
            .filter(|m| m.mount.is_open())
            .count();
        f.debug_struct("MenuTree")
            .field("menus_total", &total)
            .field("menus_alive", &alive)
            .field("menus_open", &open)
            .field("now", &self.now)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

/// One row: the renderer node plus the engine's view of it.
struct Row<N> {
    node: N,
    tags: ItemTags,
    /// Bounds relative to the menu frame origin, as of the last render pass.
    bounds: Rect,
}

struct Menu<N> {
    generation: u32,
    items: Vec<MenuItem>,
    rows: Vec<Row<N>>,
    active: Option<usize>,
    parent: Option<MenuId>,
    child: Option<ChildLink>,
    open_timer: Timer,
    close_timer: Timer,
    mount: Mount,
    /// Document-space frame while open.
    frame: Rect,
    /// Unclipped size measured by the last render pass.
    natural: Size,
    max_height: f64,
}

impl<N> Menu<N> {
    fn new(generation: u32) -> Self {
        Self {
            generation,
            items: Vec::new(),
            rows: Vec::new(),
            active: None,
            parent: None,
            child: None,
            open_timer: Timer::default(),
            close_timer: Timer::default(),
            mount: Mount::Detached,
            frame: Rect::ZERO,
            natural: Size::ZERO,
            max_height: f64::INFINITY,
        }
    }

    fn timer_mut(&mut self, kind: TimerKind) -> &mut Timer {
        match kind {
            TimerKind::Open => &mut self.open_timer,
            TimerKind::Close => &mut self.close_timer,
        }
    }
}

fn slot<N>(menus: &[Option<Menu<N>>], id: MenuId) -> Option<&Menu<N>> {
    menus
        .get(id.idx())?
        .as_ref()
        .filter(|m| m.generation == id.1)
}

fn slot_mut<N>(menus: &mut [Option<Menu<N>>], id: MenuId) -> Option<&mut Menu<N>> {
    menus
        .get_mut(id.idx())?
        .as_mut()
        .filter(|m| m.generation == id.1)
}

impl<R: ItemRenderer> MenuTree<R> {
    /// Create an empty arena with the default [`MenuConfig`].
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, MenuConfig::default())
    }

    /// Create an empty arena with an explicit configuration.
    pub fn with_config(renderer: R, config: MenuConfig) -> Self {
        Self {
            menus: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            renderer,
            config,
            viewport: Viewport::default(),
            now: 0,
            events: Vec::new(),
            hovered: None,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The item renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The item renderer, mutably.
    ///
    /// Changes that affect measurement are picked up on the next [`MenuTree::update`].
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The viewport used for placement.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Set the viewport used for placement. Menus already open keep their position.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The latest timestamp seen, in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Drain queued notifications in emission order.
    pub fn drain_events(&mut self) -> alloc::vec::Drain<'_, MenuEvent> {
        self.events.drain(..)
    }

    /// Create a new, empty, closed menu.
    pub fn create_menu(&mut self) -> MenuId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.menus[idx] = Some(Menu::new(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.menus.push(Some(Menu::new(generation)));
            self.generations.push(generation);
            (self.menus.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "MenuId stores 32-bit slot indices."
        )]
        let id = MenuId::new(idx as u32, generation);
        trace!(menu = ?id, "created menu");
        id
    }

    /// Close a menu and release it. Its id, and every item still referring to it, go stale.
    pub fn dispose(&mut self, id: MenuId) {
        if !self.is_alive(id) {
            return;
        }
        self.close(id);
        self.menus[id.idx()] = None;
        self.free_list.push(id.idx());
        debug!(menu = ?id, "disposed menu");
    }

    /// Whether `id` refers to a live menu.
    pub fn is_alive(&self, id: MenuId) -> bool {
        slot(&self.menus, id).is_some()
    }

    // --- Collection -------------------------------------------------------------------------

    /// Number of items in a menu.
    pub fn len(&self, id: MenuId) -> usize {
        slot(&self.menus, id).map_or(0, |m| m.items.len())
    }

    /// Whether a menu has no items.
    pub fn is_empty(&self, id: MenuId) -> bool {
        self.len(id) == 0
    }

    /// Items of a menu, in order.
    pub fn items(&self, id: MenuId) -> &[MenuItem] {
        slot(&self.menus, id).map_or(&[], |m| &m.items)
    }

    /// One item of a menu.
    pub fn item(&self, id: MenuId, index: usize) -> Option<&MenuItem> {
        slot(&self.menus, id)?.items.get(index)
    }

    /// The renderer node paired with an item.
    pub fn node(&self, id: MenuId, index: usize) -> Option<&R::Node> {
        slot(&self.menus, id)?.rows.get(index).map(|row| &row.node)
    }

    /// Style tags applied to an item's node.
    ///
    /// The `ACTIVE` tag is always current; the rest reflect the last render pass.
    pub fn tags(&self, id: MenuId, index: usize) -> Option<ItemTags> {
        slot(&self.menus, id)?.rows.get(index).map(|row| row.tags)
    }

    /// Document-space bounds of an item's row, as of the last render pass.
    pub fn item_bounds(&self, id: MenuId, index: usize) -> Option<Rect> {
        let menu = slot(&self.menus, id)?;
        let row = menu.rows.get(index)?;
        Some(row.bounds + menu.frame.origin().to_vec2())
    }

    /// Insert `item` at `index`, clamped to the end of the menu.
    ///
    /// An open menu is closed first, and the selection is cleared. The item's node is created
    /// empty and populated on the next render pass.
    pub fn insert(&mut self, id: MenuId, index: usize, item: MenuItem) {
        if !self.is_alive(id) {
            return;
        }
        self.close(id);
        self.set_active_index(id, None);
        let node = self.renderer.create_node(&item);
        let Some(menu) = slot_mut(&mut self.menus, id) else {
            return;
        };
        let index = index.min(menu.items.len());
        menu.items.insert(index, item);
        menu.rows.insert(
            index,
            Row {
                node,
                tags: ItemTags::empty(),
                bounds: Rect::ZERO,
            },
        );
        debug_assert_eq!(menu.items.len(), menu.rows.len(), "items and nodes diverged");
    }

    /// Append `item` to the end of the menu.
    pub fn add(&mut self, id: MenuId, item: MenuItem) {
        self.insert(id, usize::MAX, item);
    }

    /// Remove and return the item at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, id: MenuId, index: usize) -> Option<MenuItem> {
        if index >= self.len(id) {
            return None;
        }
        self.close(id);
        self.set_active_index(id, None);
        let menu = slot_mut(&mut self.menus, id)?;
        menu.rows.remove(index);
        Some(menu.items.remove(index))
    }

    /// Remove every item.
    pub fn clear(&mut self, id: MenuId) {
        if !self.is_alive(id) {
            return;
        }
        self.close(id);
        self.set_active_index(id, None);
        if let Some(menu) = slot_mut(&mut self.menus, id) {
            menu.items.clear();
            menu.rows.clear();
        }
    }

    /// Replace an item's state flags without touching the collection.
    ///
    /// The menu stays open and is rendered again, so its rows and hit areas match the new
    /// state. If the active item stops being selectable, the selection is cleared.
    pub fn set_item_flags(&mut self, id: MenuId, index: usize, flags: ItemFlags) {
        let Some(item) = slot_mut(&mut self.menus, id).and_then(|m| m.items.get_mut(index)) else {
            return;
        };
        item.flags = flags;
        let selectable = item.is_selectable();
        if !selectable && self.active_index(id) == Some(index) {
            self.set_active_index(id, None);
        }
        if self.is_open(id) {
            self.update(id);
        }
    }

    // --- Selection --------------------------------------------------------------------------

    /// Index of the active item.
    pub fn active_index(&self, id: MenuId) -> Option<usize> {
        slot(&self.menus, id)?.active
    }

    /// The active item.
    pub fn active_item(&self, id: MenuId) -> Option<&MenuItem> {
        let menu = slot(&self.menus, id)?;
        menu.items.get(menu.active?)
    }

    /// Set the active item.
    ///
    /// Indices that do not name a selectable item clear the selection instead. Changing the
    /// selection moves the `ACTIVE` tag from the old node to the new one.
    pub fn set_active_index(&mut self, id: MenuId, index: Option<usize>) {
        let Some(menu) = slot_mut(&mut self.menus, id) else {
            return;
        };
        let index = index.filter(|&i| menu.items.get(i).is_some_and(MenuItem::is_selectable));
        if menu.active == index {
            return;
        }
        let previous = mem::replace(&mut menu.active, index);
        for (changed, on) in [(previous, false), (index, true)] {
            let Some(i) = changed else { continue };
            if let (Some(row), Some(item)) = (menu.rows.get_mut(i), menu.items.get(i)) {
                row.tags.set(ItemTags::ACTIVE, on);
                self.renderer.update_node(&mut row.node, item, row.tags);
            }
        }
        trace!(menu = ?id, ?previous, active = ?index, "active item changed");
    }

    /// Select the next selectable item, wrapping around.
    pub fn activate_next(&mut self, id: MenuId) {
        let next = next_selectable(self.items(id), self.active_index(id));
        self.set_active_index(id, next);
    }

    /// Select the previous selectable item, wrapping around.
    pub fn activate_previous(&mut self, id: MenuId) {
        let previous = previous_selectable(self.items(id), self.active_index(id));
        self.set_active_index(id, previous);
    }

    /// Select the next item whose mnemonic matches `ch`, or clear the selection if none does.
    pub fn activate_mnemonic(&mut self, id: MenuId, ch: char) {
        let found = find_mnemonic(self.items(id), self.active_index(id), ch);
        self.set_active_index(id, found);
    }

    // --- Rendering --------------------------------------------------------------------------

    /// Run a render pass: collapse separators, refresh every node's tags through the renderer,
    /// and lay the rows out.
    ///
    /// Opening a menu always renders it first; call this after changing item flags or renderer
    /// settings on a menu that is already open.
    pub fn update(&mut self, id: MenuId) {
        let insets = self.config.frame_insets;
        let scrollbar = self.config.scrollbar_thickness;
        let Some(menu) = slot_mut(&mut self.menus, id) else {
            return;
        };

        let collapsed = collapsed_separators(&menu.items);
        let mut content = Size::ZERO;
        let mut heights: SmallVec<[f64; 16]> = SmallVec::with_capacity(menu.rows.len());
        for (i, (item, row)) in menu.items.iter().zip(&mut menu.rows).enumerate() {
            let mut tags = ItemTags::for_item(item);
            tags.set(ItemTags::ACTIVE, menu.active == Some(i));
            tags.set(ItemTags::COLLAPSED, collapsed[i]);
            row.tags = tags;
            self.renderer.update_node(&mut row.node, item, tags);

            let size = if tags.is_suppressed() {
                Size::ZERO
            } else {
                self.renderer.measure(&row.node, item, tags)
            };
            content.width = content.width.max(size.width);
            content.height += size.height;
            heights.push(size.height);
        }

        let mut y = insets.y0;
        for (row, height) in menu.rows.iter_mut().zip(heights) {
            row.bounds = Rect::new(insets.x0, y, insets.x0 + content.width, y + height);
            y += height;
        }
        menu.natural = Size::new(
            content.width + insets.x_value(),
            content.height + insets.y_value(),
        );
        if menu.mount.is_open() {
            let size = fit_size(menu.natural, menu.max_height, scrollbar);
            menu.frame = Rect::from_origin_size(menu.frame.origin(), size);
        }
        trace!(menu = ?id, width = menu.natural.width, height = menu.natural.height, "rendered menu");
    }

    // --- Chain ------------------------------------------------------------------------------

    /// Where a menu is mounted. Stale ids report [`Mount::Detached`].
    pub fn mount(&self, id: MenuId) -> Mount {
        slot(&self.menus, id).map_or(Mount::Detached, |m| m.mount)
    }

    /// Whether a menu is displayed, as a root or as a submenu.
    pub fn is_open(&self, id: MenuId) -> bool {
        self.mount(id).is_open()
    }

    /// Document-space frame of an open menu.
    pub fn frame(&self, id: MenuId) -> Option<Rect> {
        slot(&self.menus, id)
            .filter(|m| m.mount.is_open())
            .map(|m| m.frame)
    }

    /// The menu that opened `id` as a submenu.
    pub fn parent_of(&self, id: MenuId) -> Option<MenuId> {
        slot(&self.menus, id)?.parent
    }

    /// The open submenu of `id` and the item that opened it.
    pub fn child_of(&self, id: MenuId) -> Option<ChildLink> {
        slot(&self.menus, id)?.child
    }

    /// Index of the item whose submenu is open.
    pub fn child_index(&self, id: MenuId) -> Option<usize> {
        self.child_of(id).map(|link| link.index)
    }

    /// The root of the chain containing `id`.
    pub fn root_of(&self, id: MenuId) -> MenuId {
        let mut root = id;
        while let Some(parent) = self.parent_of(root) {
            root = parent;
        }
        root
    }

    /// The deepest open menu below `id`: the menu receiving keyboard input.
    pub fn leaf_of(&self, id: MenuId) -> MenuId {
        let mut leaf = id;
        while let Some(link) = self.child_of(leaf) {
            leaf = link.menu;
        }
        leaf
    }

    /// The menus from the root of `id`'s chain down to its leaf.
    pub fn chain(&self, id: MenuId) -> Chain {
        let mut chain = Chain::new();
        let mut cursor = Some(self.root_of(id));
        while let Some(menu) = cursor {
            chain.push(menu);
            cursor = self.child_of(menu).map(|link| link.menu);
        }
        chain
    }

    fn is_self_or_ancestor(&self, id: MenuId, candidate: MenuId) -> bool {
        let mut cursor = Some(id);
        while let Some(menu) = cursor {
            if menu == candidate {
                return true;
            }
            cursor = self.parent_of(menu);
        }
        false
    }

    fn link_child(&mut self, parent: MenuId, child: MenuId, index: usize) {
        debug_assert!(self.child_of(parent).is_none(), "parent already has a child");
        debug_assert!(self.parent_of(child).is_none(), "child already has a parent");
        if let Some(p) = slot_mut(&mut self.menus, parent) {
            p.child = Some(ChildLink { menu: child, index });
        }
        if let Some(c) = slot_mut(&mut self.menus, child) {
            c.parent = Some(parent);
        }
    }

    fn unlink_child(&mut self, parent: MenuId) -> Option<ChildLink> {
        let link = slot_mut(&mut self.menus, parent)?.child.take()?;
        if let Some(c) = slot_mut(&mut self.menus, link.menu)
            && c.parent == Some(parent)
        {
            c.parent = None;
        }
        Some(link)
    }

    // --- Transitions ------------------------------------------------------------------------

    /// Open `id` as the root of a chain, placed at `at` within the viewport.
    ///
    /// Does nothing if the menu is already displayed.
    pub fn open(&mut self, id: MenuId, at: Point, options: OpenOptions) {
        if !self.is_alive(id) || self.is_open(id) {
            return;
        }
        self.update(id);

        let viewport = self.viewport;
        let scrollbar = self.config.scrollbar_thickness;
        let max_height = root_max_height(&viewport, at.y, options.force_y);
        let Some(menu) = slot_mut(&mut self.menus, id) else {
            return;
        };
        let size = fit_size(menu.natural, max_height, scrollbar);
        let origin = place_root(&viewport, at, size, options);
        menu.max_height = max_height;
        menu.frame = Rect::from_origin_size(origin, size);
        menu.mount = Mount::Overlay;

        debug!(menu = ?id, x = origin.x, y = origin.y, "opened root menu");
        self.events.push(MenuEvent::Opened { menu: id });
    }

    /// Make the open submenu match the active item.
    ///
    /// Opens the submenu of the active item (closing any other open submenu first), or closes
    /// the open submenu when the active item has none. With `activate_first`, the newly opened
    /// submenu selects its first selectable item.
    pub(crate) fn open_child_menu(&mut self, id: MenuId, activate_first: bool) {
        let Some(menu) = slot(&self.menus, id) else {
            return;
        };
        if !menu.mount.is_open() {
            return;
        }
        let current = menu.child;
        let target = menu.active.and_then(|index| {
            let item = &menu.items[index];
            (item.kind == ItemKind::Submenu)
                .then_some(item.submenu)
                .flatten()
                .map(|submenu| (submenu, index))
        });
        let Some((submenu, index)) = target.filter(|(submenu, _)| self.is_alive(*submenu)) else {
            self.close_child(id);
            return;
        };
        if current.is_some_and(|link| link.menu == submenu) {
            return;
        }
        self.close_child(id);

        if self.is_self_or_ancestor(id, submenu) {
            debug!(menu = ?id, submenu = ?submenu, "refusing to open an ancestor as a submenu");
            return;
        }
        if self.is_open(submenu) {
            // Shared submenu still displayed by another chain.
            self.close(submenu);
        }
        // Place against the parent's current rows, not the last pass.
        self.update(id);
        let Some(item_rect) = self.item_bounds(id, index) else {
            return;
        };

        self.link_child(id, submenu, index);
        self.update(submenu);

        let viewport = self.viewport;
        let MenuConfig {
            submenu_overlap,
            scrollbar_thickness,
            frame_insets,
            ..
        } = self.config;
        let Some(child) = slot_mut(&mut self.menus, submenu) else {
            return;
        };
        let max_height = viewport.size.height;
        let size = fit_size(child.natural, max_height, scrollbar_thickness);
        let origin = place_submenu(&viewport, item_rect, size, frame_insets, submenu_overlap);
        child.max_height = max_height;
        child.frame = Rect::from_origin_size(origin, size);
        child.mount = Mount::Submenu;

        if activate_first {
            self.set_active_index(submenu, None);
            self.activate_next(submenu);
        }
        debug!(menu = ?id, submenu = ?submenu, index, "opened submenu");
        self.events.push(MenuEvent::Opened { menu: submenu });
    }

    /// Open the active item's submenu and select its first selectable item.
    ///
    /// If the active item has no submenu, any open submenu is closed instead.
    pub fn open_active_submenu(&mut self, id: MenuId) {
        self.open_child_menu(id, true);
    }

    /// Close the open submenu of `id`, and everything below it.
    pub fn close_child(&mut self, id: MenuId) {
        if let Some(link) = self.unlink_child(id) {
            debug!(menu = ?id, submenu = ?link.menu, "closing submenu");
            self.close(link.menu);
        }
    }

    /// Close a menu.
    ///
    /// Cancels its timers, clears its selection, closes its open submenu (recursively), detaches
    /// it from its parent, and queues [`MenuEvent::Closed`]. Closing a closed menu does nothing
    /// observable.
    pub fn close(&mut self, id: MenuId) {
        let Some(menu) = slot_mut(&mut self.menus, id) else {
            return;
        };
        menu.open_timer.cancel();
        menu.close_timer.cancel();
        let parent = menu.parent;

        self.set_active_index(id, None);
        self.close_child(id);
        if let Some(parent) = parent
            && self.child_of(parent).is_some_and(|link| link.menu == id)
        {
            self.unlink_child(parent);
        }

        let Some(menu) = slot_mut(&mut self.menus, id) else {
            return;
        };
        menu.parent = None;
        if !menu.mount.is_open() {
            return;
        }
        menu.mount = Mount::Detached;
        menu.frame = Rect::ZERO;
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        debug!(menu = ?id, "closed menu");
        self.events.push(MenuEvent::Closed { menu: id });
    }

    /// Trigger the active item.
    ///
    /// A submenu item opens its submenu and selects the submenu's first item. Any other item
    /// queues [`MenuEvent::Triggered`] on this menu and on every ancestor, then closes the
    /// whole chain.
    pub fn trigger_active_item(&mut self, id: MenuId) {
        if !self.is_open(id) {
            return;
        }
        let Some(item) = self.active_item(id).cloned() else {
            return;
        };
        self.cancel_timers(id);
        if item.kind == ItemKind::Submenu {
            self.open_child_menu(id, true);
            return;
        }

        debug!(menu = ?id, command = %item.command, "triggered item");
        let mut root = id;
        let mut cursor = Some(id);
        while let Some(menu) = cursor {
            self.events.push(MenuEvent::Triggered {
                menu,
                item: item.clone(),
            });
            root = menu;
            cursor = self.parent_of(menu);
        }
        self.close(root);
    }

    // --- Timers -----------------------------------------------------------------------------

    pub(crate) fn start_timer(&mut self, id: MenuId, kind: TimerKind) {
        let (now, delay) = (self.now, self.config.hover_delay_ms);
        if let Some(menu) = slot_mut(&mut self.menus, id)
            && menu.timer_mut(kind).start(now, delay)
        {
            trace!(menu = ?id, ?kind, deadline = now.saturating_add(delay), "timer started");
        }
    }

    pub(crate) fn cancel_timer(&mut self, id: MenuId, kind: TimerKind) {
        if let Some(menu) = slot_mut(&mut self.menus, id)
            && menu.timer_mut(kind).cancel()
        {
            trace!(menu = ?id, ?kind, "timer cancelled");
        }
    }

    pub(crate) fn cancel_timers(&mut self, id: MenuId) {
        self.cancel_timer(id, TimerKind::Open);
        self.cancel_timer(id, TimerKind::Close);
    }

    /// Deadline of a pending hover timer.
    pub fn timer_deadline(&self, id: MenuId, kind: TimerKind) -> Option<u64> {
        let menu = slot(&self.menus, id)?;
        match kind {
            TimerKind::Open => menu.open_timer.deadline(),
            TimerKind::Close => menu.close_timer.deadline(),
        }
    }

    /// Earliest pending timer deadline across all menus, for host scheduling.
    pub fn next_deadline(&self) -> Option<u64> {
        self.menus
            .iter()
            .flatten()
            .flat_map(|m| [m.open_timer.deadline(), m.close_timer.deadline()])
            .flatten()
            .min()
    }

    /// Advance the clock to `now` and run every timer that has come due.
    ///
    /// Timers re-run their routine against current state: an open timer opens whatever the
    /// active item points at by then, and a close timer closes whatever submenu is open.
    pub fn advance(&mut self, now: u64) {
        self.now = self.now.max(now);
        let now = self.now;

        let mut due: SmallVec<[(MenuId, TimerKind); 4]> = SmallVec::new();
        for (idx, entry) in self.menus.iter_mut().enumerate() {
            let Some(menu) = entry else { continue };
            #[allow(
                clippy::cast_possible_truncation,
                reason = "MenuId stores 32-bit slot indices."
            )]
            let id = MenuId::new(idx as u32, menu.generation);
            if menu.close_timer.fire(now) {
                due.push((id, TimerKind::Close));
            }
            if menu.open_timer.fire(now) {
                due.push((id, TimerKind::Open));
            }
        }

        for (id, kind) in due {
            trace!(menu = ?id, ?kind, "timer fired");
            match kind {
                TimerKind::Open => self.open_child_menu(id, false),
                TimerKind::Close => self.close_child(id),
            }
        }
    }

    pub(crate) fn observe_time(&mut self, time: u64) {
        self.now = self.now.max(time);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Size};

    use super::*;
    use crate::render::TextRenderer;

    fn tree() -> MenuTree<TextRenderer> {
        let mut tree = MenuTree::new(TextRenderer::default());
        tree.set_viewport(Viewport::new(Size::new(800.0, 600.0)));
        tree
    }

    fn menu_with(tree: &mut MenuTree<TextRenderer>, labels: &[&str]) -> MenuId {
        let id = tree.create_menu();
        for label in labels {
            tree.add(id, MenuItem::normal(*label));
        }
        id
    }

    /// root → "Sub" → mid → "Deeper" → leaf, with every menu open and the leaf's first item active.
    fn three_level_chain(tree: &mut MenuTree<TextRenderer>) -> (MenuId, MenuId, MenuId) {
        let leaf = menu_with(tree, &["Leaf A", "Leaf B"]);
        let mid = menu_with(tree, &["Mid A"]);
        tree.add(mid, MenuItem::submenu("Deeper", leaf));
        let root = menu_with(tree, &["Root A"]);
        tree.add(root, MenuItem::submenu("Sub", mid));

        tree.open(root, Point::new(10.0, 10.0), OpenOptions::default());
        tree.set_active_index(root, Some(1));
        tree.open_active_submenu(root);
        tree.set_active_index(mid, Some(1));
        tree.open_active_submenu(mid);
        (root, mid, leaf)
    }

    fn closed_menus(events: &[MenuEvent]) -> Vec<MenuId> {
        events
            .iter()
            .filter_map(|e| match e {
                MenuEvent::Closed { menu } => Some(*menu),
                _ => None,
            })
            .collect()
    }

    fn assert_link_invariants(tree: &MenuTree<TextRenderer>, ids: &[MenuId]) {
        for &id in ids {
            if let Some(link) = tree.child_of(id) {
                assert_eq!(tree.parent_of(link.menu), Some(id), "child must point back");
                assert_eq!(
                    tree.item(id, link.index).map(|i| i.kind),
                    Some(ItemKind::Submenu),
                    "child index must name a submenu item"
                );
            }
            if let Some(active) = tree.active_index(id) {
                assert!(tree.items(id)[active].is_selectable(), "active must be selectable");
            }
        }
    }

    #[test]
    fn liveness_create_dispose_reuse() {
        let mut tree = tree();
        let a = tree.create_menu();
        tree.dispose(a);
        assert!(!tree.is_alive(a));
        let b = tree.create_menu();
        assert_ne!(a, b, "reused slot must get a new generation");
        assert_eq!(a.idx(), b.idx());

        // Stale handles are ignored everywhere.
        tree.add(a, MenuItem::normal("x"));
        assert_eq!(tree.len(a), 0);
        tree.open(a, Point::ZERO, OpenOptions::default());
        assert!(!tree.is_open(a));
    }

    #[test]
    fn insert_clamps_and_keeps_nodes_paired() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a", "b"]);
        tree.insert(id, 99, MenuItem::normal("end"));
        tree.insert(id, 0, MenuItem::normal("start"));
        let labels: Vec<_> = tree.items(id).iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["start", "a", "b", "end"]);
        for i in 0..4 {
            assert!(tree.node(id, i).is_some());
        }
        assert!(tree.node(id, 4).is_none());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a", "b"]);
        assert_eq!(tree.remove(id, 5), None);
        assert_eq!(tree.remove(id, 0).map(|i| i.label), Some("a".into()));
        assert_eq!(tree.len(id), 1);
        tree.clear(id);
        assert!(tree.is_empty(id));
    }

    #[test]
    fn mutation_closes_open_menu_and_resets_selection() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a", "b"]);
        tree.open(id, Point::ZERO, OpenOptions::default());
        tree.set_active_index(id, Some(1));
        tree.drain_events().for_each(drop);

        tree.add(id, MenuItem::normal("c"));
        assert!(!tree.is_open(id));
        assert_eq!(tree.active_index(id), None);
        assert_eq!(
            tree.drain_events().collect::<Vec<_>>(),
            [MenuEvent::Closed { menu: id }]
        );
    }

    #[test]
    fn selection_coerces_unselectable_indices() {
        let mut tree = tree();
        let id = tree.create_menu();
        tree.add(id, MenuItem::normal("a"));
        tree.add(id, MenuItem::separator());
        tree.add(id, MenuItem::normal("c").disabled());
        tree.add(id, MenuItem::normal("d").hidden());

        tree.set_active_index(id, Some(0));
        assert_eq!(tree.active_index(id), Some(0));
        for bad in [1, 2, 3, 99] {
            tree.set_active_index(id, Some(0));
            tree.set_active_index(id, Some(bad));
            assert_eq!(tree.active_index(id), None, "index {bad} must clear");
        }
    }

    #[test]
    fn selection_toggles_active_tag() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a", "b"]);
        tree.update(id);
        tree.set_active_index(id, Some(0));
        assert!(tree.tags(id, 0).unwrap().contains(ItemTags::ACTIVE));
        assert!(tree.node(id, 0).unwrap().tags.contains(ItemTags::ACTIVE));

        tree.set_active_index(id, Some(1));
        assert!(!tree.tags(id, 0).unwrap().contains(ItemTags::ACTIVE));
        assert!(!tree.node(id, 0).unwrap().tags.contains(ItemTags::ACTIVE));
        assert!(tree.node(id, 1).unwrap().tags.contains(ItemTags::ACTIVE));
    }

    #[test]
    fn disabling_active_item_clears_selection() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a", "b"]);
        tree.open(id, Point::ZERO, OpenOptions::default());
        tree.set_active_index(id, Some(1));
        tree.set_item_flags(id, 1, ItemFlags::DISABLED);
        assert_eq!(tree.active_index(id), None);
        assert!(tree.is_open(id), "flag changes do not close the menu");
    }

    #[test]
    fn render_pass_collapses_and_lays_out() {
        let mut tree = tree();
        let id = tree.create_menu();
        tree.add(id, MenuItem::separator());
        tree.add(id, MenuItem::normal("A"));
        tree.add(id, MenuItem::separator());
        tree.add(id, MenuItem::separator());
        tree.add(id, MenuItem::normal("B"));
        tree.add(id, MenuItem::separator());
        tree.update(id);

        let collapsed: Vec<_> = (0..6)
            .map(|i| tree.tags(id, i).unwrap().contains(ItemTags::COLLAPSED))
            .collect();
        assert_eq!(collapsed, [true, false, false, true, false, true]);

        let insets = tree.config().frame_insets;
        let a = tree.item_bounds(id, 1).unwrap();
        let sep = tree.item_bounds(id, 2).unwrap();
        let b = tree.item_bounds(id, 4).unwrap();
        assert_eq!(a.y0, insets.y0);
        assert_eq!(sep.y0, a.y1);
        assert_eq!(b.y0, sep.y1);
        assert_eq!(tree.item_bounds(id, 3).unwrap().height(), 0.0);
    }

    #[test]
    fn hidden_toggle_recomputed_on_update() {
        let mut tree = tree();
        let id = tree.create_menu();
        tree.add(id, MenuItem::normal("A"));
        tree.add(id, MenuItem::separator());
        tree.add(id, MenuItem::normal("B"));
        tree.update(id);
        assert!(!tree.tags(id, 1).unwrap().contains(ItemTags::COLLAPSED));

        tree.set_item_flags(id, 2, ItemFlags::HIDDEN);
        tree.update(id);
        assert!(tree.tags(id, 1).unwrap().contains(ItemTags::COLLAPSED));
        assert!(tree.tags(id, 2).unwrap().contains(ItemTags::HIDDEN));
    }

    #[test]
    fn open_is_noop_when_already_open() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a"]);
        tree.open(id, Point::new(10.0, 10.0), OpenOptions::default());
        let frame = tree.frame(id).unwrap();
        tree.open(id, Point::new(300.0, 300.0), OpenOptions::default());
        assert_eq!(tree.frame(id), Some(frame));
        assert_eq!(tree.mount(id), Mount::Overlay);
        let opened = tree
            .drain_events()
            .filter(|e| matches!(e, MenuEvent::Opened { .. }))
            .count();
        assert_eq!(opened, 1);
    }

    #[test]
    fn open_root_clamps_right_edge_unless_forced() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["A fairly long label"]);
        tree.open(id, Point::new(790.0, 10.0), OpenOptions::default());
        let frame = tree.frame(id).unwrap();
        assert_eq!(frame.x1, 800.0);
        tree.close(id);

        tree.open(
            id,
            Point::new(790.0, 10.0),
            OpenOptions {
                force_x: true,
                force_y: false,
            },
        );
        let frame = tree.frame(id).unwrap();
        assert_eq!(frame.x0, 790.0);
        assert!(frame.x1 > 800.0);
    }

    #[test]
    fn tall_root_is_clipped_and_widened() {
        let mut tree = tree();
        let id = tree.create_menu();
        for _ in 0..40 {
            tree.add(id, MenuItem::normal("row"));
        }
        tree.update(id);
        let natural_width = tree.item_bounds(id, 0).unwrap().width() + 2.0;
        tree.open(id, Point::ZERO, OpenOptions::default());
        let frame = tree.frame(id).unwrap();
        assert_eq!(frame.height(), 600.0);
        assert_eq!(frame.width(), natural_width + tree.config().scrollbar_thickness);
    }

    #[test]
    fn submenu_opens_beside_active_item() {
        let mut tree = tree();
        let (root, mid, leaf) = three_level_chain(&mut tree);
        assert_eq!(tree.chain(root).as_slice(), [root, mid, leaf]);
        assert_eq!(tree.mount(mid), Mount::Submenu);
        assert_eq!(tree.leaf_of(root), leaf);
        assert_eq!(tree.root_of(leaf), root);
        assert_link_invariants(&tree, &[root, mid, leaf]);

        let item = tree.item_bounds(root, 1).unwrap();
        let frame = tree.frame(mid).unwrap();
        assert_eq!(frame.x0, item.x1 - tree.config().submenu_overlap);
        assert_eq!(frame.y0, item.y0 - tree.config().frame_insets.y0);
        // Keyboard-style opening selects the first item.
        assert_eq!(tree.active_index(leaf), Some(0));
    }

    #[test]
    fn close_is_idempotent() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a"]);
        tree.open(id, Point::ZERO, OpenOptions::default());
        tree.drain_events().for_each(drop);

        tree.close(id);
        assert_eq!(
            tree.drain_events().collect::<Vec<_>>(),
            [MenuEvent::Closed { menu: id }]
        );
        tree.close(id);
        assert_eq!(tree.drain_events().count(), 0);
        assert!(!tree.is_open(id));
    }

    #[test]
    fn closing_root_cascades_down_the_chain() {
        let mut tree = tree();
        let (root, mid, leaf) = three_level_chain(&mut tree);
        tree.drain_events().for_each(drop);

        tree.close(root);
        assert_eq!(closed_menus(&tree.drain_events().collect::<Vec<_>>()), [leaf, mid, root]);
        for id in [root, mid, leaf] {
            assert!(!tree.is_open(id));
            assert_eq!(tree.parent_of(id), None);
            assert_eq!(tree.child_of(id), None);
        }
    }

    #[test]
    fn closing_submenu_detaches_from_parent() {
        let mut tree = tree();
        let (root, mid, leaf) = three_level_chain(&mut tree);
        tree.close(mid);
        assert_eq!(tree.child_of(root), None);
        assert_eq!(tree.parent_of(mid), None);
        assert!(!tree.is_open(leaf));
        assert!(tree.is_open(root));
        assert_eq!(tree.active_index(root), Some(1), "parent keeps its item");
    }

    #[test]
    fn trigger_three_deep_notifies_every_ancestor() {
        let mut tree = tree();
        let (root, mid, leaf) = three_level_chain(&mut tree);
        tree.drain_events().for_each(drop);

        tree.set_active_index(leaf, Some(1));
        tree.trigger_active_item(leaf);
        let events: Vec<_> = tree.drain_events().collect();

        let triggered: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                MenuEvent::Triggered { menu, item } => Some((*menu, item.label.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(
            triggered,
            [(leaf, "Leaf B"), (mid, "Leaf B"), (root, "Leaf B")]
        );
        let closed = closed_menus(&events);
        assert_eq!(closed.iter().filter(|m| **m == root).count(), 1);
        assert_eq!(closed, [leaf, mid, root]);
        for id in [root, mid, leaf] {
            assert!(!tree.is_open(id));
        }
    }

    #[test]
    fn trigger_without_active_item_is_noop() {
        let mut tree = tree();
        let id = menu_with(&mut tree, &["a"]);
        tree.open(id, Point::ZERO, OpenOptions::default());
        tree.drain_events().for_each(drop);
        tree.trigger_active_item(id);
        assert_eq!(tree.drain_events().count(), 0);
        assert!(tree.is_open(id));
    }

    #[test]
    fn shared_submenu_moves_between_items() {
        let mut tree = tree();
        let shared = menu_with(&mut tree, &["x"]);
        let root = tree.create_menu();
        tree.add(root, MenuItem::submenu("One", shared));
        tree.add(root, MenuItem::submenu("Two", shared));
        tree.open(root, Point::ZERO, OpenOptions::default());

        tree.set_active_index(root, Some(0));
        tree.open_active_submenu(root);
        assert_eq!(tree.child_index(root), Some(0));

        // Same menu already open: nothing changes.
        tree.set_active_index(root, Some(1));
        tree.open_active_submenu(root);
        assert_eq!(tree.child_of(root).map(|l| l.menu), Some(shared));
        assert_eq!(tree.parent_of(shared), Some(root));
    }

    #[test]
    fn shared_submenu_open_elsewhere_is_moved() {
        let mut tree = tree();
        let shared = menu_with(&mut tree, &["x"]);
        let first = tree.create_menu();
        tree.add(first, MenuItem::submenu("S", shared));
        let second = tree.create_menu();
        tree.add(second, MenuItem::submenu("S", shared));

        tree.open(first, Point::ZERO, OpenOptions::default());
        tree.set_active_index(first, Some(0));
        tree.open_active_submenu(first);
        tree.open(second, Point::new(400.0, 0.0), OpenOptions::default());
        tree.set_active_index(second, Some(0));
        tree.open_active_submenu(second);

        assert_eq!(tree.child_of(first), None);
        assert_eq!(tree.parent_of(shared), Some(second));
        assert_link_invariants(&tree, &[first, second, shared]);
    }

    #[test]
    fn ancestor_is_never_opened_as_submenu() {
        let mut tree = tree();
        let root = tree.create_menu();
        let child = tree.create_menu();
        tree.add(root, MenuItem::submenu("Child", child));
        tree.add(child, MenuItem::submenu("Back", root));

        tree.open(root, Point::ZERO, OpenOptions::default());
        tree.set_active_index(root, Some(0));
        tree.open_active_submenu(root);
        tree.set_active_index(child, Some(0));
        tree.open_active_submenu(child);

        assert_eq!(tree.child_of(child), None);
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.chain(root).as_slice(), [root, child]);
    }

    #[test]
    fn disposed_submenu_is_not_opened() {
        let mut tree = tree();
        let sub = tree.create_menu();
        let root = tree.create_menu();
        tree.add(root, MenuItem::submenu("Sub", sub));
        tree.dispose(sub);
        tree.open(root, Point::ZERO, OpenOptions::default());
        tree.set_active_index(root, Some(0));
        tree.open_active_submenu(root);
        assert_eq!(tree.child_of(root), None);
    }

    #[test]
    fn dispose_open_submenu_unlinks_parent() {
        let mut tree = tree();
        let (root, mid, leaf) = three_level_chain(&mut tree);
        tree.dispose(mid);
        assert_eq!(tree.child_of(root), None);
        assert!(!tree.is_open(leaf));
        assert_eq!(tree.parent_of(leaf), None);
    }

    #[test]
    fn timers_start_once_and_fire_on_advance() {
        let mut tree = tree();
        let sub = menu_with(&mut tree, &["x"]);
        let root = tree.create_menu();
        tree.add(root, MenuItem::submenu("Sub", sub));
        tree.open(root, Point::ZERO, OpenOptions::default());
        tree.set_active_index(root, Some(0));

        tree.advance(1000);
        tree.start_timer(root, TimerKind::Open);
        tree.advance(1100);
        tree.start_timer(root, TimerKind::Open);
        assert_eq!(tree.timer_deadline(root, TimerKind::Open), Some(1300));
        assert_eq!(tree.next_deadline(), Some(1300));

        tree.advance(1299);
        assert_eq!(tree.child_of(root), None);
        tree.advance(1300);
        assert_eq!(tree.child_of(root).map(|l| l.menu), Some(sub));
        assert_eq!(tree.timer_deadline(root, TimerKind::Open), None);
        assert_eq!(tree.active_index(sub), None, "hover opening does not select");
    }

    #[test]
    fn stale_timer_after_close_is_noop() {
        let mut tree = tree();
        let sub = menu_with(&mut tree, &["x"]);
        let root = tree.create_menu();
        tree.add(root, MenuItem::submenu("Sub", sub));
        tree.open(root, Point::ZERO, OpenOptions::default());
        tree.set_active_index(root, Some(0));
        tree.start_timer(root, TimerKind::Open);
        tree.close(root);
        assert_eq!(tree.next_deadline(), None);
        tree.advance(10_000);
        assert!(!tree.is_open(sub));
    }

    #[test]
    fn open_timer_revalidates_active_item() {
        let mut tree = tree();
        let sub = menu_with(&mut tree, &["x"]);
        let root = tree.create_menu();
        tree.add(root, MenuItem::submenu("Sub", sub));
        tree.add(root, MenuItem::normal("Plain"));
        tree.open(root, Point::ZERO, OpenOptions::default());
        tree.set_active_index(root, Some(0));
        tree.start_timer(root, TimerKind::Open);
        // Selection moved before expiry; the timer finds nothing to open.
        tree.set_active_index(root, Some(1));
        tree.advance(1000);
        assert_eq!(tree.child_of(root), None);
    }

    #[test]
    fn hiding_a_row_reflows_the_open_menu() {
        let mut tree = tree();
        let sub = menu_with(&mut tree, &["Alpha"]);
        let root = menu_with(&mut tree, &["Open"]);
        tree.add(root, MenuItem::submenu("More", sub));
        tree.open(root, Point::ZERO, OpenOptions::default());
        let old_first_row = tree.item_bounds(root, 0).unwrap().center();

        tree.set_item_flags(root, 0, ItemFlags::HIDDEN);
        assert!(tree.is_open(root));
        let top = tree.config().frame_insets.y0;
        assert_eq!(tree.item_bounds(root, 1).unwrap().y0, top);
        assert_eq!(
            tree.hit_test(root, old_first_row).and_then(|hit| hit.index),
            Some(1)
        );

        tree.set_active_index(root, Some(1));
        tree.open_active_submenu(root);
        assert_eq!(tree.frame(sub).unwrap().y0, 0.0);
    }

    #[test]
    fn submenu_placement_uses_current_rows() {
        let mut tree = tree();
        let sub = menu_with(&mut tree, &["Alpha"]);
        let root = menu_with(&mut tree, &["Open"]);
        tree.add(root, MenuItem::submenu("More", sub));
        tree.open(root, Point::ZERO, OpenOptions::default());

        // Taller rows are only laid out by the next pass, which opening a child runs.
        tree.renderer_mut().row_height = 30.0;
        tree.set_active_index(root, Some(1));
        tree.open_active_submenu(root);
        let row = tree.item_bounds(root, 1).unwrap();
        assert_eq!(row.height(), 30.0);
        assert_eq!(tree.frame(sub).unwrap().y0, row.y0 - tree.config().frame_insets.y0);
    }

    #[test]
    fn forced_y_keeps_origin_and_clips_height() {
        let mut tree = tree();
        let labels = ["Row"; 10];
        let root = menu_with(&mut tree, &labels);
        tree.open(root, Point::ZERO, OpenOptions::default());
        let natural = tree.frame(root).unwrap();
        tree.close(root);

        tree.open(
            root,
            Point::new(10.0, 500.0),
            OpenOptions {
                force_x: false,
                force_y: true,
            },
        );
        let frame = tree.frame(root).unwrap();
        assert_eq!(frame.y0, 500.0);
        assert_eq!(frame.height(), 100.0);
        assert_eq!(
            frame.width(),
            natural.width() + tree.config().scrollbar_thickness
        );
    }

    #[test]
    fn close_timer_closes_open_submenu() {
        let mut tree = tree();
        let sub = menu_with(&mut tree, &["x"]);
        let root = tree.create_menu();
        tree.add(root, MenuItem::submenu("Sub", sub));
        tree.open(root, Point::ZERO, OpenOptions::default());
        tree.set_active_index(root, Some(0));
        tree.open_active_submenu(root);

        tree.start_timer(root, TimerKind::Close);
        tree.advance(1000);
        assert!(!tree.is_open(sub));
        assert!(tree.is_open(root));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut tree = tree();
        assert_eq!(tree.now(), 0);
        tree.advance(1300);
        assert_eq!(tree.now(), 1300);
        tree.advance(5);
        assert_eq!(tree.now(), 1300);
    }

    #[test]
    fn events_name_their_menu() {
        let mut tree = tree();
        let sub = menu_with(&mut tree, &["x"]);
        let root = tree.create_menu();
        tree.add(root, MenuItem::submenu("Sub", sub));
        tree.open(root, Point::ZERO, OpenOptions::default());
        tree.set_active_index(root, Some(0));
        tree.open_active_submenu(root);
        tree.close(root);

        let menus: Vec<MenuId> = tree.drain_events().map(|event| event.menu()).collect();
        assert_eq!(menus, [root, sub, sub, root]);
    }
}
