// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A context menu driven by scripted input.
//!
//! Builds a menu from a JSON template, opens it near the bottom-right corner of the viewport,
//! then replays a hover, a keyboard walk, and a click, printing every notification. Engine
//! diagnostics are logged at debug level.
//!
//! Run:
//! - `cargo run -p understory_menu --example context_menu`

use kurbo::{Point, Size};
use understory_menu::{
    ItemOptions, Key, MenuEvent, MenuId, MenuTree, OpenOptions, PointerEvent, TextRenderer,
    Viewport,
};

const TEMPLATE: &str = r#"[
    { "label": "&&Undo", "command": "edit:undo", "shortcut": "Ctrl+Z" },
    { "label": "&&Redo", "command": "edit:redo", "disabled": true },
    { "type": "separator" },
    { "label": "Cu&&t", "command": "edit:cut" },
    { "label": "&&Copy", "command": "edit:copy" },
    { "label": "&&Paste", "command": "edit:paste" },
    { "type": "separator" },
    { "label": "&&Insert", "submenu": [
        { "label": "&&Date", "command": "insert", "args": "date" },
        { "label": "&&Time", "command": "insert", "args": "time" },
        { "type": "separator" },
        { "type": "separator" }
    ] },
    { "type": "check", "label": "&&Word wrap", "command": "view:wrap", "checked": true },
    { "type": "separator" }
]"#;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut tree = MenuTree::new(TextRenderer::default());
    tree.set_viewport(Viewport::new(Size::new(640.0, 480.0)));

    let options: Vec<ItemOptions> = serde_json::from_str(TEMPLATE).expect("valid template");
    let menu = tree.from_template(options).expect("template within limits");

    // Near the corner: the menu is pulled back inside the viewport.
    tree.open(menu, Point::new(600.0, 300.0), OpenOptions::default());
    print_menu(&tree, menu);
    report(&mut tree);

    // Hover "Insert" and let the open timer fire.
    let insert = tree.item_bounds(menu, 7).expect("insert row").center();
    tree.handle_pointer(menu, PointerEvent::moved(insert, 1_000));
    tree.advance(tree.next_deadline().unwrap_or(1_000));
    let submenu = tree.leaf_of(menu);
    print_menu(&tree, submenu);
    report(&mut tree);

    // Walk down inside the submenu, back out, and pick "Copy" by mnemonic.
    tree.dispatch_key(menu, Key::Down);
    tree.dispatch_key(menu, Key::Left);
    tree.dispatch_key(menu, Key::Char('c'));
    tree.dispatch_key(menu, Key::Enter);
    report(&mut tree);

    // Reopen and click "Cut".
    tree.open(menu, Point::new(20.0, 20.0), OpenOptions::default());
    let cut = tree.item_bounds(menu, 3).expect("cut row").center();
    tree.handle_pointer(menu, PointerEvent::moved(cut, 5_000));
    tree.handle_pointer(menu, PointerEvent::up(cut, 5_050));
    report(&mut tree);
}

fn print_menu(tree: &MenuTree<TextRenderer>, menu: MenuId) {
    let Some(frame) = tree.frame(menu) else {
        return;
    };
    println!(
        "{menu:?} at ({}, {}) size {}x{}",
        frame.x0,
        frame.y0,
        frame.width(),
        frame.height()
    );
    for index in 0..tree.len(menu) {
        let (Some(node), Some(tags)) = (tree.node(menu, index), tree.tags(menu, index)) else {
            continue;
        };
        if tags.is_suppressed() {
            continue;
        }
        let classes: Vec<_> = tags.class_names().collect();
        println!(
            "  {:<16} {:<8} [{}]",
            node.text,
            node.shortcut,
            classes.join(" ")
        );
    }
}

fn report(tree: &mut MenuTree<TextRenderer>) {
    for event in tree.drain_events() {
        match event {
            MenuEvent::Opened { menu } => println!("opened {menu:?}"),
            MenuEvent::Closed { menu } => println!("closed {menu:?}"),
            MenuEvent::Triggered { menu, item } => println!(
                "triggered `{}` ({:?}) via {menu:?}",
                item.command, item.args
            ),
        }
    }
}
