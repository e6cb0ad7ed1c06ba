// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building menus from templates.
//!
//! A template is a list of entries, each either a ready [`MenuItem`] or a plain
//! [`ItemOptions`] record. Option records are usually deserialized from host data; their nested
//! `submenu` lists become fresh menus in the same [`MenuTree`].

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TemplateError;
use crate::item::{ItemFlags, ItemKind, MenuItem};
use crate::render::ItemRenderer;
use crate::tree::MenuTree;
use crate::types::MenuId;

/// Plain description of one item.
///
/// Every field is optional when deserialized. The kind is spelled `type` in serialized form and
/// defaults to `normal`, or to `submenu` when a `submenu` list is present.
///
/// ```rust
/// use understory_menu::ItemOptions;
///
/// let options: Vec<ItemOptions> = serde_json::from_str(
///     r#"[
///         { "label": "&&Open", "command": "file:open", "shortcut": "Ctrl+O" },
///         { "type": "separator" },
///         { "label": "Recent", "submenu": [{ "label": "notes.txt" }] }
///     ]"#,
/// )
/// .unwrap();
/// assert_eq!(options[1].kind.as_deref(), Some("separator"));
/// assert_eq!(options[2].submenu.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemOptions {
    /// Kind name: `normal`, `check`, `radio`, `submenu` or `separator`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Label, possibly containing a mnemonic marker.
    pub label: String,
    /// Icon identifier.
    pub icon: String,
    /// Shortcut hint.
    pub shortcut: String,
    /// Initial checked state.
    pub checked: bool,
    /// Initial disabled state.
    pub disabled: bool,
    /// Initial hidden state.
    pub hidden: bool,
    /// Extra style class.
    pub class_name: String,
    /// Command identifier.
    pub command: String,
    /// Command argument payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    /// Items of a nested menu.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<ItemOptions>>,
}

/// One entry of a template.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateEntry {
    /// A ready item, added as is.
    Item(MenuItem),
    /// An option record, converted on insertion.
    Options(ItemOptions),
}

impl From<MenuItem> for TemplateEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<ItemOptions> for TemplateEntry {
    fn from(options: ItemOptions) -> Self {
        Self::Options(options)
    }
}

impl<R: ItemRenderer> MenuTree<R> {
    /// Build a new closed menu from `entries`.
    ///
    /// Nested option lists are materialized into new menus, depth first. On error every menu
    /// created by this call is disposed again and the arena is left as it was.
    pub fn from_template<I>(&mut self, entries: I) -> Result<MenuId, TemplateError>
    where
        I: IntoIterator,
        I::Item: Into<TemplateEntry>,
    {
        let mut created = Vec::new();
        let result = self.build_menu(entries.into_iter().map(Into::into), 0, &mut created);
        match &result {
            Ok(id) => debug!(menu = ?id, menus = created.len(), "built menu from template"),
            Err(err) => {
                debug!(%err, "template rejected");
                for id in created.into_iter().rev() {
                    self.dispose(id);
                }
            }
        }
        result
    }

    fn build_menu(
        &mut self,
        entries: impl Iterator<Item = TemplateEntry>,
        depth: usize,
        created: &mut Vec<MenuId>,
    ) -> Result<MenuId, TemplateError> {
        let limit = self.config().max_template_depth;
        if depth > limit {
            return Err(TemplateError::TooDeep { limit });
        }
        let id = self.create_menu();
        created.push(id);
        for entry in entries {
            let item = match entry {
                TemplateEntry::Item(item) => {
                    if item.submenu.is_some_and(|submenu| !self.is_alive(submenu)) {
                        return Err(TemplateError::StaleSubmenu);
                    }
                    item
                }
                TemplateEntry::Options(options) => self.build_item(options, depth, created)?,
            };
            self.add(id, item);
        }
        Ok(id)
    }

    fn build_item(
        &mut self,
        options: ItemOptions,
        depth: usize,
        created: &mut Vec<MenuId>,
    ) -> Result<MenuItem, TemplateError> {
        let kind = match options.kind.as_deref() {
            Some(name) => name.parse()?,
            None if options.submenu.is_some() => ItemKind::Submenu,
            None => ItemKind::Normal,
        };

        let mut flags = ItemFlags::empty();
        flags.set(ItemFlags::CHECKED, options.checked);
        flags.set(ItemFlags::DISABLED, options.disabled);
        flags.set(ItemFlags::HIDDEN, options.hidden);

        let submenu = match (kind, options.submenu) {
            (ItemKind::Submenu, Some(children)) => Some(self.build_menu(
                children.into_iter().map(TemplateEntry::Options),
                depth + 1,
                created,
            )?),
            _ => None,
        };

        Ok(MenuItem {
            kind,
            label: options.label,
            icon: options.icon,
            shortcut: options.shortcut,
            flags,
            class_name: options.class_name,
            command: options.command,
            args: options.args,
            submenu,
        })
    }
}
