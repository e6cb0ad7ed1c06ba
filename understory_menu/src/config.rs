// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use kurbo::Insets;
use serde::{Deserialize, Serialize};

/// Tunables shared by every menu of a [`MenuTree`](crate::MenuTree).
///
/// Missing fields take their default when deserialized:
///
/// ```rust
/// use understory_menu::MenuConfig;
///
/// let config: MenuConfig = serde_json::from_str(r#"{ "hover_delay_ms": 150 }"#).unwrap();
/// assert_eq!(config.hover_delay_ms, 150);
/// assert_eq!(config.submenu_overlap, MenuConfig::default().submenu_overlap);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Debounce for opening a submenu on hover, and for closing it once the pointer moves away.
    pub hover_delay_ms: u64,
    /// How far a submenu overlaps the item that opened it.
    pub submenu_overlap: f64,
    /// Extra width given to menus whose content is clipped to the maximum height.
    pub scrollbar_thickness: f64,
    /// Border plus padding around a menu's rows.
    pub frame_insets: Insets,
    /// Deepest submenu nesting accepted by template conversion.
    pub max_template_depth: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hover_delay_ms: 300,
            submenu_overlap: 3.0,
            scrollbar_thickness: 14.0,
            frame_insets: Insets::new(1.0, 5.0, 1.0, 5.0),
            max_template_depth: 32,
        }
    }
}
