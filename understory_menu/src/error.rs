// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by template conversion.
//!
//! Menu operations themselves never fail: out-of-range indices, stale handles, and repeated
//! open/close calls are corrected or ignored. Only building menus from templates can reject
//! its input.

use alloc::string::String;

/// Error returned by [`MenuTree::from_template`](crate::MenuTree::from_template).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// An option record names an item kind that does not exist.
    #[error("unknown menu item kind `{0}`")]
    UnknownKind(String),
    /// Submenu option lists are nested deeper than the configured limit.
    #[error("menu template nested deeper than {limit} levels")]
    TooDeep {
        /// The configured [`MenuConfig::max_template_depth`](crate::MenuConfig::max_template_depth).
        limit: usize,
    },
    /// A prebuilt item references a menu that has been disposed.
    #[error("menu template item references a disposed submenu")]
    StaleSubmenu,
}
