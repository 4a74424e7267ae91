//! Icon sets and name resolution.
//!
//! This module provides the named SVG icons used across the web UI:
//!
//! - **Built-in sets**: the status set (toast notifications) and the toolbar
//!   set (navigation and window chrome)
//! - **Resolution**: looking up a name across an ordered chain of sets
//! - **Loading**: extra sets read from directories of SVG files
//!
//! # Example
//!
//! ```
//! use manganize_icons::icon_set::{IconName, IconResolver};
//!
//! let resolver = IconResolver::builtin();
//!
//! // The status set is consulted before the toolbar set
//! assert_eq!(resolver.provider(IconName::CLOSE).map(|s| s.id()), Some("status"));
//! assert_eq!(resolver.provider(IconName::HOME).map(|s| s.id()), Some("toolbar"));
//!
//! // Unknown names resolve to an empty string
//! assert_eq!(resolver.resolve("doesNotExist"), "");
//! ```
//!
//! # Precedence
//!
//! `close` is defined by both built-in sets. The status entry is the one
//! returned; [`IconResolver::shadowed`] lists every such collision.

mod builtin;
mod loader;
mod resolver;
mod types;

pub use builtin::{STATUS_SET_ID, TOOLBAR_SET_ID, status_set, toolbar_set};
pub use loader::IconSetLoader;
pub use resolver::{IconResolver, IconResolverBuilder, Shadowed, global, resolve};
pub use types::{IconCategory, IconEntry, IconName, IconSet};
