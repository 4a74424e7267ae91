//! Named SVG icons for the Manganize web UI.
//!
//! This crate holds the inline SVG icons the front end embeds in toast
//! notifications and the toolbar, and resolves them by name:
//!
//! - **Resolution**: [`resolve`] returns the markup for a name, or an empty
//!   string when no icon exists
//! - **Icon sets**: the built-in status and toolbar sets, plus sets loaded
//!   from directories of SVG files
//! - **Metrics**: the `viewBox` and pixel size declared by an icon's markup
//!
//! # Example
//!
//! ```
//! let markup = manganize_icons::resolve("success");
//! assert!(markup.starts_with("<svg"));
//!
//! // Unknown names are not an error
//! assert_eq!(manganize_icons::resolve("doesNotExist"), "");
//! ```

pub mod icon_set;
pub mod markup;

mod error;

pub use error::{Error, Result};
pub use icon_set::resolve;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::icon_set::{
        IconCategory, IconEntry, IconName, IconResolver, IconSet, IconSetLoader, resolve,
    };
    pub use crate::markup::{SvgMetrics, ViewBox};
}
