//! Core types for icon sets.
//!
//! This module provides the fundamental types for icon lookup:
//! - Names of the built-in icons
//! - Set categories (status, toolbar, custom)
//! - Icon entries and the sets that hold them

use std::borrow::Cow;
use std::collections::HashMap;

use crate::markup::SvgMetrics;

/// Name of an icon.
///
/// Names are short identifiers such as `"success"` or `"home"`. Any string
/// may be used for lookup; [`IconName::parse`] applies the stricter rules
/// used for icons loaded from disk.
///
/// # Examples
///
/// ```
/// use manganize_icons::icon_set::IconName;
///
/// let icon = IconName::new(IconName::SUCCESS);
/// assert_eq!(icon.as_str(), "success");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconName(String);

impl IconName {
    // ========================================================================
    // Status Icons
    // ========================================================================

    /// Operation completed
    pub const SUCCESS: &'static str = "success";
    /// Operation failed
    pub const ERROR: &'static str = "error";
    /// Informational notice
    pub const INFO: &'static str = "info";
    /// Warning notice
    pub const WARNING: &'static str = "warning";
    /// Dismiss a notification
    pub const CLOSE: &'static str = "close";

    // ========================================================================
    // Toolbar Icons
    // ========================================================================

    /// Navigate to the start page
    pub const HOME: &'static str = "home";
    /// Generation history
    pub const HISTORY: &'static str = "history";
    /// Character management
    pub const CHARACTER: &'static str = "character";
    /// Minimize window
    pub const MINIMIZE: &'static str = "minimize";
    /// Maximize window
    pub const MAXIMIZE: &'static str = "maximize";

    // ========================================================================
    // Methods
    // ========================================================================

    /// Create a new icon name without validation.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a validated icon name.
    ///
    /// Names must be non-empty and must not contain whitespace or path
    /// separators, since they double as file stems.
    pub fn parse(name: impl Into<String>) -> crate::Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(crate::Error::invalid_name(name, "name is empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(crate::Error::invalid_name(name, "name contains whitespace"));
        }
        if name.contains(['/', '\\']) {
            return Err(crate::Error::invalid_name(
                name,
                "name contains a path separator",
            ));
        }

        Ok(Self(name))
    }

    /// Get the icon name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of an icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    /// Status and notification icons
    Status,
    /// Toolbar and window chrome icons
    Toolbar,
    /// Sets supplied by the application at runtime
    Custom,
}

impl IconCategory {
    /// Get the category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Status => "status",
            IconCategory::Toolbar => "toolbar",
            IconCategory::Custom => "custom",
        }
    }

    /// Parse a category from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "status" | "semantic" => Some(IconCategory::Status),
            "toolbar" => Some(IconCategory::Toolbar),
            "custom" => Some(IconCategory::Custom),
            _ => None,
        }
    }
}

/// A named piece of icon markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    name: Cow<'static, str>,
    markup: Cow<'static, str>,
}

impl IconEntry {
    /// Create an entry from owned or borrowed strings.
    pub fn new(name: impl Into<Cow<'static, str>>, markup: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }

    /// Create an entry from static data.
    pub const fn from_static(name: &'static str, markup: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            markup: Cow::Borrowed(markup),
        }
    }

    /// The icon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The SVG markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Parse the size information of the root `<svg>` element.
    pub fn metrics(&self) -> crate::Result<SvgMetrics> {
        SvgMetrics::parse(&self.markup)
    }
}

/// A collection of icon entries with unique names.
#[derive(Debug, Clone)]
pub struct IconSet {
    id: String,
    category: IconCategory,
    entries: HashMap<String, IconEntry>,
}

impl IconSet {
    /// Create an empty set.
    pub fn new(id: impl Into<String>, category: IconCategory) -> Self {
        Self {
            id: id.into(),
            category,
            entries: HashMap::new(),
        }
    }

    /// Add an entry, returning the set for chaining.
    pub fn with_entry(mut self, entry: IconEntry) -> Self {
        self.insert(entry);
        self
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: IconEntry) -> Option<IconEntry> {
        self.entries.insert(entry.name().to_string(), entry)
    }

    /// The set ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The set category.
    pub fn category(&self) -> IconCategory {
        self.category
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.entries.get(name)
    }

    /// Check if the set holds an icon.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.entries.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.values()
    }
}
