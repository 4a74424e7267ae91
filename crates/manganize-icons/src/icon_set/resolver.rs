//! Icon resolution.
//!
//! This module provides the [`IconResolver`] which looks up icon names across
//! an ordered chain of [`IconSet`]s, and the process-wide resolver over the
//! built-in sets.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use super::builtin::{status_set, toolbar_set};
use super::types::{IconEntry, IconSet};

/// Process-wide resolver over the built-in sets.
static GLOBAL_RESOLVER: OnceLock<IconResolver> = OnceLock::new();

/// A name provided by more than one set in a resolver chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    /// The icon name.
    pub name: String,
    /// ID of the set whose entry is returned.
    pub winner: String,
    /// IDs of the later sets whose entries are never returned.
    pub shadowed: Vec<String>,
}

/// Icon resolver over an ordered chain of icon sets.
///
/// Sets earlier in the chain take precedence: a name is answered by the
/// first set that contains it. Resolution never fails; an unknown name
/// resolves to the empty string.
#[derive(Debug, Clone, Default)]
pub struct IconResolver {
    /// Sets in lookup order
    sets: Vec<IconSet>,
}

impl IconResolver {
    /// Create a resolver with no sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver over the built-in sets: status first, then toolbar.
    pub fn builtin() -> Self {
        Self::builder()
            .with_set(status_set())
            .with_set(toolbar_set())
            .build()
    }

    /// Start building a resolver.
    pub fn builder() -> IconResolverBuilder {
        IconResolverBuilder::default()
    }

    /// Get the sets in lookup order.
    pub fn sets(&self) -> &[IconSet] {
        &self.sets
    }

    /// Get a set by ID.
    pub fn get_set(&self, id: &str) -> Option<&IconSet> {
        self.sets.iter().find(|set| set.id() == id)
    }

    /// Resolve an icon name to its markup.
    ///
    /// Returns an empty string if no set contains the name.
    pub fn resolve(&self, name: &str) -> &str {
        self.lookup(name).map(IconEntry::markup).unwrap_or_default()
    }

    /// Look up the entry answering `name`.
    pub fn lookup(&self, name: &str) -> Option<&IconEntry> {
        match self.sets.iter().find_map(|set| set.get(name).map(|e| (set, e))) {
            Some((set, entry)) => {
                tracing::trace!(name, set = set.id(), "resolved icon");
                Some(entry)
            }
            None => {
                tracing::trace!(name, "icon not found");
                None
            }
        }
    }

    /// Get the set that answers `name`.
    pub fn provider(&self, name: &str) -> Option<&IconSet> {
        self.sets.iter().find(|set| set.contains(name))
    }

    /// Check if any set contains an icon.
    pub fn has_icon(&self, name: &str) -> bool {
        self.provider(name).is_some()
    }

    /// All resolvable names, sorted and deduplicated.
    pub fn names(&self) -> Vec<&str> {
        self.sets
            .iter()
            .flat_map(|set| set.names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Names provided by more than one set, sorted by name.
    pub fn shadowed(&self) -> Vec<Shadowed> {
        let mut providers: HashMap<&str, Vec<&str>> = HashMap::new();
        for set in &self.sets {
            for name in set.names() {
                providers.entry(name).or_default().push(set.id());
            }
        }

        let mut shadowed: Vec<_> = providers
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(name, ids)| Shadowed {
                name: name.to_string(),
                winner: ids[0].to_string(),
                shadowed: ids[1..].iter().map(|id| id.to_string()).collect(),
            })
            .collect();
        shadowed.sort_by(|a, b| a.name.cmp(&b.name));
        shadowed
    }
}

/// Builder for [`IconResolver`].
#[derive(Debug, Default)]
pub struct IconResolverBuilder {
    sets: Vec<IconSet>,
}

impl IconResolverBuilder {
    /// Append a set at the lowest precedence.
    pub fn with_set(mut self, set: IconSet) -> Self {
        self.sets.push(set);
        self
    }

    /// Insert a set at the highest precedence.
    pub fn prepend_set(mut self, set: IconSet) -> Self {
        self.sets.insert(0, set);
        self
    }

    /// Append several sets in order.
    pub fn with_sets(mut self, sets: impl IntoIterator<Item = IconSet>) -> Self {
        self.sets.extend(sets);
        self
    }

    /// Build the resolver.
    pub fn build(self) -> IconResolver {
        let resolver = IconResolver { sets: self.sets };

        for entry in resolver.shadowed() {
            tracing::debug!(
                name = %entry.name,
                winner = %entry.winner,
                shadowed = ?entry.shadowed,
                "icon name provided by multiple sets"
            );
        }

        resolver
    }
}

/// Get the process-wide resolver over the built-in sets.
pub fn global() -> &'static IconResolver {
    GLOBAL_RESOLVER.get_or_init(IconResolver::builtin)
}

/// Resolve an icon name against the built-in sets.
///
/// Looks in the status set first, then the toolbar set, and returns an
/// empty string for unknown names. Markup is stored trimmed, starting at
/// `<svg` and ending at `</svg>` with no surrounding whitespace.
///
/// # Examples
///
/// ```
/// assert!(manganize_icons::resolve("home").starts_with("<svg"));
/// assert_eq!(manganize_icons::resolve("doesNotExist"), "");
/// ```
pub fn resolve(name: &str) -> &'static str {
    global().resolve(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_set::IconCategory;

    fn set(id: &str, entries: &[(&'static str, &'static str)]) -> IconSet {
        entries
            .iter()
            .fold(IconSet::new(id, IconCategory::Custom), |acc, &(n, m)| {
                acc.with_entry(IconEntry::from_static(n, m))
            })
    }

    #[test]
    fn test_empty_resolver() {
        let resolver = IconResolver::new();
        assert!(resolver.sets().is_empty());
        assert_eq!(resolver.resolve("anything"), "");
        assert!(resolver.names().is_empty());
    }

    #[test]
    fn test_first_set_wins() {
        let resolver = IconResolver::builder()
            .with_set(set("a", &[("x", "<svg id='a'/>")]))
            .with_set(set("b", &[("x", "<svg id='b'/>"), ("y", "<svg id='y'/>")]))
            .build();

        assert_eq!(resolver.resolve("x"), "<svg id='a'/>");
        assert_eq!(resolver.resolve("y"), "<svg id='y'/>");
        assert_eq!(resolver.provider("x").map(IconSet::id), Some("a"));
        assert_eq!(resolver.provider("y").map(IconSet::id), Some("b"));
        assert_eq!(resolver.provider("z").map(IconSet::id), None);
    }

    #[test]
    fn test_prepend_set() {
        let resolver = IconResolver::builder()
            .with_set(set("base", &[("x", "<svg id='base'/>")]))
            .prepend_set(set("override", &[("x", "<svg id='override'/>")]))
            .build();

        assert_eq!(resolver.resolve("x"), "<svg id='override'/>");
        let ids: Vec<_> = resolver.sets().iter().map(IconSet::id).collect();
        assert_eq!(ids, vec!["override", "base"]);
    }

    #[test]
    fn test_names_deduplicated() {
        let resolver = IconResolver::builder()
            .with_sets([
                set("a", &[("x", "<svg/>"), ("b", "<svg/>")]),
                set("b", &[("x", "<svg/>"), ("a", "<svg/>")]),
            ])
            .build();

        assert_eq!(resolver.names(), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_shadowed() {
        let resolver = IconResolver::builder()
            .with_set(set("first", &[("x", "<svg/>"), ("only", "<svg/>")]))
            .with_set(set("second", &[("x", "<svg/>")]))
            .with_set(set("third", &[("x", "<svg/>")]))
            .build();

        assert_eq!(
            resolver.shadowed(),
            vec![Shadowed {
                name: "x".to_string(),
                winner: "first".to_string(),
                shadowed: vec!["second".to_string(), "third".to_string()],
            }]
        );
    }

    #[test]
    fn test_get_set() {
        let resolver = IconResolver::builtin();
        assert!(resolver.get_set("status").is_some());
        assert!(resolver.get_set("toolbar").is_some());
        assert!(resolver.get_set("missing").is_none());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));
        assert_eq!(global().sets().len(), 2);
    }
}
