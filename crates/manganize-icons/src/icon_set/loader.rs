//! Icon set discovery and loading.
//!
//! Applications can ship or install extra icons as plain directories of SVG
//! files. Each directory under a search path is one icon set named after the
//! directory; each `*.svg` file in it is one icon named after the file stem.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::builtin::{status_set, toolbar_set};
use super::resolver::IconResolver;
use super::types::{IconCategory, IconEntry, IconName, IconSet};
use crate::markup::SvgMetrics;

/// Loader that discovers icon sets on the filesystem.
#[derive(Debug)]
pub struct IconSetLoader {
    /// Search paths for icon sets
    search_paths: Vec<PathBuf>,
    /// Discovered sets (set_id -> set)
    sets: HashMap<String, IconSet>,
}

impl IconSetLoader {
    /// Create a new loader with the default search paths.
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
            sets: HashMap::new(),
        }
    }

    /// Create a loader with custom search paths.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths: paths,
            sets: HashMap::new(),
        }
    }

    /// Add a search path.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.search_paths.contains(&path) {
            self.search_paths.push(path);
        }
    }

    /// Get current search paths.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Load a single icon set from a directory.
    ///
    /// Files that cannot be read, are not valid SVG, or whose stem is not a
    /// valid icon name are skipped with a warning. Only a missing or
    /// unreadable directory is an error.
    pub fn load_set(
        id: impl Into<String>,
        dir: impl AsRef<Path>,
        category: IconCategory,
    ) -> crate::Result<IconSet> {
        let dir = dir.as_ref();
        let mut set = IconSet::new(id, category);

        let entries = fs::read_dir(dir).map_err(|e| crate::Error::io(dir, e))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if !is_svg(&path) {
                tracing::trace!(path = %path.display(), "skipping non-SVG file");
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping icon with non-UTF-8 name");
                continue;
            };

            let name = match IconName::parse(stem) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping icon");
                    continue;
                }
            };

            let markup = match fs::read_to_string(&path) {
                Ok(markup) => markup.trim().to_string(),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable icon");
                    continue;
                }
            };

            if let Err(e) = SvgMetrics::parse(&markup) {
                tracing::warn!(path = %path.display(), error = %e, "skipping icon");
                continue;
            }

            set.insert(IconEntry::new(name.as_str().to_string(), markup));
        }

        tracing::debug!(set = set.id(), icons = set.len(), path = %dir.display(), "loaded icon set");
        Ok(set)
    }

    /// Discover all icon sets under the search paths.
    ///
    /// Each subdirectory of a search path is one set. When two search paths
    /// provide the same set ID, the earlier path wins. Returns the number of
    /// sets discovered. Sets whose directory cannot be read are skipped.
    pub fn discover_sets(&mut self) -> crate::Result<usize> {
        self.sets.clear();

        for search_path in &self.search_paths {
            if !search_path.is_dir() {
                continue;
            }

            let entries = match fs::read_dir(search_path) {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(path = %search_path.display(), error = %e, "cannot read search path");
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }

                let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if self.sets.contains_key(id) {
                    continue;
                }

                match Self::load_set(id, &path, IconCategory::Custom) {
                    Ok(set) => {
                        self.sets.insert(id.to_string(), set);
                    }
                    Err(e) => {
                        tracing::warn!(set = id, error = %e, "skipping icon set");
                    }
                }
            }
        }

        Ok(self.sets.len())
    }

    /// Get a discovered set by ID.
    pub fn get_set(&self, id: &str) -> Option<&IconSet> {
        self.sets.get(id)
    }

    /// Get all discovered sets.
    pub fn sets(&self) -> impl Iterator<Item = &IconSet> {
        self.sets.values()
    }

    /// Get discovered set IDs.
    pub fn set_ids(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(|s| s.as_str())
    }

    /// Check if a set was discovered.
    pub fn has_set(&self, id: &str) -> bool {
        self.sets.contains_key(id)
    }

    /// Build a resolver with the discovered sets ahead of the built-ins.
    ///
    /// Discovered sets are ordered by ID.
    pub fn into_resolver(self) -> IconResolver {
        let mut discovered: Vec<_> = self.sets.into_values().collect();
        discovered.sort_by(|a, b| a.id().cmp(b.id()));

        IconResolver::builder()
            .with_sets(discovered)
            .with_set(status_set())
            .with_set(toolbar_set())
            .build()
    }

    /// Get default search paths.
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(data) = dirs::data_dir() {
            paths.push(data.join("manganize").join("icons"));
        }

        paths
    }
}

/// Check for an `.svg` extension, ignoring case.
fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

impl Default for IconSetLoader {
    fn default() -> Self {
        Self::new()
    }
}
