//! Relocation map: records, per document URL, how pointers moved during
//! a migration step, so references into them can be rewritten afterward.
//!
//! Grounded on the original implementation's per-version relocation maps,
//! which the 2.0 -> 3.0.0 converter populates as it moves bodies into
//! `components.schemas`, folds `security` blocks, etc. The 1.2 -> 2.0 step
//! is a wholesale rebuild and does not populate one (see `migrate` module).

use std::collections::BTreeMap;

use crate::common::pointer;
use crate::model::node::Version;

/// `old_pointer -> new_pointer`, scoped to one `(url, target_version)` pair.
#[derive(Default, Clone, Debug)]
pub struct RelocationTable {
    moves: BTreeMap<String, String>,
}

impl RelocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, old_pointer: &str, new_pointer: &str) {
        self.moves.insert(old_pointer.to_owned(), new_pointer.to_owned());
    }

    /// Resolves `old_pointer` to wherever it lives now, rewriting the
    /// longest recorded prefix and reattaching the unmoved remainder.
    pub fn resolve(&self, old_pointer: &str) -> Option<String> {
        if let Some(exact) = self.moves.get(old_pointer) {
            return Some(exact.clone());
        }
        let mut best: Option<(&str, &str)> = None;
        for (old, new) in self.moves.iter() {
            if !pointer::starts_with_prefix(old_pointer, old) {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_old, _)) => old.len() > best_old.len(),
            };
            if better {
                best = Some((old, new));
            }
        }
        let (old, new) = best?;
        let rest = pointer::remainder(old_pointer, old);
        Some(pointer::jp_compose(&rest, Some(new)))
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// All relocations recorded across every migration step, keyed by the
/// document URL and the version the pointers moved *into*.
#[derive(Default)]
pub struct RelocationMap {
    tables: BTreeMap<(String, Version), RelocationTable>,
}

impl RelocationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_mut(&mut self, url: &str, target_version: Version) -> &mut RelocationTable {
        self.tables
            .entry((url.to_owned(), target_version))
            .or_insert_with(RelocationTable::new)
    }

    pub fn record(&mut self, url: &str, target_version: Version, old_pointer: &str, new_pointer: &str) {
        self.table_mut(url, target_version).record(old_pointer, new_pointer);
    }

    /// Looks up whether `pointer` moved during the single step that produced
    /// `target_version`, without chaining through any other step.
    pub fn resolve_if_moved(&self, url: &str, target_version: Version, pointer: &str) -> Option<String> {
        self.tables.get(&(url.to_owned(), target_version))?.resolve(pointer)
    }

    /// Resolves a pointer forward through every recorded step between
    /// `from_version` and `to_version` (inclusive of intermediate stops),
    /// chaining each step's output into the next step's input.
    pub fn resolve_chain(
        &self,
        url: &str,
        from_version: Version,
        to_version: Version,
        pointer: &str,
    ) -> String {
        let mut current = pointer.to_owned();
        for version in Version::ALL {
            if version <= from_version || version > to_version {
                continue;
            }
            if let Some(table) = self.tables.get(&(url.to_owned(), version)) {
                if let Some(next) = table.resolve(&current) {
                    current = next;
                }
            }
        }
        current
    }
}
