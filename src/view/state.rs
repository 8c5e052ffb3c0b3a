// fold/filter/selection state, kept outside the core data model
//
// rows are referenced by source-bone name (stable across regeneration),
// never by list index. the core never reads this state.
use std::collections::HashMap;

use crate::core::mapping::MappingEntry;
use crate::core::skeleton::Skeleton;

/// Presentation state a host UI keeps next to a mapping entry list.
///
/// Folding a bone hides its descendants' rows, not the bone's own row.
/// Bones without a fold entry count as expanded.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    folds: HashMap<String, bool>,
    pub active: Option<String>,
    pub filter: String,
}

impl ViewState {
    /// Fresh state for a newly generated entry list: everything expanded,
    /// no active row, no filter.
    pub fn for_entries(entries: &[MappingEntry]) -> Self {
        let folds = entries
            .iter()
            .map(|e| (e.source_name.clone(), true))
            .collect();
        ViewState {
            folds,
            active: None,
            filter: String::new(),
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.folds.get(name).copied().unwrap_or(true)
    }

    /// Flip one bone's fold and keep the active row somewhere sensible:
    /// the toggled row becomes active, unless the previously active row is
    /// still visible, in which case it stays.
    pub fn toggle_fold(&mut self, skeleton: &Skeleton, name: &str) -> bool {
        let expanded = !self.is_expanded(name);
        self.folds.insert(name.to_string(), expanded);

        let keep_previous = self
            .active
            .as_deref()
            .is_some_and(|prev| self.is_visible(skeleton, prev));
        if !keep_previous {
            self.active = Some(name.to_string());
        }
        expanded
    }

    /// A row is visible while none of its ancestors is folded. Names the
    /// skeleton does not know have no ancestors and are always visible.
    pub fn is_visible(&self, skeleton: &Skeleton, name: &str) -> bool {
        let Some(bone) = skeleton.get(name) else {
            return true;
        };
        let mut parent = bone.parent;
        while let Some(pid) = parent {
            let Some(p) = skeleton.bone(pid) else {
                break;
            };
            if !self.is_expanded(&p.name) {
                return false;
            }
            parent = p.parent;
        }
        true
    }

    fn matches_filter(&self, entry: &MappingEntry) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        entry.source_name.to_lowercase().contains(&needle)
            || entry.target_name.to_lowercase().contains(&needle)
    }

    /// The rows a list widget should draw: fold state applied first, then
    /// the case-insensitive filter over source and target names. Entry
    /// order is preserved.
    pub fn visible_rows<'a>(
        &self,
        skeleton: &Skeleton,
        entries: &'a [MappingEntry],
    ) -> Vec<&'a MappingEntry> {
        entries
            .iter()
            .filter(|e| self.is_visible(skeleton, &e.source_name) && self.matches_filter(e))
            .collect()
    }
}

/// Alphabetic display transform by source name. Matching never depends on
/// these; they only reorder an already produced list.
pub fn sorted_by_source(entries: &[MappingEntry]) -> Vec<MappingEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.source_name.cmp(&b.source_name));
    sorted
}

/// Alphabetic display transform by target name, unmatched rows last.
pub fn sorted_by_target(entries: &[MappingEntry]) -> Vec<MappingEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        (a.target_name.is_empty(), &a.target_name).cmp(&(b.target_name.is_empty(), &b.target_name))
    });
    sorted
}
