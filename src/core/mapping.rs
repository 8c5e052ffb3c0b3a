// source -> target resolution, tier by tier
//
// 1. exact name match
// 2. canonical match (normalize both sides)
// 3. substring fallback (shortest target wins)
// 4. unmatched (empty target)
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::hierarchy::hierarchy_order;
use crate::core::normalize::normalize;
use crate::core::skeleton::Skeleton;

/// One row of a generated mapping. An empty target means unmatched; the
/// caller may edit the target by hand before applying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub source_name: String,
    pub target_name: String,
}

impl MappingEntry {
    pub fn is_matched(&self) -> bool {
        !self.target_name.is_empty()
    }
}

/// Summary counts reported alongside a generated mapping. Informational
/// only; the entries are the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Which order the source bones are matched (and therefore listed) in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MappingOrder {
    /// Source skeleton declaration order.
    Declaration,
    /// Deterministic preorder, see [`hierarchy_order`].
    #[default]
    Hierarchy,
}

#[derive(Debug, Clone)]
pub struct Mapping {
    pub entries: Vec<MappingEntry>,
    pub report: MappingReport,
}

/// Resolve every source bone against the target name list. One entry per
/// source bone, in the chosen order; prior mappings are simply discarded by
/// the caller. Empty source or target lists are ordinary inputs.
pub fn generate_mapping(
    source: &Skeleton,
    target_names: &[String],
    order: MappingOrder,
) -> Mapping {
    //canonical forms of every target, computed once. the lookup table must
    //be complete before the first source lookup; on collisions the later
    //target wins.
    let target_canon: Vec<String> = target_names.iter().map(|t| normalize(t)).collect();
    let mut canon_table: HashMap<&str, &str> = HashMap::new();
    for (target, canon) in target_names.iter().zip(&target_canon) {
        canon_table.insert(canon.as_str(), target.as_str());
    }

    let order_names: Vec<String> = match order {
        MappingOrder::Declaration => source.names().map(str::to_string).collect(),
        MappingOrder::Hierarchy => hierarchy_order(source),
    };

    let entries: Vec<MappingEntry> = order_names
        .into_iter()
        .map(|source_name| {
            let target_name = resolve(&source_name, target_names, &target_canon, &canon_table);
            MappingEntry {
                source_name,
                target_name,
            }
        })
        .collect();

    let matched = entries.iter().filter(|e| e.is_matched()).count();
    let report = MappingReport {
        total: entries.len(),
        matched,
        unmatched: entries.len() - matched,
    };

    Mapping { entries, report }
}

fn resolve(
    source_name: &str,
    target_names: &[String],
    target_canon: &[String],
    canon_table: &HashMap<&str, &str>,
) -> String {
    //1. exact
    if target_names.iter().any(|t| t == source_name) {
        return source_name.to_string();
    }

    //2. canonical
    let canon = normalize(source_name);
    if let Some(target) = canon_table.get(canon.as_str()) {
        return target.to_string();
    }

    //3. substring fallback: targets whose canonical form contains ours,
    //shortest target name first. strict < keeps the earlier candidate on
    //equal lengths (assumed tie-break, see DESIGN.md).
    let mut best: Option<&str> = None;
    for (target, tc) in target_names.iter().zip(target_canon) {
        if !tc.contains(canon.as_str()) {
            continue;
        }
        match best {
            Some(b) if target.len() >= b.len() => {}
            _ => best = Some(target),
        }
    }

    //4. unmatched
    best.map(str::to_string).unwrap_or_default()
}

/// The distinct apply step: feed every matched entry, in mapping order, to a
/// caller-supplied name setter. The setter returns whether it accepted the
/// rename; the count of accepted renames comes back. Target-name collisions
/// stay the caller's problem.
pub fn apply_mapping<F>(entries: &[MappingEntry], mut rename: F) -> usize
where
    F: FnMut(&str, &str) -> bool,
{
    let mut applied = 0;
    for entry in entries {
        if entry.is_matched() && rename(&entry.source_name, &entry.target_name) {
            applied += 1;
        }
    }
    applied
}
