// deterministic preorder over the bone forest
use std::collections::HashSet;

use crate::core::skeleton::{Bone, Skeleton};
use crate::core::types::BoneId;

/// Bone names in hierarchy order: depth-first preorder, with roots and
/// children each visited in ascending lexicographic name order.
///
/// Total over malformed input: a visited set guards against cycles, and any
/// bone not reachable from a root (dangling data) is appended afterwards,
/// lexicographically sorted, through the same recursion so its own subtree
/// follows it immediately. Output length always equals the bone count.
pub fn hierarchy_order(skeleton: &Skeleton) -> Vec<String> {
    let mut result = Vec::with_capacity(skeleton.len());
    let mut visited: HashSet<BoneId> = HashSet::new();

    let mut roots: Vec<&Bone> = skeleton.bones.iter().filter(|b| b.parent.is_none()).collect();
    roots.sort_by(|a, b| a.name.cmp(&b.name));
    for root in roots {
        visit(skeleton, root.id, &mut visited, &mut result);
    }

    if visited.len() < skeleton.len() {
        let mut leftover: Vec<&Bone> = skeleton
            .bones
            .iter()
            .filter(|b| !visited.contains(&b.id))
            .collect();
        leftover.sort_by(|a, b| a.name.cmp(&b.name));
        for bone in leftover {
            visit(skeleton, bone.id, &mut visited, &mut result);
        }
    }

    result
}

fn visit(skeleton: &Skeleton, id: BoneId, visited: &mut HashSet<BoneId>, out: &mut Vec<String>) {
    if !visited.insert(id) {
        return;
    }
    let Some(bone) = skeleton.bone(id) else {
        return;
    };
    out.push(bone.name.clone());

    let mut children: Vec<&Bone> = bone
        .children
        .iter()
        .filter_map(|&c| skeleton.bone(c))
        .collect();
    children.sort_by(|a, b| a.name.cmp(&b.name));
    for child in children {
        visit(skeleton, child.id, visited, out);
    }
}
