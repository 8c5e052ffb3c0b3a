// bone forest + name index
//
// The skeleton is a read-only input to the mapper. The only mutation it
// supports is rename(), which the apply step drives one entry at a time.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::BoneId;

#[derive(Debug, Error)]
pub enum SkeletonError {
    #[error("bone {name:?} already exists in this skeleton")]
    DuplicateBone { name: String },
    #[error("parent {parent:?} of bone {child:?} does not exist")]
    UnknownParent { child: String, parent: String },
    #[error("bone {name:?} not found")]
    BoneNotFound { name: String },
    #[error("bad skeleton snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// A named node in the forest. Parent/children are ids into the owning
/// skeleton's bone table, never owning references.
#[derive(Debug, Clone)]
pub struct Bone {
    pub id: BoneId,
    pub name: String,
    pub parent: Option<BoneId>,
    pub children: Vec<BoneId>,
}

/// One row of a flat skeleton snapshot: a bone and the name of its parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoneRecord {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}

/// Bones in declaration order plus a name index. Names are unique within
/// one skeleton; the parent/children relation forms a forest.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    pub bones: Vec<Bone>,
    index: HashMap<String, BoneId>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Add a bone under an (already added) parent, or as a root.
    pub fn add_bone(&mut self, name: &str, parent: Option<&str>) -> Result<BoneId, SkeletonError> {
        if self.index.contains_key(name) {
            return Err(SkeletonError::DuplicateBone {
                name: name.to_string(),
            });
        }

        let parent_id = match parent {
            None => None,
            Some(p) => match self.index.get(p).copied() {
                Some(pid) => Some(pid),
                None => {
                    return Err(SkeletonError::UnknownParent {
                        child: name.to_string(),
                        parent: p.to_string(),
                    });
                }
            },
        };

        let id = self.bones.len() as BoneId;
        self.bones.push(Bone {
            id,
            name: name.to_string(),
            parent: parent_id,
            children: Vec::new(),
        });
        self.index.insert(name.to_string(), id);

        if let Some(pid) = parent_id {
            self.bones[pid as usize].children.push(id);
        }

        Ok(id)
    }

    pub fn id_of(&self, name: &str) -> Option<BoneId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Bone> {
        self.id_of(name).map(|id| &self.bones[id as usize])
    }

    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id as usize)
    }

    /// Bone names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bones.iter().map(|b| b.name.as_str())
    }

    /// Rename one bone, keeping the name index consistent.
    ///
    /// Rejects a destination name that is already taken by another bone;
    /// renaming a bone to its current name is a no-op.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), SkeletonError> {
        let id = self.id_of(old).ok_or_else(|| SkeletonError::BoneNotFound {
            name: old.to_string(),
        })?;

        if old == new {
            return Ok(());
        }

        if self.index.contains_key(new) {
            return Err(SkeletonError::DuplicateBone {
                name: new.to_string(),
            });
        }

        self.index.remove(old);
        self.index.insert(new.to_string(), id);
        self.bones[id as usize].name = new.to_string();
        Ok(())
    }

    /// Build a skeleton from flat records. Two passes, so a child record may
    /// appear before its parent's record.
    pub fn from_records(records: &[BoneRecord]) -> Result<Skeleton, SkeletonError> {
        let mut skeleton = Skeleton::new();

        for record in records {
            skeleton.add_bone(&record.name, None)?;
        }

        for (i, record) in records.iter().enumerate() {
            let Some(parent_name) = record.parent.as_deref() else {
                continue;
            };
            // first pass inserted records in order, so ids are positional
            let child_id = i as BoneId;
            let parent_id = match skeleton.id_of(parent_name) {
                Some(pid) => pid,
                None => {
                    return Err(SkeletonError::UnknownParent {
                        child: record.name.clone(),
                        parent: parent_name.to_string(),
                    });
                }
            };
            skeleton.bones[child_id as usize].parent = Some(parent_id);
            skeleton.bones[parent_id as usize].children.push(child_id);
        }

        Ok(skeleton)
    }

    /// Parse a JSON snapshot (an array of `{name, parent}` records).
    pub fn from_json_str(json: &str) -> Result<Skeleton, SkeletonError> {
        let records: Vec<BoneRecord> = serde_json::from_str(json)?;
        Skeleton::from_records(&records)
    }
}
