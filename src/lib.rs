// bonemap-core: rename bones of one skeleton to match another.
//
// core/  → pure matching engine (normalizer, hierarchy order, mapper)
// view/  → caller-owned presentation state over a generated mapping

pub mod core;
pub mod view;

pub use crate::core::hierarchy::hierarchy_order;
pub use crate::core::mapping::{
    apply_mapping, generate_mapping, Mapping, MappingEntry, MappingOrder, MappingReport,
};
pub use crate::core::normalize::normalize;
pub use crate::core::skeleton::{Bone, BoneRecord, Skeleton, SkeletonError};
pub use crate::core::types::{BodyPart, BoneId, Side};
pub use crate::view::state::ViewState;
