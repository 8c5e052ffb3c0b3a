// the pure engine: no I/O beyond snapshot parsing, no UI
//
//   types      → BoneId, Side, BodyPart synonym table
//   skeleton   → bone forest + name index + snapshot records
//   hierarchy  → deterministic preorder traversal
//   normalize  → bone name canonicalization
//   mapping    → matching tiers + apply step

pub mod hierarchy;
pub mod mapping;
pub mod normalize;
pub mod skeleton;
pub mod types;
