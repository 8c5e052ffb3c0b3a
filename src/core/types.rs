// shared identifiers and the fixed body-part vocabulary

/// Dense index into a skeleton's bone table.
pub type BoneId = u32;

/// Laterality marker detected on a bone name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Canonical suffix appended to a normalized name.
    pub fn suffix(self) -> &'static str {
        match self {
            Side::Left => "_l",
            Side::Right => "_r",
        }
    }
}

/// Canonical humanoid body parts recognized by the normalizer.
///
/// This is the exact-match synonym table as an enum instead of a loose
/// string map, so adding a part without wiring its synonyms is a compile
/// error rather than a silent miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    UpperLeg,
    LowerLeg,
    UpperArm,
    LowerArm,
    Hip,
    Shoulder,
    Hand,
    Eye,
    HeadTop,
    Toes,
}

impl BodyPart {
    pub const ALL: [BodyPart; 10] = [
        BodyPart::UpperLeg,
        BodyPart::LowerLeg,
        BodyPart::UpperArm,
        BodyPart::LowerArm,
        BodyPart::Hip,
        BodyPart::Shoulder,
        BodyPart::Hand,
        BodyPart::Eye,
        BodyPart::HeadTop,
        BodyPart::Toes,
    ];

    /// The canonical name emitted for this part.
    pub fn canonical(self) -> &'static str {
        match self {
            BodyPart::UpperLeg => "upperleg",
            BodyPart::LowerLeg => "lowerleg",
            BodyPart::UpperArm => "upperarm",
            BodyPart::LowerArm => "lowerarm",
            BodyPart::Hip => "hip",
            BodyPart::Shoulder => "shoulder",
            BodyPart::Hand => "hand",
            BodyPart::Eye => "eye",
            BodyPart::HeadTop => "headtop",
            BodyPart::Toes => "toes",
        }
    }

    /// Rig-convention spellings that resolve to this part (exact match only).
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            BodyPart::UpperLeg => &["upleg", "up_leg", "upper_leg", "upperleg", "thigh"],
            BodyPart::LowerLeg => &["leg", "lower_leg", "lowerleg", "calf", "shin"],
            BodyPart::UpperArm => &["uparm", "up_arm", "upper_arm", "upperarm", "arm"],
            BodyPart::LowerArm => &["forearm", "fore_arm", "lower_arm", "lowerarm"],
            BodyPart::Hip => &["pelvis", "hips", "hip"],
            BodyPart::Shoulder => &["shoulder"],
            BodyPart::Hand => &["wrist", "hand"],
            BodyPart::Eye => &["eye"],
            BodyPart::HeadTop => &["headtop"],
            BodyPart::Toes => &["toe_base", "toe", "toes"],
        }
    }

    /// Exact (already-lowercased) synonym lookup. No substring matching here;
    /// the heuristic fallback in the normalizer handles decorated names.
    pub fn from_exact(name: &str) -> Option<BodyPart> {
        BodyPart::ALL
            .into_iter()
            .find(|part| part.synonyms().contains(&name))
    }
}
