// bone name canonicalization
//
// fixed rule pipeline tuned to humanoid rig conventions, not a fuzzy
// matcher. each rule is a small named function so its precedence can be
// tested on its own.
use crate::core::types::{BodyPart, Side};

const FINGER_TOKENS: [&str; 5] = ["thumb", "index", "middle", "ring", "pinky"];
const BASE_SUFFIX_TOKENS: [&str; 6] = ["roll", "twist", "helper", "aux", "assist", "end"];

/// Canonicalize one bone name. Total and deterministic; unrecognized names
/// pass through with separators normalized and the side suffix appended.
///
/// Steps, each on the result of the previous:
/// 1) strip noise prefixes (`character<digits>_`, `mixamo:`, `armature_`)
///    and the noise suffix (`_end`, `_const...`, `_twist...`)
/// 2) detect the side marker without mutating the name
/// 3) finger names early-return as `finger_<which><digits><side>`
/// 4) strip a leading left/right token and a trailing separator+l/r
/// 5) unify separators to `_`, collapse runs, trim
/// 6) exact body-part synonym lookup
/// 7) heuristic part classification for decorated names
/// 8) toes_end override
/// 9) append the side suffix
///
/// Step 2 deliberately detects `left`/`right` anywhere in the name while
/// step 4 only strips a leading token, so a name like `armleft` keeps the
/// marker in its body and still gets the `_l` suffix. Inherited quirk,
/// kept as-is.
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = strip_noise_prefixes(&lowered);
    let (stripped, had_end_suffix) = strip_noise_suffix(stripped);

    let side_suffix = detect_side(stripped).map_or("", Side::suffix);

    if let Some((token, digits)) = finger_token(stripped) {
        return format!("finger_{token}{digits}{side_suffix}");
    }

    let flat = normalize_separators(strip_side_tokens(stripped));

    let canonical = match BodyPart::from_exact(&flat) {
        Some(part) => part.canonical().to_string(),
        None => match heuristic_part(&flat) {
            Some(part) => part.to_string(),
            None => flat.clone(),
        },
    };

    // a stripped `_end` suffix counts the same as an `end` that survived
    // into the flattened name
    if canonical.contains("toe") && (flat.contains("end") || had_end_suffix) {
        return format!("toes_end{side_suffix}");
    }

    format!("{canonical}{side_suffix}")
}

/// Remove known noise prefixes while one is present at the start.
pub fn strip_noise_prefixes(name: &str) -> &str {
    let mut n = name;
    loop {
        if let Some(rest) = n.strip_prefix("mixamo:") {
            n = rest;
        } else if let Some(rest) = n.strip_prefix("armature_") {
            n = rest;
        } else if let Some(rest) = strip_character_prefix(n) {
            n = rest;
        } else {
            return n;
        }
    }
}

//character<digits>_ needs at least one digit
fn strip_character_prefix(name: &str) -> Option<&str> {
    let rest = name.strip_prefix("character")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix('_')
}

/// Cut a trailing `_end`, or everything from the first `_const`/`_twist`
/// onwards, whichever starts earliest. Also reports whether the cut was a
/// literal `_end` suffix (the toes_end override wants to know).
pub fn strip_noise_suffix(name: &str) -> (&str, bool) {
    let mut cut = usize::MAX;
    if let Some(i) = name.find("_const") {
        cut = cut.min(i);
    }
    if let Some(i) = name.find("_twist") {
        cut = cut.min(i);
    }
    let end_pos = name.ends_with("_end").then(|| name.len() - 4);
    if let Some(i) = end_pos {
        cut = cut.min(i);
    }

    if cut == usize::MAX {
        (name, false)
    } else {
        (&name[..cut], end_pos == Some(cut))
    }
}

/// Detect laterality: a literal `left`/`right` anywhere, or a trailing
/// separator+letter (`_l`, `.l`, `-l`, likewise `r`). Left wins over right.
pub fn detect_side(name: &str) -> Option<Side> {
    if name.contains("left") || trailing_side_letter(name) == Some(b'l') {
        Some(Side::Left)
    } else if name.contains("right") || trailing_side_letter(name) == Some(b'r') {
        Some(Side::Right)
    } else {
        None
    }
}

fn trailing_side_letter(name: &str) -> Option<u8> {
    let b = name.as_bytes();
    if b.len() < 2 {
        return None;
    }
    let (sep, letter) = (b[b.len() - 2], b[b.len() - 1]);
    (matches!(sep, b'_' | b'.' | b'-') && matches!(letter, b'l' | b'r')).then_some(letter)
}

/// First finger token contained in the name, plus the digits immediately
/// following that occurrence (empty when none). Token priority is fixed:
/// thumb, index, middle, ring, pinky.
pub fn finger_token(name: &str) -> Option<(&'static str, &str)> {
    for token in FINGER_TOKENS {
        if let Some(i) = name.find(token) {
            let rest = &name[i + token.len()..];
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            return Some((token, &rest[..digits]));
        }
    }
    None
}

/// Strip a leading `left`/`right` token and a trailing separator+l/r so the
/// marker does not leak into the canonical base. Narrower than
/// [`detect_side`] on purpose.
pub fn strip_side_tokens(name: &str) -> &str {
    let mut n = name
        .strip_prefix("left")
        .or_else(|| name.strip_prefix("right"))
        .unwrap_or(name);
    if trailing_side_letter(n).is_some() {
        n = &n[..n.len() - 2];
    }
    n
}

/// Spaces, dots and hyphens become underscores; runs collapse to one;
/// leading/trailing underscores are trimmed.
pub fn normalize_separators(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        let ch = if matches!(ch, ' ' | '.' | '-') { '_' } else { ch };
        if ch == '_' && out.ends_with('_') {
            continue;
        }
        out.push(ch);
    }
    out.trim_matches('_').to_string()
}

/// Classify a decorated name that missed the exact synonym table.
///
/// The base is the flattened name minus one trailing helper token
/// (roll/twist/helper/aux/assist/end) and trailing digits. Tests run in a
/// strict order; the first hit wins.
pub fn heuristic_part(flat: &str) -> Option<&'static str> {
    let mut base = flat;
    for token in BASE_SUFFIX_TOKENS {
        if let Some(b) = base.strip_suffix(token) {
            base = b;
            break;
        }
    }
    let base = base
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .trim_matches('_');

    if contains_after(base, "up", "leg") {
        return Some("upperleg");
    }
    if contains_after(base, "lower", "leg") {
        return Some("lowerleg");
    }
    if contains_after(base, "up", "arm") {
        return Some("upperarm");
    }
    if contains_after(base, "lower", "arm") || contains_after(base, "fore", "arm") {
        return Some("lowerarm");
    }
    if base.ends_with("upleg") {
        return Some("upperleg");
    }
    //bare "leg"/"arm" never reach the heuristic (the synonym table owns
    //them); the guards stay to pin the rule down
    if base.ends_with("leg") && flat != "leg" {
        return Some("lowerleg");
    }
    if base.ends_with("arm") && flat != "arm" {
        return Some("upperarm");
    }
    None
}

//token found, and the needle occurs somewhere after it
fn contains_after(haystack: &str, token: &str, needle: &str) -> bool {
    haystack
        .find(token)
        .is_some_and(|i| haystack[i + token.len()..].contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_idempotent_on_canonical_forms() {
        let samples = [
            "Hips",
            "LeftUpLeg",
            "RightForeArm",
            "mixamorig:RightHandThumb2",
            "UpperArm_Twist01",
            "Toe_End",
            "Toe_End_L",
            "ArmLeft",
            "Character1_Spine",
            "Weird Bone-Name.007",
            "",
        ];
        for name in samples {
            let once = normalize(name);
            assert_eq!(
                normalize(&once),
                once,
                "normalize must be a fixed point for {name:?}"
            );
        }
    }

    #[test]
    fn normalize_is_case_insensitive() {
        for name in ["LeftUpLeg", "MIXAMO:RightHand", "toe_end", "Pinky3.R"] {
            assert_eq!(normalize(name), normalize(&name.to_uppercase()));
        }
    }

    #[test]
    fn finger_detection_short_circuits_part_mapping() {
        assert_eq!(normalize("mixamorig:RightHandThumb2"), "finger_thumb2_r");
        //"index" wins over the arm token that is also present
        assert_eq!(normalize("LeftArmIndex1"), "finger_index1_l");
        //digits only captured when they immediately follow the token
        assert_eq!(normalize("Thumb_2_L"), "finger_thumb_l");
        assert_eq!(normalize("middle"), "finger_middle");
    }

    #[test]
    fn exact_part_mapping_applies_after_side_stripping() {
        assert_eq!(normalize("LeftUpLeg"), "upperleg_l");
        assert_eq!(normalize("RightForeArm"), "lowerarm_r");
        assert_eq!(normalize("Hips"), "hip");
        assert_eq!(normalize("wrist.L"), "hand_l");
        assert_eq!(normalize("Right_Toe_Base"), "toes_r");
        assert_eq!(normalize("thigh-r"), "upperleg_r");
    }

    #[test]
    fn noise_prefixes_are_stripped_repeatedly() {
        assert_eq!(normalize("Character1_Hips"), "hip");
        assert_eq!(normalize("mixamo:LeftHand"), "hand_l");
        assert_eq!(normalize("Armature_Spine"), "spine");
        assert_eq!(normalize("character12_mixamo:Pelvis"), "hip");
        //"character_" without digits is not a noise prefix
        assert_eq!(normalize("character_x"), "character_x");
    }

    #[test]
    fn heuristic_classifies_decorated_limb_names() {
        assert_eq!(normalize("UpperArm_Twist01"), "upperarm");
        assert_eq!(normalize("LeftArmRoll"), "upperarm_l");
        assert_eq!(normalize("Lower_Leg_Helper2.R"), "lowerleg_r");
        //unrecognized names pass through flattened
        assert_eq!(normalize("Weird Bone-Name.007"), "weird_bone_name_007");
    }

    #[test]
    fn toes_end_override_wins_regardless_of_part_outcome() {
        assert_eq!(normalize("Toe_End"), "toes_end");
        assert_eq!(normalize("Toe_End_L"), "toes_end_l");
        //plain toes stay toes
        assert_eq!(normalize("toes"), "toes");
    }

    // step 2 detects left/right anywhere, step 4 only strips a leading
    // token. flagging the asymmetry instead of fixing it.
    #[test]
    fn side_survives_in_body_when_marker_is_internal() {
        assert_eq!(normalize("ArmLeft"), "armleft_l");
    }

    #[test]
    fn empty_and_separator_only_names_do_not_fail() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("___"), "");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn detect_side_prefers_left_and_accepts_trailing_markers() {
        assert_eq!(detect_side("leftarm"), Some(Side::Left));
        assert_eq!(detect_side("arm_r"), Some(Side::Right));
        assert_eq!(detect_side("arm-l"), Some(Side::Left));
        assert_eq!(detect_side("arm.r"), Some(Side::Right));
        //left anywhere beats a trailing right marker
        assert_eq!(detect_side("leftarm_r"), Some(Side::Left));
        assert_eq!(detect_side("spine"), None);
    }

    #[test]
    fn noise_suffix_cuts_at_the_earliest_marker() {
        assert_eq!(strip_noise_suffix("arm_twist_end"), ("arm", false));
        assert_eq!(strip_noise_suffix("toe_end"), ("toe", true));
        assert_eq!(strip_noise_suffix("leg_const_a"), ("leg", false));
        assert_eq!(strip_noise_suffix("spine"), ("spine", false));
        //"_end" only counts at the very end
        assert_eq!(strip_noise_suffix("x_end_y"), ("x_end_y", false));
    }

    #[test]
    fn separator_normalization_collapses_and_trims() {
        assert_eq!(normalize_separators("a b.c-d"), "a_b_c_d");
        assert_eq!(normalize_separators("__a___b__"), "a_b");
    }
}
