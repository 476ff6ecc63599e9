/// Known labels and their canonical keys. Keys are matched case-sensitively.
const SPEAKER_ALIASES: &[(&str, &str)] = &[
    ("탐정", "detective"),
    ("Detective", "detective"),
    ("DETECTIVE", "detective"),
    ("카스터", "kastor"),
    ("Kastor", "kastor"),
    ("KASTOR", "kastor"),
    ("내레이터", "narrator"),
    ("Narrator", "narrator"),
    ("NARRATOR", "narrator"),
    ("시스템", "system"),
    ("System", "system"),
    ("SYSTEM", "system"),
];

const FALLBACK_SPEAKER: &str = "narrator";

/// Maps a raw speaker label to its canonical key.
///
/// Unknown labels are lowercased and kept, so new characters need no table
/// entry. A blank label is attributed to the narrator.
pub fn normalize_speaker(raw: &str) -> String {
    let label = raw.trim();
    if label.is_empty() {
        return FALLBACK_SPEAKER.to_string();
    }

    SPEAKER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == label)
        .map(|(_, key)| key.to_string())
        .unwrap_or_else(|| label.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("탐정", "detective")]
    #[case("DETECTIVE", "detective")]
    #[case("카스터", "kastor")]
    #[case("Kastor", "kastor")]
    #[case("Narrator", "narrator")]
    #[case("시스템", "system")]
    fn maps_known_aliases(#[case] raw: &str, #[case] key: &str) {
        assert_eq!(normalize_speaker(raw), key);
    }

    #[test]
    fn unknown_labels_are_lowercased() {
        assert_eq!(normalize_speaker("Dr. Minji"), "dr. minji");
        assert_eq!(normalize_speaker("kAsToR"), "kastor");
        assert_eq!(normalize_speaker("박과장"), "박과장");
    }

    #[test]
    fn blank_label_falls_back() {
        assert_eq!(normalize_speaker("   "), "narrator");
    }
}
