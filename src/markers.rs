//! Literal marker tables for every localized construct the scanner recognizes.
//!
//! Adding a locale means adding entries here; the classifier and extractors
//! only ever test membership against these tables.

/// Prefix of a scene-section (two-level) heading.
pub const SCENE_HEADING: &str = "## ";

/// Words that mark a two-level heading as a scene boundary.
pub const SCENE_WORDS: &[&str] = &["Scene", "씬", "장면"];

/// Separators between the scene number and its title, e.g. `Scene 1 — Title`.
pub const SCENE_TITLE_SEPARATORS: &[&str] = &["—", "–"];

/// Prefix of the document title heading.
pub const TITLE_HEADING: &str = "# ";

/// `Episode 1:` style prefixes stripped from the document title.
pub const EPISODE_WORDS: &[&str] = &["Episode", "에피소드"];

/// Three-level headings that open an email block.
pub const EMAIL_HEADINGS: &[&str] = &["### 📧"];

/// Sender labels, with the colon outside or inside the emphasis.
pub const FROM_LABELS: &[&str] = &["**From**", "**발신**", "**From:**", "**발신:**"];

pub const SUBJECT_LABELS: &[&str] = &["**Subject**", "**제목**", "**Subject:**", "**제목:**"];

/// Three-level headings that open a choice block.
pub const CHOICE_HEADINGS: &[&str] = &["### 🔍 Interactive", "### 🔍 인터랙티브"];

/// Glyphs that introduce an option's description line.
pub const ARROWS: &[&str] = &["→"];

/// Markers that open an input prompt inside brackets.
pub const INPUT_MARKERS: &[&str] = &["INPUT:", "입력:"];

pub const QUOTE: char = '>';

pub const FIELD_SEPARATORS: &[char] = &[':', '：'];

pub const DIALOGUE_QUOTES: &[char] = &['"', '“', '”'];

pub const EMAIL_GLYPH: &str = "📧";

pub const DEFAULT_SUBJECT: &str = "New Email";

pub const CHOICE_PROMPT: &str = "Choose your approach:";

pub const DEFAULT_TITLE: &str = "The Missing Balance Patch";

/// First entry of `haystack` found anywhere in `line`.
pub fn find_any<'a>(line: &str, haystack: &[&'a str]) -> Option<&'a str> {
    haystack.iter().copied().find(|m| line.contains(m))
}

/// First entry of `haystack` that `line` starts with.
pub fn starts_with_any<'a>(line: &str, haystack: &[&'a str]) -> Option<&'a str> {
    haystack.iter().copied().find(|m| line.starts_with(m))
}
