use crate::ast::Line;
use crate::markers::{DEFAULT_TITLE, EPISODE_WORDS, FIELD_SEPARATORS, TITLE_HEADING};
use crate::types::{Episode, Language, Scene};
use winnow::ascii::{digit1, space0};
use winnow::prelude::*;
use winnow::token::one_of;
use winnow::ModalResult;

/// Only the document header is searched for the title.
const TITLE_SEARCH_LINES: usize = 10;

pub fn build_episode(
    lines: &[Line<'_>],
    episode_id: &str,
    language: Language,
    scenes: Vec<Scene>,
) -> Episode {
    Episode {
        episode_id: episode_id.to_string(),
        title: extract_title(lines),
        description: describe(language),
        language,
        scenes,
    }
}

/// Title of the first `# ` heading, without its `Episode 1:` prefix.
pub fn extract_title(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .take(TITLE_SEARCH_LINES)
        .find_map(|line| line.text.strip_prefix(TITLE_HEADING))
        .map(|heading| strip_episode_prefix(heading.trim()).trim())
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

fn strip_episode_prefix(heading: &str) -> &str {
    for &word in EPISODE_WORDS {
        let mut input = heading;
        let separator = one_of(|c: char| FIELD_SEPARATORS.contains(&c));
        let prefix: ModalResult<()> = (word, space0, digit1, space0, separator, space0)
            .void()
            .parse_next(&mut input);
        if prefix.is_ok() {
            return input;
        }
    }
    heading
}

pub fn describe(language: Language) -> String {
    let label = match language {
        Language::Ko => "한국어",
        Language::En => "English",
    };
    format!("Episode 1 - Missing Balance Patch ({} version)", label)
}
