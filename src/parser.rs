use crate::ast::{Dialogue, Line, SceneHeader, Token};
use crate::markers::{
    find_any, starts_with_any, CHOICE_HEADINGS, DIALOGUE_QUOTES, EMAIL_HEADINGS, FROM_LABELS,
    INPUT_MARKERS, SCENE_HEADING, SCENE_TITLE_SEPARATORS, SCENE_WORDS, SUBJECT_LABELS,
};
use winnow::ascii::{digit1, space0};
use winnow::combinator::{preceded, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, rest, take_until};
use winnow::ModalResult;

/// Decides which block type `line` begins. Rules are tried in priority order.
pub fn classify(line: &Line<'_>) -> Token {
    let text = line.text;
    if text.is_empty() {
        return Token::Blank;
    }

    if let Some(header) = scene_header(text) {
        return Token::SceneHeader(header);
    }

    if let Some(dialogue) = dialogue_line(text) {
        return Token::Dialogue(dialogue);
    }

    if let Some(inner) = bracketed(text) {
        // `[INPUT: ...]` is bracket-wrapped too but names a prompt.
        if let Some(prompt) = input_prompt(text) {
            return Token::Input(prompt);
        }
        return Token::Narration(inner.trim().to_string());
    }

    if is_email_trigger(text) {
        return Token::EmailTrigger;
    }

    if find_any(text, CHOICE_HEADINGS).is_some() {
        return Token::ChoiceTrigger;
    }

    if let Some(prompt) = input_prompt(text) {
        return Token::Input(prompt);
    }

    if is_horizontal_rule(text) {
        return Token::HorizontalRule;
    }

    Token::Text
}

fn scene_header(text: &str) -> Option<SceneHeader> {
    let body = text.strip_prefix(SCENE_HEADING)?.trim_start();
    let body = skip_glyph(body);
    let word = starts_with_any(body, SCENE_WORDS)?;

    let mut after = &body[word.len()..];
    let number = scene_number(&mut after).ok();

    let title = SCENE_TITLE_SEPARATORS
        .iter()
        .filter_map(|sep| text.rfind(sep).map(|idx| &text[idx + sep.len()..]))
        .min_by_key(|tail| tail.len())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Some(SceneHeader { number, title })
}

/// Drops a leading decorative token such as `🎮` in `🎮 Scene 1`.
fn skip_glyph(s: &str) -> &str {
    match s.chars().next() {
        Some(c) if !c.is_alphanumeric() => match s.split_once(char::is_whitespace) {
            Some((_, tail)) => tail.trim_start(),
            None => s,
        },
        _ => s,
    }
}

fn scene_number(input: &mut &str) -> ModalResult<String> {
    preceded(space0, digit1)
        .map(str::to_string)
        .parse_next(input)
}

fn bold_label<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    (preceded("**", terminated(take_until(1.., "**:"), "**:")), rest).parse_next(input)
}

fn dialogue_line(text: &str) -> Option<Dialogue> {
    let mut input = text;
    let (speaker, remainder) = bold_label(&mut input).ok()?;

    let speaker = speaker.trim();
    let text = remainder.trim().trim_matches(DIALOGUE_QUOTES).trim();
    if speaker.is_empty() || text.is_empty() {
        return None;
    }

    Some(Dialogue {
        speaker: speaker.to_string(),
        text: text.to_string(),
    })
}

/// Inner text of a line wrapped in exactly one `[` … `]` pair.
fn bracketed(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    if inner.contains(&['[', ']'][..]) {
        return None;
    }
    Some(inner)
}

fn is_email_trigger(text: &str) -> bool {
    find_any(text, EMAIL_HEADINGS).is_some()
        || starts_with_any(text, FROM_LABELS).is_some()
        || starts_with_any(text, SUBJECT_LABELS).is_some()
}

/// Prompt text of the first `[<marker> ... ]` in `text`.
fn input_prompt(text: &str) -> Option<String> {
    INPUT_MARKERS.iter().find_map(|marker| {
        let pos = text.match_indices(marker).map(|(pos, _)| pos).find(|&pos| {
            text[..pos].ends_with('[')
        })?;
        let tail = &text[pos + marker.len()..];
        let prompt = tail.split(']').next().unwrap_or(tail);
        Some(prompt.trim().to_string())
    })
}

fn is_horizontal_rule(text: &str) -> bool {
    let compact: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && matches!(compact[0], '-' | '*' | '_')
        && compact.iter().all(|&c| c == compact[0])
}

fn option_label<'s>(input: &mut &'s str) -> ModalResult<(char, &'s str)> {
    preceded(
        "**",
        (
            terminated(one_of(|c: char| ('A'..='C').contains(&c)), ')'),
            preceded(space0, terminated(take_until(1.., "**"), "**")),
        ),
    )
    .parse_next(input)
}

/// Parses a `**A) label**` option line into its letter and label.
pub fn choice_option(text: &str) -> Option<(char, String)> {
    let mut input = text;
    let (letter, label) = option_label(&mut input).ok()?;
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    Some((letter, label.to_string()))
}
