//! Multi-line block extraction.
//!
//! Each extractor inspects a bounded window starting at the trigger line and
//! reports how many lines the caller should skip. Under
//! [`WindowPolicy::Fixed`] that is always the full window; under
//! [`WindowPolicy::Exact`] it is the span the block actually occupied, so
//! content right after a short block is still scanned.

use crate::ast::{Line, Token};
use crate::markers::{find_any, ARROWS, FIELD_SEPARATORS, FROM_LABELS, QUOTE, SUBJECT_LABELS};
use crate::options::WindowPolicy;
use crate::parser::{choice_option, classify};
use crate::types::{ChoiceOption, EmailData};
use tracing::trace;

pub const EMAIL_WINDOW: usize = 15;
pub const CHOICE_WINDOW: usize = 20;
pub const MAX_CHOICES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Extracted<T> {
    /// `None` when the window held nothing usable.
    pub record: Option<T>,
    /// Lines to skip from the trigger line, the trigger included.
    pub consumed: usize,
}

/// Collects sender, subject and quoted body from the email block at `start`.
pub fn extract_email(lines: &[Line<'_>], start: usize, policy: WindowPolicy) -> Extracted<EmailData> {
    let end = lines.len().min(start + EMAIL_WINDOW);
    let mut data = EmailData::default();
    let mut last = start;

    for (i, line) in lines.iter().enumerate().take(end).skip(start) {
        let text = line.text;

        if let Some(label) = find_any(text, FROM_LABELS) {
            data.from.get_or_insert_with(|| field_value(text, label));
        } else if let Some(label) = find_any(text, SUBJECT_LABELS) {
            data.subject.get_or_insert_with(|| field_value(text, label));
        } else if let Some(quoted) = text.strip_prefix(QUOTE) {
            let body = data.body.get_or_insert_with(String::new);
            body.push_str(quoted.trim());
            body.push('\n');
        } else if i > start && policy == WindowPolicy::Exact && ends_block(line) {
            trace!(line_no = line.line_no(), "email block ends");
            break;
        }

        last = i;
    }

    let record = (!data.is_empty()).then_some(data);
    Extracted {
        record,
        consumed: consumed(policy, EMAIL_WINDOW, start, last),
    }
}

/// Collects up to three lettered options from the choice block at `start`.
pub fn extract_choices(
    lines: &[Line<'_>],
    start: usize,
    policy: WindowPolicy,
) -> Extracted<Vec<ChoiceOption>> {
    let end = lines.len().min(start + CHOICE_WINDOW);
    let mut options = Vec::new();
    let mut last = start;

    for i in (start + 1)..end {
        let line = &lines[i];

        if let Some((letter, label)) = choice_option(line.text) {
            let mut text = label;
            last = i;
            if let Some(description) = lines.get(i + 1).and_then(|next| arrow_description(next.text)) {
                text = format!("{} - {}", text, description);
                last = i + 1;
            }

            let letter = letter.to_ascii_lowercase();
            options.push(ChoiceOption {
                id: format!("choice_{}", letter),
                text,
                next_scene_id: format!("choice_result_{}", letter),
            });

            if options.len() >= MAX_CHOICES {
                break;
            }
        } else if policy == WindowPolicy::Exact && closes_choices(line, !options.is_empty()) {
            trace!(line_no = line.line_no(), "choice block ends");
            break;
        }
    }

    let record = (!options.is_empty()).then_some(options);
    Extracted {
        record,
        consumed: consumed(policy, CHOICE_WINDOW, start, last),
    }
}

fn consumed(policy: WindowPolicy, window: usize, start: usize, last: usize) -> usize {
    match policy {
        WindowPolicy::Fixed => window,
        WindowPolicy::Exact => last - start + 1,
    }
}

/// Text after a field label, e.g. `ceo@legend.gg` in `**From**: ceo@legend.gg`.
fn field_value(text: &str, label: &str) -> String {
    let tail = match text.find(label) {
        Some(pos) => &text[pos + label.len()..],
        None => text,
    };
    tail.trim_start_matches(|c: char| c == '*' || c.is_whitespace() || FIELD_SEPARATORS.contains(&c))
        .trim()
        .to_string()
}

fn arrow_description(text: &str) -> Option<String> {
    find_any(text, ARROWS)?;
    let description = ARROWS
        .iter()
        .fold(text.to_string(), |acc, arrow| acc.replace(arrow, ""));
    Some(description.trim().to_string())
}

fn ends_block(line: &Line<'_>) -> bool {
    classify(line).is_structural()
}

/// A scene header always closes a choice block; other content only once an
/// option has been seen, so prompt lines between the heading and the options
/// stay inside the block.
fn closes_choices(line: &Line<'_>, has_options: bool) -> bool {
    match classify(line) {
        Token::SceneHeader(_) => true,
        token => has_options && token.is_structural(),
    }
}
