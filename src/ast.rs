#[derive(Debug, Clone, PartialEq)]
pub struct Line<'s> {
    pub index: usize, // 0-based position in the source
    pub text: &'s str, // trimmed
}

impl<'s> Line<'s> {
    pub fn line_no(&self) -> usize {
        self.index + 1
    }
}

/// Splits source text into trimmed lines, keeping their original positions.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    input
        .lines()
        .enumerate()
        .map(|(index, raw)| {
            let raw = if index == 0 {
                raw.trim_start_matches('\u{feff}')
            } else {
                raw
            };
            Line {
                index,
                text: raw.trim(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    SceneHeader(SceneHeader),
    Dialogue(Dialogue),
    Narration(String),
    EmailTrigger,
    ChoiceTrigger,
    Input(String),
    Blank,
    HorizontalRule,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneHeader {
    pub number: Option<String>, // digits as written, "01" stays "01"
    pub title: Option<String>,  // text after the title separator
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialogue {
    pub speaker: String, // raw label, not yet normalized
    pub text: String,
}

impl Token {
    /// Tokens that end a multi-line block when met inside its window.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Token::Blank | Token::Text)
    }
}
