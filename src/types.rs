use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub episode_id: String,
    pub title: String,
    pub description: String,
    pub language: Language,
    pub scenes: Vec<Scene>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Dialogue {
        id: String,
        speaker: String,
        text: String,
        #[serde(rename = "nextNodeId")]
        next: String,
    },
    Narration {
        id: String,
        text: String,
        #[serde(rename = "nextNodeId")]
        next: String,
    },
    Email {
        id: String,
        speaker: String,
        text: String,
        data: EmailData,
        #[serde(rename = "nextNodeId")]
        next: String,
    },
    Choice {
        id: String,
        text: String,
        choices: Vec<ChoiceOption>,
    },
    Input {
        id: String,
        text: String,
        #[serde(rename = "nextNodeId")]
        next: String,
    },
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Dialogue { id, .. }
            | Node::Narration { id, .. }
            | Node::Email { id, .. }
            | Node::Choice { id, .. }
            | Node::Input { id, .. } => id,
        }
    }

    /// Forward link to the following node; choices have none.
    pub fn next(&self) -> Option<&str> {
        match self {
            Node::Dialogue { next, .. }
            | Node::Narration { next, .. }
            | Node::Email { next, .. }
            | Node::Input { next, .. } => Some(next.as_str()),
            Node::Choice { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Dialogue { .. } => "dialogue",
            Node::Narration { .. } => "narration",
            Node::Email { .. } => "email",
            Node::Choice { .. } => "choice",
            Node::Input { .. } => "input",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EmailData {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub body: Option<String>,
}

impl EmailData {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.subject.is_none() && self.body.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    pub text: String,
    pub next_scene_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ko,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ko" | "korean" | "한국어" => Ok(Language::Ko),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}
