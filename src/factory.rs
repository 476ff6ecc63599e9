use crate::markers::{CHOICE_PROMPT, DEFAULT_SUBJECT, EMAIL_GLYPH};
use crate::types::{ChoiceOption, EmailData, Node};

/// Hands out sequential node ids for one document.
///
/// Every node except a choice is linked to the id the *next* allocation will
/// produce, whether or not another node ever follows.
#[derive(Debug)]
pub struct NodeFactory {
    counter: usize,
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self { counter: 1 }
    }
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes allocated so far.
    pub fn allocated(&self) -> usize {
        self.counter - 1
    }

    fn allocate(&mut self) -> (String, String) {
        let id = node_id(self.counter);
        self.counter += 1;
        (id, node_id(self.counter))
    }

    pub fn dialogue(&mut self, speaker: String, text: String) -> Node {
        let (id, next) = self.allocate();
        Node::Dialogue {
            id,
            speaker,
            text,
            next,
        }
    }

    pub fn narration(&mut self, text: String) -> Node {
        let (id, next) = self.allocate();
        Node::Narration { id, text, next }
    }

    pub fn email(&mut self, data: EmailData) -> Node {
        let (id, next) = self.allocate();
        let subject = data.subject.as_deref().unwrap_or(DEFAULT_SUBJECT);
        Node::Email {
            id,
            speaker: "system".to_string(),
            text: format!("{} {}", EMAIL_GLYPH, subject),
            data,
            next,
        }
    }

    pub fn choice(&mut self, choices: Vec<ChoiceOption>) -> Node {
        let (id, _) = self.allocate();
        Node::Choice {
            id,
            text: CHOICE_PROMPT.to_string(),
            choices,
        }
    }

    pub fn input(&mut self, text: String) -> Node {
        let (id, next) = self.allocate();
        Node::Input { id, text, next }
    }
}

fn node_id(n: usize) -> String {
    format!("node_{:03}", n)
}
