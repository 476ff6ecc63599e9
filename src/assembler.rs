use crate::ast::{Line, SceneHeader, Token};
use crate::extract::{extract_choices, extract_email};
use crate::factory::NodeFactory;
use crate::options::ParseOptions;
use crate::parser::classify;
use crate::speaker::normalize_speaker;
use crate::types::{Node, Scene};
use tracing::{debug, trace};

struct OpenScene {
    id: String,
    title: String,
    nodes: Vec<Node>,
}

/// Walks the line sequence once, grouping nodes into scenes.
///
/// Owns the [`NodeFactory`] for the parse, so ids are scoped to one document.
pub struct SceneAssembler {
    options: ParseOptions,
    factory: NodeFactory,
    scenes: Vec<Scene>,
    current: Option<OpenScene>,
}

impl SceneAssembler {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            factory: NodeFactory::new(),
            scenes: Vec::new(),
            current: None,
        }
    }

    pub fn assemble(mut self, lines: &[Line<'_>]) -> Vec<Scene> {
        let mut i = 0;
        while i < lines.len() {
            let line = &lines[i];
            let step = match classify(line) {
                Token::SceneHeader(header) => {
                    self.open_scene(header, line);
                    1
                }
                Token::Blank | Token::HorizontalRule | Token::Text => 1,
                token => self.handle_content(token, lines, i),
            };
            i += step;
        }

        self.close_scene();
        debug!(
            scenes = self.scenes.len(),
            nodes = self.factory.allocated(),
            "assembled scenes"
        );
        self.scenes
    }

    fn open_scene(&mut self, header: SceneHeader, line: &Line<'_>) {
        self.close_scene();

        let id = match &header.number {
            Some(n) => format!("scene_{}", n),
            None => format!("scene_{}", self.scenes.len()),
        };
        let title = match (header.title, &header.number) {
            (Some(title), _) => title,
            (None, Some(n)) => format!("Scene {}", n),
            (None, None) => "Scene".to_string(),
        };

        trace!(line_no = line.line_no(), scene_id = %id, "scene opened");
        self.current = Some(OpenScene {
            id,
            title,
            nodes: Vec::new(),
        });
    }

    fn close_scene(&mut self) {
        let Some(scene) = self.current.take() else {
            return;
        };
        if scene.nodes.is_empty() {
            debug!(scene_id = %scene.id, "dropping empty scene");
            return;
        }
        self.scenes.push(Scene {
            id: scene.id,
            title: scene.title,
            nodes: scene.nodes,
        });
    }

    /// Builds the node `token` starts and returns how many lines it spans.
    fn handle_content(&mut self, token: Token, lines: &[Line<'_>], i: usize) -> usize {
        let line = &lines[i];
        let Some(scene) = self.current.as_mut() else {
            trace!(line_no = line.line_no(), "content outside a scene skipped");
            return 1;
        };

        let policy = self.options.window_policy;
        let (node, step) = match token {
            Token::Dialogue(d) => {
                let speaker = normalize_speaker(&d.speaker);
                (Some(self.factory.dialogue(speaker, d.text)), 1)
            }
            Token::Narration(text) => (Some(self.factory.narration(text)), 1),
            Token::Input(prompt) => (Some(self.factory.input(prompt)), 1),
            Token::EmailTrigger => {
                let out = extract_email(lines, i, policy);
                match out.record {
                    Some(data) => (Some(self.factory.email(data)), out.consumed.max(1)),
                    None => (None, 1),
                }
            }
            Token::ChoiceTrigger => {
                let out = extract_choices(lines, i, policy);
                match out.record {
                    Some(options) => (Some(self.factory.choice(options)), out.consumed.max(1)),
                    None => (None, 1),
                }
            }
            Token::SceneHeader(_) | Token::Blank | Token::HorizontalRule | Token::Text => (None, 1),
        };

        if let Some(node) = node {
            trace!(
                line_no = line.line_no(),
                node_id = node.id(),
                kind = node.kind(),
                consumed = step,
                "node built"
            );
            scene.nodes.push(node);
        }
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::split_lines;
    use crate::options::WindowPolicy;

    fn assemble(text: &str) -> Vec<Scene> {
        SceneAssembler::new(ParseOptions::default()).assemble(&split_lines(text))
    }

    #[test]
    fn dialogue_inside_scene() {
        let scenes = assemble("## Scene 1\n**Kastor**: Hello there");
        assert_eq!(scenes.len(), 1);
        assert_eq!(
            scenes[0].nodes,
            vec![Node::Dialogue {
                id: "node_001".to_string(),
                speaker: "kastor".to_string(),
                text: "Hello there".to_string(),
                next: "node_002".to_string(),
            }]
        );
    }

    #[test]
    fn narration_keeps_exact_text() {
        let scenes = assemble("## Scene 1\n[The room is dark.]");
        match &scenes[0].nodes[0] {
            Node::Narration { text, .. } => assert_eq!(text, "The room is dark."),
            other => panic!("expected narration, got {:?}", other),
        }
    }

    #[test]
    fn empty_scene_between_headers_is_dropped() {
        let scenes = assemble("## Scene 1 — Empty\n\n\n## Scene 2 — Full\n[Rain.]");
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].id, "scene_2");
        assert_eq!(scenes[0].title, "Full");
    }

    #[test]
    fn trailing_empty_scene_is_dropped() {
        let scenes = assemble("## Scene 1\n[Rain.]\n## Scene 2\n");
        let ids: Vec<&str> = scenes.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["scene_1"]);
    }

    #[test]
    fn content_before_first_scene_is_skipped() {
        let scenes = assemble("[Prologue.]\n**Kastor**: Hi\n## Scene 1\n[Inside.]");
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].nodes.len(), 1);
        assert_eq!(scenes[0].nodes[0].id(), "node_001");
    }

    #[test]
    fn unnumbered_scene_uses_position() {
        let scenes = assemble("## Scene 4\n[a]\n## Scene — Interlude\n[b]\n## Scene\n[c]");
        let got: Vec<(&str, &str)> = scenes
            .iter()
            .map(|s| (s.id.as_str(), s.title.as_str()))
            .collect();
        assert_eq!(
            got,
            [
                ("scene_4", "Scene 4"),
                ("scene_1", "Interlude"),
                ("scene_2", "Scene")
            ]
        );
    }

    #[test]
    fn counter_runs_across_scenes() {
        let scenes = assemble("## Scene 1\n[a]\n[b]\n## Scene 2\n[c]");
        let ids: Vec<&str> = scenes
            .iter()
            .flat_map(|s| s.nodes.iter().map(Node::id))
            .collect();
        assert_eq!(ids, ["node_001", "node_002", "node_003"]);
        assert_eq!(scenes[1].nodes[0].next(), Some("node_004"));
    }

    const EMAIL_THEN_DIALOGUE: &str = "## Scene 1\n\
        ### 📧 Email\n\
        **Subject**: Patch\n\
        > Where is it?\n\
        **Kastor**: Let's look.";

    #[test]
    fn exact_window_keeps_content_after_email() {
        let scenes = assemble(EMAIL_THEN_DIALOGUE);
        let kinds: Vec<&str> = scenes[0].nodes.iter().map(Node::kind).collect();
        assert_eq!(kinds, ["email", "dialogue"]);
    }

    #[test]
    fn fixed_window_swallows_content_after_email() {
        let options = ParseOptions {
            window_policy: WindowPolicy::Fixed,
        };
        let scenes = SceneAssembler::new(options).assemble(&split_lines(EMAIL_THEN_DIALOGUE));
        let kinds: Vec<&str> = scenes[0].nodes.iter().map(Node::kind).collect();
        assert_eq!(kinds, ["email"]);
    }

    #[test]
    fn choice_block_builds_terminal_node() {
        let scenes = assemble("## Scene 1\n### 🔍 Interactive\n**A) Fix it**\n→ Apply the patch\n\n");
        match &scenes[0].nodes[0] {
            Node::Choice { text, choices, .. } => {
                assert_eq!(text, "Choose your approach:");
                assert_eq!(choices.len(), 1);
                assert_eq!(choices[0].text, "Fix it - Apply the patch");
                assert_eq!(choices[0].next_scene_id, "choice_result_a");
            }
            other => panic!("expected choice, got {:?}", other),
        }
    }

    #[test]
    fn choice_heading_without_options_builds_nothing() {
        let scenes = assemble("## Scene 1\n### 🔍 Interactive\nnothing here\n[After.]");
        let kinds: Vec<&str> = scenes[0].nodes.iter().map(Node::kind).collect();
        assert_eq!(kinds, ["narration"]);
    }
}
