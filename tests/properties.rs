//! Property tests over generated episode scripts.

use episode_md::{normalize_speaker, parse_episode, to_json, Language, Node, ParseOptions, WindowPolicy};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "## Scene 1 — Opening",
    "## Scene 2",
    "## 🎮 Scene 3 — Clues",
    "## Scene — Interlude",
    "**Kastor**: Hello there",
    "**탐정**: 확인해 볼게요.",
    "[The room is dark.]",
    "[INPUT: Enter a name]",
    "### 📧 Email",
    "**Subject:** Patch",
    "**From:** ceo@legendarena.gg",
    "> quoted body",
    "### 🔍 Interactive",
    "**A) Fix it**",
    "→ Apply the patch",
    "**B) Wait**",
    "**C) Escalate**",
    "**D) Not an option**",
    "",
    "---",
    "plain prose",
];

fn script() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..80).prop_map(|lines| lines.join("\n"))
}

fn policy() -> impl Strategy<Value = WindowPolicy> {
    prop_oneof![Just(WindowPolicy::Exact), Just(WindowPolicy::Fixed)]
}

proptest! {
    #[test]
    fn scene_id_comes_from_number(n in 0u32..100_000, title in "[A-Za-z가-힣 ]{0,24}") {
        let text = format!("## Scene {} — {}\n[x]", n, title);
        let episode = parse_episode(&text, "e", Language::En, &ParseOptions::default());
        prop_assert_eq!(episode.scenes.len(), 1);
        prop_assert_eq!(&episode.scenes[0].id, &format!("scene_{}", n));
    }

    #[test]
    fn node_ids_count_up_from_one(text in script(), window_policy in policy()) {
        let episode = parse_episode(&text, "e", Language::En, &ParseOptions { window_policy });
        let ids: Vec<&str> = episode
            .scenes
            .iter()
            .flat_map(|scene| scene.nodes.iter().map(Node::id))
            .collect();
        for (i, id) in ids.iter().enumerate() {
            prop_assert_eq!(*id, format!("node_{:03}", i + 1));
        }
    }

    #[test]
    fn emitted_scenes_are_never_empty(text in script(), window_policy in policy()) {
        let episode = parse_episode(&text, "e", Language::En, &ParseOptions { window_policy });
        prop_assert!(episode.scenes.iter().all(|scene| !scene.nodes.is_empty()));
    }

    #[test]
    fn choices_hold_one_to_three_lettered_options(text in script(), window_policy in policy()) {
        let episode = parse_episode(&text, "e", Language::En, &ParseOptions { window_policy });
        for node in episode.scenes.iter().flat_map(|scene| scene.nodes.iter()) {
            if let Node::Choice { choices, .. } = node {
                prop_assert!((1..=3).contains(&choices.len()));
                for choice in choices {
                    prop_assert!(["choice_a", "choice_b", "choice_c"].contains(&choice.id.as_str()));
                    let letter = &choice.id["choice_".len()..];
                    prop_assert_eq!(&choice.next_scene_id, &format!("choice_result_{}", letter));
                }
            }
        }
    }

    #[test]
    fn parsing_is_deterministic(text in script(), window_policy in policy()) {
        let options = ParseOptions { window_policy };
        let first = to_json(&parse_episode(&text, "e", Language::Ko, &options)).unwrap();
        let second = to_json(&parse_episode(&text, "e", Language::Ko, &options)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn speaker_normalization_is_total(label in any::<String>()) {
        let key = normalize_speaker(&label);
        prop_assert!(!key.is_empty());
    }

    #[test]
    fn unknown_speakers_are_lowercased(label in "[a-z][a-z ]{0,12}[a-z]") {
        prop_assert_eq!(normalize_speaker(&label), label.to_lowercase());
    }
}

#[test]
fn two_headers_with_blank_lines_emit_only_the_second() {
    let text = "## Scene 1\n\n\n## Scene 2\n**Kastor**: Hello there";
    let episode = parse_episode(text, "e", Language::En, &ParseOptions::default());
    let ids: Vec<&str> = episode.scenes.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["scene_2"]);
}
