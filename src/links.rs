//! Forward-reference report.
//!
//! The parser never checks that `nextNodeId` or `nextSceneId` name something
//! real. This pass lists the ones that do not, for callers that care.

use crate::types::{Episode, Node};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedLink {
    Node { from: String, target: String },
    Scene { from: String, target: String },
}

/// Every forward reference in `episode` that names no node or scene, in
/// document order.
pub fn unresolved_links(episode: &Episode) -> Vec<UnresolvedLink> {
    let node_ids: HashSet<&str> = episode
        .scenes
        .iter()
        .flat_map(|scene| scene.nodes.iter().map(Node::id))
        .collect();
    let scene_ids: HashSet<&str> = episode.scenes.iter().map(|s| s.id.as_str()).collect();

    let mut out = Vec::new();
    for node in episode.scenes.iter().flat_map(|scene| scene.nodes.iter()) {
        if let Some(next) = node.next() {
            if !node_ids.contains(next) {
                out.push(UnresolvedLink::Node {
                    from: node.id().to_string(),
                    target: next.to_string(),
                });
            }
        }
        if let Node::Choice { id, choices, .. } = node {
            for choice in choices {
                if !scene_ids.contains(choice.next_scene_id.as_str()) {
                    out.push(UnresolvedLink::Scene {
                        from: format!("{}/{}", id, choice.id),
                        target: choice.next_scene_id.clone(),
                    });
                }
            }
        }
    }
    out
}
