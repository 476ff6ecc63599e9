//! Converts interactive-fiction episode markdown into a scene/node graph.
//!
//! The scanner is a single pass over trimmed lines: [`parser`] classifies
//! each line, the extractors in [`extract`] consume multi-line email and
//! choice blocks, and [`assembler::SceneAssembler`] groups the resulting
//! nodes into scenes.

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
use pyo3::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use tracing::instrument;

mod assembler;
mod ast;
mod episode;
mod error;
mod extract;
mod factory;
pub mod links;
mod markers;
mod options;
mod parser;
mod speaker;
mod types;

pub use error::{Error, Result};
pub use options::{ParseOptions, WindowPolicy};
pub use speaker::normalize_speaker;
pub use types::{ChoiceOption, EmailData, Episode, Language, Node, Scene};

/// Parses one episode document. Never fails; unrecognized lines are ignored.
#[instrument(skip(text, options), fields(lines = text.lines().count()))]
pub fn parse_episode(
    text: &str,
    episode_id: &str,
    language: Language,
    options: &ParseOptions,
) -> Episode {
    let lines = ast::split_lines(text);
    let scenes = assembler::SceneAssembler::new(options.clone()).assemble(&lines);
    episode::build_episode(&lines, episode_id, language, scenes)
}

pub fn to_json(episode: &Episode) -> Result<String> {
    Ok(serde_json::to_string_pretty(episode)?)
}

/// Parses `text` and renders the episode as pretty JSON.
pub fn markdown_to_json(
    text: &str,
    episode_id: &str,
    language: &str,
    options: &ParseOptions,
) -> Result<String> {
    let language: Language = language.parse()?;
    to_json(&parse_episode(text, episode_id, language, options))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
fn parse_markdown(text: String, episode_id: String, language: String) -> PyResult<String> {
    markdown_to_json(&text, &episode_id, &language, &ParseOptions::default())
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn parse_markdown_wasm(text: &str, episode_id: &str, language: &str) -> std::result::Result<String, JsValue> {
    markdown_to_json(text, episode_id, language, &ParseOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn parse_markdown_with_options_wasm(
    text: &str,
    episode_id: &str,
    language: &str,
    legacy_windows: bool,
) -> std::result::Result<String, JsValue> {
    let options = if legacy_windows {
        ParseOptions::legacy()
    } else {
        ParseOptions::default()
    };
    markdown_to_json(text, episode_id, language, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pymodule]
fn episode_md(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_markdown, m)?)?;
    Ok(())
}
