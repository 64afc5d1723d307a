/*!
 * Two-mode suggestion pipeline.
 *
 * A request is routed to one of two linear paths sharing a terminal state:
 * - Translate: splitter -> translator
 * - Refine: refiner
 *
 * Each step is one structured JSON exchange with the language model. Every
 * invocation is independent; nothing carries across runs except what the
 * caller re-feeds (e.g. a chosen version becoming the next refine payload).
 */

mod refine_pass;
mod split_pass;
mod translate_pass;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::PipelineError;
use crate::providers::LanguageModel;

/// One source sentence paired with its candidate renderings.
///
/// `versions` keeps the model's ordering; user-facing selection commands
/// address it with 1-based indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// The sentence the versions were produced for
    pub original: String,

    /// Candidate renderings, in model order
    #[serde(default)]
    pub versions: Vec<String>,
}

/// Discriminator selecting the pipeline path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Translate,
    Refine,
}

impl Mode {
    /// Route a wire-level mode tag.
    ///
    /// Total: `"refine"` selects the refine path, any other tag (including
    /// an unknown or empty one) falls back to translation.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("refine") {
            Self::Refine
        } else {
            Self::Translate
        }
    }
}

/// A single pipeline invocation. The variant carries exactly the payload its
/// path needs.
#[derive(Debug, Clone)]
pub enum PipelineRequest {
    /// Full translation of raw text
    Translate { text: String },
    /// Fresh variations of one previously chosen sentence
    Refine { sentence: String },
}

impl PipelineRequest {
    /// Build a request from a wire-level mode tag and its payload.
    ///
    /// Routing follows `Mode::from_tag`: an unknown tag becomes a
    /// translation request.
    pub fn from_tag(tag: &str, payload: String) -> Self {
        match Mode::from_tag(tag) {
            Mode::Translate => Self::Translate { text: payload },
            Mode::Refine => Self::Refine { sentence: payload },
        }
    }

    /// The mode this request routes to
    pub fn mode(&self) -> Mode {
        match self {
            Self::Translate { .. } => Mode::Translate,
            Self::Refine { .. } => Mode::Refine,
        }
    }

    /// The dynamic payload the request carries
    fn payload(&self) -> &str {
        match self {
            Self::Translate { text } => text,
            Self::Refine { sentence } => sentence,
        }
    }
}

/// Suggestion pipeline over a language model
pub struct Pipeline {
    model: Arc<dyn LanguageModel>,
}

impl Pipeline {
    /// Create a pipeline over the given model
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Run one invocation to completion.
    ///
    /// The request's mode is the transition guard: translate runs the
    /// splitter then the translator, refine runs the refiner alone.
    /// `Ok(vec![])` means the model had nothing to offer; a completion that
    /// cannot be decoded surfaces as `Err(PipelineError::Malformed)` so
    /// callers can tell the two apart.
    pub async fn run(&self, request: PipelineRequest) -> Result<Vec<ResultEntry>, PipelineError> {
        match request.mode() {
            Mode::Translate => {
                let sentences = split_pass::run(self.model.as_ref(), request.payload()).await?;
                if sentences.is_empty() {
                    log::warn!("Splitter returned no sentences");
                    return Ok(Vec::new());
                }
                translate_pass::run(self.model.as_ref(), &sentences).await
            }
            Mode::Refine => refine_pass::run(self.model.as_ref(), request.payload()).await,
        }
    }
}

/// Pull a JSON object out of a completion that may wrap it in markdown code
/// fences or surrounding prose.
fn extract_json(response: &str) -> Option<&str> {
    let trimmed = response.trim();

    if trimmed.starts_with('{') {
        return Some(trimmed);
    }

    if let Some(start) = trimmed.find("```json") {
        if let Some(end) = trimmed[start + 7..].find("```") {
            return Some(trimmed[start + 7..start + 7 + end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        if let Some(end) = trimmed[start + 3..].find("```") {
            let inner = trimmed[start + 3..start + 3 + end].trim();
            if inner.starts_with('{') {
                return Some(inner);
            }
        }
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => Some(&trimmed[start..=end]),
        _ => None,
    }
}

/// Decode one step's completion into its expected shape.
fn parse_step_response<T>(step: &str, raw: &str) -> Result<T, PipelineError>
where
    T: serde::de::DeserializeOwned,
{
    let json = extract_json(raw).ok_or_else(|| {
        PipelineError::Malformed(format!("{}: completion contained no JSON object", step))
    })?;

    serde_json::from_str(json).map_err(|e| PipelineError::Malformed(format!("{}: {}", step, e)))
}
