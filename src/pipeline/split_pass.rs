/*!
 * Sentence-splitter step: the first hop of the translate path.
 */

use serde::Deserialize;

use super::parse_step_response;
use crate::errors::PipelineError;
use crate::prompts;
use crate::providers::LanguageModel;

#[derive(Debug, Deserialize)]
struct SplitResponse {
    /// A missing key degrades to an empty list rather than a decode failure
    #[serde(default)]
    sentences: Vec<String>,
}

/// Ask the model to break `text` into individual sentences.
pub(super) async fn run(
    model: &dyn LanguageModel,
    text: &str,
) -> Result<Vec<String>, PipelineError> {
    let raw = model
        .complete(prompts::SENTENCE_SPLITTER, &prompts::split_payload(text))
        .await?;

    let parsed: SplitResponse = parse_step_response("splitter", &raw)?;
    log::debug!("Splitter produced {} sentence(s)", parsed.sentences.len());

    Ok(parsed.sentences)
}
