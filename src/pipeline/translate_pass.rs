/*!
 * Triple-translator step: renders every sentence into candidate English
 * versions, one ResultEntry per sentence.
 */

use serde::Deserialize;

use super::{ResultEntry, parse_step_response};
use crate::errors::PipelineError;
use crate::prompts;
use crate::providers::LanguageModel;

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    results: Vec<ResultEntry>,
}

/// Ask the model for stylistic English versions of every sentence.
pub(super) async fn run(
    model: &dyn LanguageModel,
    sentences: &[String],
) -> Result<Vec<ResultEntry>, PipelineError> {
    let raw = model
        .complete(
            prompts::TRIPLE_TRANSLATOR,
            &prompts::translate_payload(sentences),
        )
        .await?;

    let parsed: TranslateResponse = parse_step_response("translator", &raw)?;

    if parsed.results.len() != sentences.len() {
        log::warn!(
            "Translator returned {} entries for {} sentences",
            parsed.results.len(),
            sentences.len()
        );
    }

    Ok(parsed.results)
}
