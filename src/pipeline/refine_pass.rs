/*!
 * Style-refiner step: the whole of the refine path.
 */

use serde::Deserialize;

use super::{ResultEntry, parse_step_response};
use crate::errors::PipelineError;
use crate::prompts;
use crate::providers::LanguageModel;

#[derive(Debug, Deserialize)]
struct RefineResponse {
    #[serde(default)]
    results: Vec<ResultEntry>,
}

/// Ask the model for fresh variations of one chosen sentence.
///
/// The contract is one ResultEntry per refinement request; extra entries
/// from a chatty model are dropped.
pub(super) async fn run(
    model: &dyn LanguageModel,
    sentence: &str,
) -> Result<Vec<ResultEntry>, PipelineError> {
    let raw = model
        .complete(prompts::STYLE_REFINER, &prompts::refine_payload(sentence))
        .await?;

    let parsed: RefineResponse = parse_step_response("refiner", &raw)?;

    Ok(parsed.results.into_iter().take(1).collect())
}
