/*!
 * Fixed role instructions and payload builders for the three prompt steps.
 *
 * Every step constrains the model to answer with a single JSON object; the
 * example output embedded in each instruction doubles as the schema the
 * pipeline decodes against.
 */

/// System instruction for the sentence-splitter step.
pub const SENTENCE_SPLITTER: &str = "You are a linguistic tool. Your task is to break the provided text into individual sentences. \
Respond ONLY with a JSON object. \
Example Output: {\"sentences\": [\"Sentence A\", \"Sentence B\"]}";

/// System instruction for the triple-translator step. The count of three
/// versions is advisory; the model's discretion is accepted.
pub const TRIPLE_TRANSLATOR: &str = "You are a professional translator and expert polyglot. For each Portuguese sentence provided, create 3 English versions. \
Choose the 3 best stylistic variations that fit the context of the sentence. \
Respond ONLY with a JSON object. No numbers inside strings. \
Example Output: {\"results\": [{\"original\": \"...\", \"versions\": [\"V1\", \"V2\", \"V3\"]}]}";

/// System instruction for the style-refiner step.
pub const STYLE_REFINER: &str = "You are a writing coach. The user has selected a specific English sentence and wants more variations of it. \
Generate 3 NEW natural English variations. Do NOT add numbers. \
Respond ONLY with a JSON object. \
Example Output: {\"results\": [{\"original\": \"...\", \"versions\": [\"Alt 1\", \"Alt 2\", \"Alt 3\"]}]}";

/// User payload for the splitter step.
pub fn split_payload(text: &str) -> String {
    format!("SENTENCE: '{}'", text)
}

/// User payload for the translator step, one sentence per line.
pub fn translate_payload(sentences: &[String]) -> String {
    format!("TRANSLATE: {}", sentences.join("\n"))
}

/// User payload for the refiner step.
pub fn refine_payload(sentence: &str) -> String {
    format!("REFINE: {}", sentence)
}
