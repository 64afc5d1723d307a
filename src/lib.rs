/*!
 * # trivox
 *
 * A Rust tool that turns Portuguese text into English suggestions: every
 * sentence gets three candidate renderings, and any candidate can be refined
 * into three fresh variations until one reads right.
 *
 * ## Features
 *
 * - Sentence splitting, translation and refinement delegated to a
 *   Groq-hosted language model with JSON-constrained completions
 * - Two-mode pipeline: full translation or single-sentence refinement
 * - Interactive terminal loop with save and refine commands and a
 *   per-session compiled list of approved phrasings
 * - The same pipeline served over HTTP (`POST /translate`, `POST /refine`)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `providers`: Language-model clients:
 *   - `providers::groq`: Groq (OpenAI-compatible) API client
 *   - `providers::mock`: Scripted models for testing
 * - `prompts`: Fixed role instructions and payload builders
 * - `pipeline`: Mode routing and the three prompt steps
 * - `session`: Review-session state and the shell command grammar
 * - `app_controller`: Interactive command-line loop
 * - `server`: HTTP presentation of the pipeline
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod server;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, PipelineError, ProviderError};
pub use pipeline::{Mode, Pipeline, PipelineRequest, ResultEntry};
pub use session::{Action, Session};
