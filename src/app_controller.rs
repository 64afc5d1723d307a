/*!
 * Interactive command-line controller.
 *
 * Drives the same pipeline the HTTP server exposes, but in-process: an outer
 * loop reads source text, an inner loop reviews the suggestions and handles
 * save and refine commands. Shell-boundary errors are reported and never
 * abort either loop.
 */

use anyhow::Result;
use dialoguer::Input;
use log::error;
use std::sync::Arc;

use crate::app_config::Config;
use crate::pipeline::{Pipeline, PipelineRequest, ResultEntry};
use crate::providers::groq::Groq;
use crate::session::{Action, Session, preview, resolve_version};

/// Main application controller for the interactive loop
pub struct Controller {
    pipeline: Pipeline,
}

impl Controller {
    /// Create a controller wired to the configured model service
    pub fn with_config(config: &Config) -> Result<Self> {
        let model = Arc::new(Groq::new(&config.provider));
        Ok(Self {
            pipeline: Pipeline::new(model),
        })
    }

    /// Create a controller over an existing pipeline
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Outer loop: read source text, translate, hand off to the review loop.
    ///
    /// `q`, `exit` and `sair` terminate the loop and print the compiled list.
    pub async fn run(&self) -> Result<()> {
        let mut session = Session::new();

        println!("\n>>> trivox ready. Type 'q' to exit. <<<");

        loop {
            let input: String = Input::new()
                .with_prompt("=>")
                .allow_empty(true)
                .interact_text()?;
            let input = input.trim().to_string();

            if ["q", "exit", "sair"]
                .iter()
                .any(|quit| input.eq_ignore_ascii_case(quit))
            {
                break;
            }

            if input.is_empty() {
                continue;
            }

            let results = match self
                .pipeline
                .run(PipelineRequest::Translate { text: input })
                .await
            {
                Ok(results) => results,
                Err(e) => {
                    error!("Translation failed: {}", e);
                    Vec::new()
                }
            };

            self.review_loop(results, &mut session).await?;
        }

        print_compiled(&session);
        Ok(())
    }

    /// Inner loop: display the current entries and dispatch commands until
    /// the user asks for new text or no results remain.
    async fn review_loop(
        &self,
        mut current: Vec<ResultEntry>,
        session: &mut Session,
    ) -> Result<()> {
        while !current.is_empty() {
            display_results(&current);
            println!("\nOPTIONS: [1,2.. to Save] | [r1, r2.. to Refine] | [Enter for New Text]");

            let action: String = Input::new()
                .with_prompt("Action")
                .allow_empty(true)
                .interact_text()?;

            match Action::parse(&action) {
                Action::NewText => break,
                Action::Refine(index) => {
                    let Some(selected) = resolve_version(&current, index).map(str::to_string)
                    else {
                        println!("Invalid refinement choice. Use 'r1', 'r2', etc.");
                        continue;
                    };

                    println!("--- Refining: '{}...' ---", preview(&selected, 30));

                    match self
                        .pipeline
                        .run(PipelineRequest::Refine { sentence: selected })
                        .await
                    {
                        Ok(refined) if !refined.is_empty() => current = refined,
                        Ok(_) => println!("The model returned no refinements."),
                        Err(e) => error!("Refinement failed: {}", e),
                    }
                }
                Action::Save(indices) => {
                    let saved = session.save_selections(&current, &indices);
                    if saved.is_empty() {
                        println!("Invalid selection.");
                    } else {
                        for text in saved {
                            println!("   -> Saved: {}...", preview(&text, 40));
                        }
                    }
                }
                Action::Invalid => println!("Unrecognized command."),
            }
        }

        Ok(())
    }
}

/// Render entries with their focus line and 1-based version indices
fn display_results(results: &[ResultEntry]) {
    for entry in results {
        println!("\nFOCUS: {}", entry.original);
        for (idx, version) in entry.versions.iter().enumerate() {
            println!("   [{}] {}", idx + 1, version);
        }
    }
}

fn print_compiled(session: &Session) {
    println!("\n{}", "=".repeat(40));
    if session.is_empty() {
        println!("Nothing saved this session.");
    } else {
        for item in session.compiled() {
            println!("{}", item);
        }
    }
    println!("{}", "=".repeat(40));
}
