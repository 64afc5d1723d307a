/*!
 * Review-session state and the command grammar of the interactive shell.
 *
 * The grammar mirrors what the review loop prints:
 * - empty input leaves the loop and asks for new source text
 * - `r<N>` refines version N of the entry in focus
 * - a comma-separated list of indices saves those versions
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pipeline::ResultEntry;

static REFINE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^r(\d+)$").unwrap());

/// One parsed review-loop command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Empty input: leave the review loop and prompt for new source text
    NewText,
    /// `r<N>`: refine version N (1-based) of the entry in focus
    Refine(usize),
    /// Comma-separated indices: save those versions (1-based)
    Save(Vec<usize>),
    /// Anything else
    Invalid,
}

impl Action {
    /// Parse a raw input line into an Action.
    ///
    /// Non-numeric tokens inside a save list are dropped; a refine command
    /// with index zero or a non-numeric suffix is invalid.
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();

        if input.is_empty() {
            return Self::NewText;
        }

        if let Some(caps) = REFINE_PATTERN.captures(&input) {
            return match caps[1].parse::<usize>() {
                Ok(n) if n >= 1 => Self::Refine(n),
                _ => Self::Invalid,
            };
        }

        if input.starts_with(|c: char| c.is_ascii_digit()) {
            let indices: Vec<usize> = input
                .split(',')
                .filter_map(|token| token.trim().parse::<usize>().ok())
                .collect();
            return Self::Save(indices);
        }

        Self::Invalid
    }
}

/// Resolve the N-th (1-based) version of the entry in focus.
///
/// Selection commands operate on the first entry of the current results.
pub fn resolve_version(results: &[ResultEntry], index: usize) -> Option<&str> {
    let versions = &results.first()?.versions;
    if index >= 1 && index <= versions.len() {
        Some(versions[index - 1].as_str())
    } else {
        None
    }
}

/// Running collection of approved phrasings for one shell lifetime.
///
/// Append-only and owned by the shell; it is printed and discarded at exit.
#[derive(Debug, Default)]
pub struct Session {
    compiled: Vec<String>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the selected versions of the focused entry, in command order.
    ///
    /// Returns the saved strings. Out-of-range indices are skipped with a
    /// warning and never abort the rest of the command.
    pub fn save_selections(
        &mut self,
        results: &[ResultEntry],
        indices: &[usize],
    ) -> Vec<String> {
        let mut saved = Vec::new();
        let Some(entry) = results.first() else {
            return saved;
        };

        for &index in indices {
            if index >= 1 && index <= entry.versions.len() {
                let text = entry.versions[index - 1].clone();
                self.compiled.push(text.clone());
                saved.push(text);
            } else {
                log::warn!(
                    "Selection {} is out of range (1-{})",
                    index,
                    entry.versions.len()
                );
            }
        }

        saved
    }

    /// The compiled list, in save order
    pub fn compiled(&self) -> &[String] {
        &self.compiled
    }

    /// Whether nothing has been saved yet
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Number of saved phrasings
    pub fn len(&self) -> usize {
        self.compiled.len()
    }
}

/// First `max_chars` characters of `text`, safe on multi-byte input.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
