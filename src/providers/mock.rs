/*!
 * Mock language-model implementations for testing.
 *
 * This module provides mock models that simulate different behaviors:
 * - `MockModel::scripted(...)` - Returns canned completions in order
 * - `MockModel::malformed()` - Answers with prose instead of JSON
 * - `MockModel::failing()` - Always fails with a transport error
 * - `MockModel::empty()` - Returns an empty completion
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::errors::ProviderError;
use crate::providers::LanguageModel;

/// Behavior mode for the mock model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Pops canned completions in order
    Scripted,
    /// Always fails with a transport error
    Failing,
    /// Returns prose that contains no JSON object
    Malformed,
    /// Returns an empty completion
    Empty,
}

/// Mock model for testing pipeline behavior
#[derive(Debug)]
pub struct MockModel {
    /// Behavior mode
    behavior: MockBehavior,
    /// Canned completions for scripted mode
    responses: Mutex<VecDeque<String>>,
    /// Prompts received, in call order
    requests: Mutex<Vec<(String, String)>>,
}

impl MockModel {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that replays the given completions in order
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let model = Self::new(MockBehavior::Scripted);
        model
            .responses
            .lock()
            .expect("mock state poisoned")
            .extend(responses.into_iter().map(Into::into));
        model
    }

    /// Create a mock that always fails with a transport error
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that answers with prose instead of JSON
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Create a mock that returns empty completions
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// The (system, user) prompt pairs received so far
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().expect("mock state poisoned").clone()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .expect("mock state poisoned")
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match self.behavior {
            MockBehavior::Scripted => self
                .responses
                .lock()
                .expect("mock state poisoned")
                .pop_front()
                .ok_or_else(|| {
                    ProviderError::RequestFailed("mock script exhausted".to_string())
                }),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock transport failure".to_string(),
            )),
            MockBehavior::Malformed => {
                Ok("Happy to help! Here are the sentences you asked about.".to_string())
            }
            MockBehavior::Empty => Ok(String::new()),
        }
    }
}
