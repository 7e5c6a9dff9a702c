//! RunTaskHandler - Run a writing task through the full reflection workflow

use std::sync::Arc;

use crate::application::agents::ChatAgent;
use crate::domain::agents::{personas, review_plan, ChatOutcome, SummaryMethod};
use crate::ports::{AIError, AIProvider, Message};

/// Round trips between critic and writer in the outer chat. The first turn
/// yields the writer's draft and the critic's reviewed feedback; the second
/// yields the revision.
const OUTER_CHAT_TURNS: u32 = 2;

/// Command to run a writing task
#[derive(Debug, Clone)]
pub struct RunTaskCommand {
    pub task: String,
}

/// Result of a completed workflow
#[derive(Debug, Clone)]
pub struct RunTaskResult {
    /// The writer's standalone first draft.
    pub draft: String,
    /// The critic-driven chat that produced the revision.
    pub review: ChatOutcome,
}

/// Error type for running tasks
#[derive(Debug, Clone)]
pub enum RunTaskError {
    /// Task was empty or whitespace
    EmptyTask,
    /// AI Provider error
    Provider(String),
}

impl std::fmt::Display for RunTaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunTaskError::EmptyTask => write!(f, "Task must not be empty"),
            RunTaskError::Provider(err) => write!(f, "AI Provider error: {}", err),
        }
    }
}

impl std::error::Error for RunTaskError {}

impl From<AIError> for RunTaskError {
    fn from(err: AIError) -> Self {
        RunTaskError::Provider(err.to_string())
    }
}

/// Handler for running writing tasks
pub struct RunTaskHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    temperature: f32,
}

impl<P: ?Sized + AIProvider> RunTaskHandler<P> {
    pub fn new(ai_provider: Arc<P>, temperature: f32) -> Self {
        Self {
            ai_provider,
            temperature,
        }
    }

    pub async fn handle(&self, cmd: RunTaskCommand) -> Result<RunTaskResult, RunTaskError> {
        // 1. Reject empty tasks before any provider work
        let task = cmd.task.trim();
        if task.is_empty() {
            return Err(RunTaskError::EmptyTask);
        }

        tracing::info!(task_len = task.len(), "Running writing task");

        // 2. Writer produces the standalone first draft
        let writer = ChatAgent::new(personas::writer(), Arc::clone(&self.ai_provider))
            .with_temperature(self.temperature);
        let draft = writer.generate_reply(&[Message::user(task)]).await?;

        // 3. Critic opens the review chat on the same task; its reply to the
        //    writer runs the nested review plan
        let critic = ChatAgent::new(personas::critic(), Arc::clone(&self.ai_provider))
            .with_temperature(self.temperature)
            .register_nested_chats(review_plan(), personas::writer());

        let review = critic
            .initiate_chat(&writer, task, OUTER_CHAT_TURNS, SummaryMethod::LastMessage)
            .await?;

        tracing::info!(
            transcript_len = review.transcript.len(),
            "Writing task complete"
        );

        Ok(RunTaskResult { draft, review })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    /// Mock loaded with one response per provider call the workflow makes.
    fn full_workflow_provider() -> MockAIProvider {
        MockAIProvider::new()
            .with_response("The standalone draft")
            .with_response("The chat draft")
            .with_response("SEO Reviewer: add keywords")
            .with_response("{'Reviewer': 'SEO Reviewer', 'Review': 'add keywords'}")
            .with_response("Compliance Reviewer: all clear")
            .with_response("{'Reviewer': 'Compliance Reviewer', 'Review': 'all clear'}")
            .with_response("Meta Reviewer: apply the SEO notes")
            .with_response("The revision")
    }

    fn handler(provider: &MockAIProvider) -> RunTaskHandler<MockAIProvider> {
        RunTaskHandler::new(Arc::new(provider.clone()), 0.0)
    }

    #[tokio::test]
    async fn test_empty_task_rejected_without_provider_calls() {
        let provider = MockAIProvider::new();

        let result = handler(&provider)
            .handle(RunTaskCommand {
                task: String::new(),
            })
            .await;

        assert!(matches!(result, Err(RunTaskError::EmptyTask)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_task_rejected() {
        let provider = MockAIProvider::new();

        let result = handler(&provider)
            .handle(RunTaskCommand {
                task: "   \n\t ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RunTaskError::EmptyTask)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_workflow_makes_eight_calls_in_order() {
        let provider = full_workflow_provider();

        let result = handler(&provider)
            .handle(RunTaskCommand {
                task: "Write about AI agents".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.draft, "The standalone draft");
        assert_eq!(result.review.summary, "The revision");
        assert_eq!(provider.call_count(), 8);

        // System prompts identify who made each call; reflection summaries
        // run without one.
        let prompts: Vec<Option<String>> = provider
            .get_calls()
            .iter()
            .map(|c| c.system_prompt.clone())
            .collect();
        assert_eq!(prompts[0].as_deref(), Some(personas::writer().system_prompt));
        assert_eq!(prompts[1].as_deref(), Some(personas::writer().system_prompt));
        assert_eq!(
            prompts[2].as_deref(),
            Some(personas::seo_reviewer().system_prompt)
        );
        assert_eq!(prompts[3], None);
        assert_eq!(
            prompts[4].as_deref(),
            Some(personas::compliance_reviewer().system_prompt)
        );
        assert_eq!(prompts[5], None);
        assert_eq!(
            prompts[6].as_deref(),
            Some(personas::meta_reviewer().system_prompt)
        );
        assert_eq!(prompts[7].as_deref(), Some(personas::writer().system_prompt));
    }

    #[tokio::test]
    async fn test_draft_and_chat_open_on_the_same_task() {
        let provider = full_workflow_provider();

        handler(&provider)
            .handle(RunTaskCommand {
                task: "  Write about AI agents  ".to_string(),
            })
            .await
            .unwrap();

        let calls = provider.get_calls();
        // Standalone draft call carries just the task, trimmed.
        assert_eq!(calls[0].messages.len(), 1);
        assert_eq!(calls[0].messages[0].content, "Write about AI agents");
        // The chat's first writer call opens on the same task.
        assert_eq!(calls[1].messages[0].content, "Write about AI agents");
    }

    #[tokio::test]
    async fn test_review_transcript_has_both_rounds() {
        let provider = full_workflow_provider();

        let result = handler(&provider)
            .handle(RunTaskCommand {
                task: "Write about AI agents".to_string(),
            })
            .await
            .unwrap();

        let speakers: Vec<&str> = result
            .review
            .transcript
            .iter()
            .map(|e| e.speaker.as_str())
            .collect();
        assert_eq!(speakers, vec!["Critic", "Writer", "Critic", "Writer"]);
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_provider_error() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "model not loaded".to_string(),
        });

        let result = handler(&provider)
            .handle(RunTaskCommand {
                task: "Write about AI agents".to_string(),
            })
            .await;

        match result {
            Err(RunTaskError::Provider(msg)) => assert!(msg.contains("model not loaded")),
            other => panic!("Expected provider error, got {:?}", other.map(|r| r.draft)),
        }
    }

    #[tokio::test]
    async fn test_failure_mid_workflow_stops_remaining_calls() {
        let provider = MockAIProvider::new()
            .with_response("The standalone draft")
            .with_response("The chat draft")
            .with_error(MockError::Timeout { timeout_secs: 120 });

        let result = handler(&provider)
            .handle(RunTaskCommand {
                task: "Write about AI agents".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RunTaskError::Provider(_))));
        assert_eq!(provider.call_count(), 3);
    }
}
