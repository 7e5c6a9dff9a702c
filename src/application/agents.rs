//! Chat agents - the conversational runtime that drives personas.
//!
//! A [`ChatAgent`] binds a persona to an AI provider and knows how to speak in
//! three settings:
//!
//! - `generate_reply` - one standalone completion from a message list
//! - `initiate_chat` - a two-party chat with another agent, bounded by
//!   `max_turns` round trips
//! - nested review - when an agent with a registered plan replies to its
//!   trigger, it first runs the plan's sub-chats and answers with the final
//!   step's summary
//!
//! Sub-chats run through a separate terminal loop (`exchange`) in which nested
//! plans never fire, so reply generation cannot recurse.

use std::sync::Arc;

use tracing::debug;

use crate::domain::agents::{ChatOutcome, Persona, ReviewStep, SummaryMethod, TranscriptEntry};
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, MessageRole};

/// A persona wired to a provider, able to chat with other agents.
pub struct ChatAgent<P: ?Sized + AIProvider> {
    persona: Persona,
    provider: Arc<P>,
    temperature: f32,
    nested_plan: Option<NestedChatPlan>,
}

/// A review plan bound to the trigger that fires it.
struct NestedChatPlan {
    trigger: Persona,
    steps: Vec<ReviewStep>,
}

impl<P: ?Sized + AIProvider> ChatAgent<P> {
    /// Creates an agent for a persona. Temperature defaults to 0.0.
    pub fn new(persona: Persona, provider: Arc<P>) -> Self {
        Self {
            persona,
            provider,
            temperature: 0.0,
            nested_plan: None,
        }
    }

    /// Sets the sampling temperature used for every completion this agent
    /// makes, including nested reviews and reflection summaries.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Registers a nested review plan.
    ///
    /// Whenever this agent replies to a message sent by `trigger`, it runs
    /// the steps in order and replies with the last step's summary instead of
    /// answering from its own prompt.
    pub fn register_nested_chats(mut self, steps: Vec<ReviewStep>, trigger: Persona) -> Self {
        self.nested_plan = Some(NestedChatPlan { trigger, steps });
        self
    }

    /// The persona's name.
    pub fn name(&self) -> &'static str {
        self.persona.name
    }

    /// Checks an inbound message against this agent's termination rule.
    pub fn is_termination_message(&self, content: &str) -> bool {
        self.persona.is_termination_message(content)
    }

    /// Generates one standalone completion from the given messages, under
    /// this persona's system prompt.
    pub async fn generate_reply(&self, messages: &[Message]) -> Result<String, AIError> {
        let mut request = CompletionRequest::new()
            .with_system_prompt(self.persona.system_prompt)
            .with_temperature(self.temperature);
        for message in messages {
            request = request.with_message(message.role, message.content.as_str());
        }

        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }

    /// Runs a chat between this agent and `recipient`, opened with `message`.
    ///
    /// One turn is one round trip: a reply from the recipient, then (unless
    /// the turn budget or a termination rule ends the chat) a follow-up from
    /// this agent. The transcript always starts with the opening message, so
    /// `max_turns = 0` yields a transcript of just the opener.
    ///
    /// Termination rules apply to inbound content only: an agent that
    /// receives a terminating message does not reply, and the chat ends.
    pub async fn initiate_chat(
        &self,
        recipient: &ChatAgent<P>,
        message: &str,
        max_turns: u32,
        summary_method: SummaryMethod,
    ) -> Result<ChatOutcome, AIError> {
        debug!(
            initiator = self.name(),
            recipient = recipient.name(),
            max_turns,
            "Starting chat"
        );

        let mut transcript = vec![TranscriptEntry::new(self.name(), message)];

        if !recipient.is_termination_message(message) {
            for turn in 0..max_turns {
                let reply = recipient.reply_in_chat(self.name(), &transcript).await?;
                let initiator_stops = self.is_termination_message(&reply);
                transcript.push(TranscriptEntry::new(recipient.name(), reply));
                if initiator_stops || turn + 1 == max_turns {
                    break;
                }

                let followup = self.reply_in_chat(recipient.name(), &transcript).await?;
                let recipient_stops = recipient.is_termination_message(&followup);
                transcript.push(TranscriptEntry::new(self.name(), followup));
                if recipient_stops {
                    break;
                }
            }
        }

        let summary = self.summarize(&transcript, &summary_method).await?;
        Ok(ChatOutcome {
            transcript,
            summary,
        })
    }

    /// Produces this agent's next message in an ongoing chat.
    ///
    /// Dispatches to the nested plan when the last message came from the
    /// plan's trigger; otherwise answers from the persona prompt.
    async fn reply_in_chat(
        &self,
        sender_name: &str,
        transcript: &[TranscriptEntry],
    ) -> Result<String, AIError> {
        if let Some(ref plan) = self.nested_plan {
            if plan.trigger.name == sender_name {
                return self.nested_reply(plan, transcript).await;
            }
        }
        self.plain_reply(transcript).await
    }

    /// One completion over the transcript, seen from this agent's side:
    /// own messages become assistant turns, everything else user turns.
    async fn plain_reply(&self, transcript: &[TranscriptEntry]) -> Result<String, AIError> {
        let mut request = CompletionRequest::new()
            .with_system_prompt(self.persona.system_prompt)
            .with_temperature(self.temperature);
        for entry in transcript {
            request = request.with_message(self.role_of(&entry.speaker), entry.content.as_str());
        }

        let response = self.provider.complete(request).await?;
        Ok(response.content)
    }

    /// Runs the nested plan and returns the final step's summary.
    ///
    /// Each step opens a fresh sub-chat with its reviewer. Summaries of
    /// earlier steps are carried into later openings as context, so the
    /// final step sees everything that came before it. An empty plan yields
    /// an empty reply.
    async fn nested_reply(
        &self,
        plan: &NestedChatPlan,
        outer_transcript: &[TranscriptEntry],
    ) -> Result<String, AIError> {
        let last_content = outer_transcript
            .last()
            .map(|entry| entry.content.as_str())
            .unwrap_or_default();

        let mut carryover: Vec<String> = Vec::new();
        let mut reply = String::new();

        for step in &plan.steps {
            debug!(reviewer = step.reviewer.name, "Running nested review step");

            let mut opening = step.opening.render(last_content);
            if !carryover.is_empty() {
                opening.push_str("\nContext: \n");
                opening.push_str(&carryover.join("\n"));
            }

            let reviewer = ChatAgent::new(step.reviewer.clone(), Arc::clone(&self.provider))
                .with_temperature(self.temperature);

            let transcript = self.exchange(&reviewer, &opening, step.max_turns).await?;
            let summary_method = step.summary_method.clone().unwrap_or_default();
            let summary = self.summarize(&transcript, &summary_method).await?;

            carryover.push(summary.clone());
            reply = summary;
        }

        Ok(reply)
    }

    /// Terminal two-party loop used for nested sub-chats.
    ///
    /// Same shape as [`initiate_chat`](Self::initiate_chat), but both sides
    /// answer from their persona prompts alone. Nested plans never fire here.
    async fn exchange(
        &self,
        recipient: &ChatAgent<P>,
        message: &str,
        max_turns: u32,
    ) -> Result<Vec<TranscriptEntry>, AIError> {
        let mut transcript = vec![TranscriptEntry::new(self.name(), message)];

        if !recipient.is_termination_message(message) {
            for turn in 0..max_turns {
                let reply = recipient.plain_reply(&transcript).await?;
                let initiator_stops = self.is_termination_message(&reply);
                transcript.push(TranscriptEntry::new(recipient.name(), reply));
                if initiator_stops || turn + 1 == max_turns {
                    break;
                }

                let followup = self.plain_reply(&transcript).await?;
                let recipient_stops = recipient.is_termination_message(&followup);
                transcript.push(TranscriptEntry::new(self.name(), followup));
                if recipient_stops {
                    break;
                }
            }
        }

        Ok(transcript)
    }

    /// Condenses a finished transcript into a summary string.
    ///
    /// `ReflectionWithLlm` makes one more completion over the transcript with
    /// the summary instruction appended as a trailing system message and no
    /// leading system prompt.
    async fn summarize(
        &self,
        transcript: &[TranscriptEntry],
        method: &SummaryMethod,
    ) -> Result<String, AIError> {
        match method {
            SummaryMethod::LastMessage => Ok(transcript
                .last()
                .map(|entry| entry.content.clone())
                .unwrap_or_default()),
            SummaryMethod::ReflectionWithLlm { prompt } => {
                let mut request = CompletionRequest::new().with_temperature(self.temperature);
                for entry in transcript {
                    request =
                        request.with_message(self.role_of(&entry.speaker), entry.content.as_str());
                }
                request = request.with_message(MessageRole::System, *prompt);

                let response = self.provider.complete(request).await?;
                Ok(response.content)
            }
        }
    }

    /// Maps a transcript speaker to a wire role from this agent's side.
    fn role_of(&self, speaker: &str) -> MessageRole {
        if speaker == self.persona.name {
            MessageRole::Assistant
        } else {
            MessageRole::User
        }
    }
}
