//! Chat transcripts and summaries.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One utterance in a chat, attributed to the persona that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// Persona name of the speaker.
    pub speaker: String,
    /// What was said.
    pub content: String,
    /// When the entry was recorded.
    pub sent_at: DateTime<Utc>,
}

impl TranscriptEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

/// The result of a completed chat: the full transcript plus its summary.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    /// Every message exchanged, in order, starting with the opener.
    pub transcript: Vec<TranscriptEntry>,
    /// Summary per the requested [`SummaryMethod`].
    pub summary: String,
}

/// How a finished chat is condensed into a single summary string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryMethod {
    /// The content of the last transcript entry (empty string if none).
    #[default]
    LastMessage,
    /// An extra LLM call over the transcript with the given instruction
    /// appended as a trailing system message.
    ReflectionWithLlm {
        /// Instruction for the summarizing call.
        prompt: &'static str,
    },
}
