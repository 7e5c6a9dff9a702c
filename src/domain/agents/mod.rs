//! Agents domain - personas, transcripts, and the nested review plan.
//!
//! Pure data: no IO, no provider calls. The application layer drives these
//! types through the `AIProvider` port.

mod chat;
mod persona;
mod review;

pub use chat::{ChatOutcome, SummaryMethod, TranscriptEntry};
pub use persona::{personas, Persona, TerminationRule};
pub use review::{review_plan, OpeningMessage, ReviewStep};
