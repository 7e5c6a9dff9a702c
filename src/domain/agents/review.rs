//! The fixed nested review plan.
//!
//! When the critic receives a draft from the writer, it does not reply from
//! its own prompt alone. It first runs this plan: three sub-chats, one per
//! specialist reviewer, each seeded with the draft and the summaries of the
//! steps before it. The meta-reviewer's verdict becomes the critic's reply.

use super::chat::SummaryMethod;
use super::persona::{personas, Persona};

/// Instruction used to summarize a specialist review as a compact JSON object.
const SEO_SUMMARY_PROMPT: &str = "Return review into as JSON object only:{'Reviewer': '', 'Review': ''}. Here Reviewer should be your role";

/// Same shape, without the role reminder.
const COMPLIANCE_SUMMARY_PROMPT: &str =
    "Return review into as JSON object only:{'Reviewer': '', 'Review': ''}.";

/// Opening line of the final aggregation step.
const META_REVIEW_TASK: &str =
    "Aggregate feedback from all reviewers and give final suggestions on the writing.";

/// One step of the nested review sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewStep {
    /// The persona conducting this review.
    pub reviewer: Persona,
    /// How the sub-chat is opened.
    pub opening: OpeningMessage,
    /// Summary method for the sub-chat, or `None` for the default
    /// ([`SummaryMethod::LastMessage`]).
    pub summary_method: Option<SummaryMethod>,
    /// Round trips allowed in the sub-chat.
    pub max_turns: u32,
}

/// How a review sub-chat's first message is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpeningMessage {
    /// Ask the reviewer to look at the most recent content of the outer chat.
    ReviewLastContent,
    /// A fixed instruction.
    Static(&'static str),
}

impl OpeningMessage {
    /// Renders the opening for a given outer-chat content.
    pub fn render(&self, last_content: &str) -> String {
        match self {
            OpeningMessage::ReviewLastContent => {
                format!("Review the following content.\n\n{last_content}")
            }
            OpeningMessage::Static(text) => (*text).to_string(),
        }
    }
}

/// The review sequence: SEO, then compliance, then the meta-review.
///
/// The first two steps condense their findings to JSON via a reflection call;
/// the meta step's own reply is the final word and needs no reflection.
pub fn review_plan() -> Vec<ReviewStep> {
    vec![
        ReviewStep {
            reviewer: personas::seo_reviewer(),
            opening: OpeningMessage::ReviewLastContent,
            summary_method: Some(SummaryMethod::ReflectionWithLlm {
                prompt: SEO_SUMMARY_PROMPT,
            }),
            max_turns: 1,
        },
        ReviewStep {
            reviewer: personas::compliance_reviewer(),
            opening: OpeningMessage::ReviewLastContent,
            summary_method: Some(SummaryMethod::ReflectionWithLlm {
                prompt: COMPLIANCE_SUMMARY_PROMPT,
            }),
            max_turns: 1,
        },
        ReviewStep {
            reviewer: personas::meta_reviewer(),
            opening: OpeningMessage::Static(META_REVIEW_TASK),
            summary_method: None,
            max_turns: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_three_steps_in_order() {
        let plan = review_plan();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].reviewer.name, "SEO-Reviewer");
        assert_eq!(plan[1].reviewer.name, "Compliance-Reviewer");
        assert_eq!(plan[2].reviewer.name, "Meta-Reviewer");
    }

    #[test]
    fn specialist_steps_summarize_with_llm() {
        let plan = review_plan();
        assert!(matches!(
            plan[0].summary_method,
            Some(SummaryMethod::ReflectionWithLlm { .. })
        ));
        assert!(matches!(
            plan[1].summary_method,
            Some(SummaryMethod::ReflectionWithLlm { .. })
        ));
        assert_eq!(plan[2].summary_method, None);
    }

    #[test]
    fn every_step_is_a_single_round_trip() {
        for step in review_plan() {
            assert_eq!(step.max_turns, 1);
        }
    }

    #[test]
    fn specialist_steps_review_the_latest_content() {
        let plan = review_plan();
        assert_eq!(plan[0].opening, OpeningMessage::ReviewLastContent);
        assert_eq!(plan[1].opening, OpeningMessage::ReviewLastContent);
        assert!(matches!(plan[2].opening, OpeningMessage::Static(_)));
    }

    #[test]
    fn review_last_content_prefixes_instruction() {
        let opening = OpeningMessage::ReviewLastContent.render("The draft text.");
        assert_eq!(opening, "Review the following content.\n\nThe draft text.");
    }

    #[test]
    fn static_opening_ignores_outer_content() {
        let opening = OpeningMessage::Static(META_REVIEW_TASK).render("ignored");
        assert_eq!(
            opening,
            "Aggregate feedback from all reviewers and give final suggestions on the writing."
        );
    }

    #[test]
    fn summary_prompts_request_json_objects() {
        let plan = review_plan();
        for step in &plan[..2] {
            let Some(SummaryMethod::ReflectionWithLlm { prompt }) = step.summary_method.clone()
            else {
                panic!("specialist step missing reflection summary");
            };
            assert!(prompt.contains("JSON object"));
            assert!(prompt.contains("'Reviewer'"));
        }
    }
}
