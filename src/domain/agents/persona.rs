//! Agent personas for the writing desk.
//!
//! Each persona pairs a name with the system prompt that shapes its replies,
//! plus an optional termination rule. Prompts are fixed at compile time; the
//! desk always runs the same cast.

/// A named agent persona with its system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Display name, also used as the transcript speaker label.
    pub name: &'static str,
    /// System prompt sent with every completion this persona generates.
    pub system_prompt: &'static str,
    /// When this persona, as a chat initiator, stops the conversation.
    pub termination: TerminationRule,
}

impl Persona {
    /// Returns true if an inbound message satisfies this persona's
    /// termination rule.
    pub fn is_termination_message(&self, content: &str) -> bool {
        self.termination.matches(content)
    }
}

/// Rule deciding whether an inbound message ends a chat early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationRule {
    /// Never terminate early.
    None,
    /// Terminate when the message contains the marker anywhere.
    ContainsMarker(&'static str),
}

impl TerminationRule {
    /// Checks a message against the rule.
    pub fn matches(&self, content: &str) -> bool {
        match self {
            TerminationRule::None => false,
            TerminationRule::ContainsMarker(marker) => content.contains(marker),
        }
    }
}

/// The five personas of the writing desk.
pub mod personas {
    use super::{Persona, TerminationRule};

    /// The writer drafts and revises the article.
    pub fn writer() -> Persona {
        Persona {
            name: "Writer",
            system_prompt: "You are a writer. You write engaging and concise articles (with title) on given topics. You must polish your writing based on the feedback you receive and give a refined version. Only return your final work without additional comments.",
            termination: TerminationRule::None,
        }
    }

    /// The critic reviews drafts and can end the exchange with TERMINATE.
    pub fn critic() -> Persona {
        Persona {
            name: "Critic",
            system_prompt: "You are a critic. You review the work of the writer and provide constructive feedback to help improve the quality of the content.",
            termination: TerminationRule::ContainsMarker("TERMINATE"),
        }
    }

    /// First specialist reviewer: search engine optimization.
    pub fn seo_reviewer() -> Persona {
        Persona {
            name: "SEO-Reviewer",
            system_prompt: "You are an SEO reviewer, known for your ability to optimize content for search engines, ensuring that it ranks well and attracts organic traffic. Make sure your suggestion is concise (within 3 bullet points), concrete and to the point. Begin the review by stating your role, like 'SEO Reviewer:'.",
            termination: TerminationRule::None,
        }
    }

    /// Second specialist reviewer: industry and platform compliance.
    pub fn compliance_reviewer() -> Persona {
        Persona {
            name: "Compliance-Reviewer",
            system_prompt: "You are a compliance reviewer. You ensure that the content adheres to the guidelines and regulations of the industry and Google algorithms. Begin the review by stating your role, like 'Compliance Reviewer:'.",
            termination: TerminationRule::None,
        }
    }

    /// Final reviewer: aggregates the specialist feedback.
    pub fn meta_reviewer() -> Persona {
        Persona {
            name: "Meta-Reviewer",
            system_prompt: "You are a meta-reviewer. You provide a final review of the content, ensuring that all the feedback from the previous reviewers has been incorporated. Begin the review by stating your role, like 'Meta Reviewer:'.",
            termination: TerminationRule::None,
        }
    }

    /// All personas in workflow order.
    pub fn all() -> Vec<Persona> {
        vec![
            writer(),
            critic(),
            seo_reviewer(),
            compliance_reviewer(),
            meta_reviewer(),
        ]
    }

    /// Looks up a persona by name.
    pub fn get(name: &str) -> Option<Persona> {
        all().into_iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_personas_have_name_and_prompt() {
        let cast = personas::all();
        assert_eq!(cast.len(), 5);
        for persona in &cast {
            assert!(!persona.name.is_empty());
            assert!(!persona.system_prompt.is_empty());
        }
    }

    #[test]
    fn persona_names_are_distinct() {
        let cast = personas::all();
        for (i, a) in cast.iter().enumerate() {
            for b in &cast[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn cast_order_is_stable() {
        let names: Vec<&str> = personas::all().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Writer",
                "Critic",
                "SEO-Reviewer",
                "Compliance-Reviewer",
                "Meta-Reviewer"
            ]
        );
    }

    #[test]
    fn only_critic_terminates() {
        assert_eq!(
            personas::critic().termination,
            TerminationRule::ContainsMarker("TERMINATE")
        );
        assert_eq!(personas::writer().termination, TerminationRule::None);
        assert_eq!(personas::seo_reviewer().termination, TerminationRule::None);
        assert_eq!(personas::compliance_reviewer().termination, TerminationRule::None);
        assert_eq!(personas::meta_reviewer().termination, TerminationRule::None);
    }

    #[test]
    fn termination_marker_matches_anywhere() {
        let critic = personas::critic();
        assert!(critic.is_termination_message("TERMINATE"));
        assert!(critic.is_termination_message("Looks great. TERMINATE"));
        assert!(critic.is_termination_message("mid TERMINATE sentence"));
        assert!(!critic.is_termination_message("terminate"));
        assert!(!critic.is_termination_message("Needs another pass."));
    }

    #[test]
    fn writer_never_terminates() {
        let writer = personas::writer();
        assert!(!writer.is_termination_message("TERMINATE"));
    }

    #[test]
    fn get_finds_personas_by_name() {
        assert_eq!(personas::get("Writer"), Some(personas::writer()));
        assert_eq!(personas::get("SEO-Reviewer"), Some(personas::seo_reviewer()));
        assert_eq!(personas::get("Unknown"), None);
    }

    #[test]
    fn reviewer_prompts_request_role_labels() {
        assert!(personas::seo_reviewer().system_prompt.contains("'SEO Reviewer:'"));
        assert!(personas::compliance_reviewer()
            .system_prompt
            .contains("'Compliance Reviewer:'"));
        assert!(personas::meta_reviewer().system_prompt.contains("'Meta Reviewer:'"));
    }
}
