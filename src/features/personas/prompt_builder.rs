//! Per-turn message construction for a debater
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Opening vs rebuttal directives chosen from history state

use super::Persona;
use crate::core::ChatMessage;
use crate::features::debate::Utterance;

/// Directive sent on every turn after the first
pub const REBUTTAL_DIRECTIVE: &str =
    "Respond to your opponent's argument and strengthen your position.";

/// Builder for the message list sent to the generation service on one turn
///
/// Messages are, in order: the persona instruction with the topic, every prior
/// utterance as an assistant message, then the turn directive.
///
/// # Example
///
/// ```ignore
/// let messages = PromptBuilder::new(persona, "Should AI replace teachers?")
///     .with_history(&transcript)
///     .build();
/// ```
pub struct PromptBuilder<'a> {
    persona: &'a Persona,
    topic: &'a str,
    history: &'a [Utterance],
}

impl<'a> PromptBuilder<'a> {
    pub fn new(persona: &'a Persona, topic: &'a str) -> Self {
        Self { persona, topic, history: &[] }
    }

    pub fn with_history(mut self, history: &'a [Utterance]) -> Self {
        self.history = history;
        self
    }

    pub fn is_opening(&self) -> bool {
        self.history.is_empty()
    }

    pub fn system_prompt(&self) -> String {
        format!("{} The debate topic is: {}", self.persona.system_prompt, self.topic)
    }

    pub fn directive(&self) -> String {
        if self.is_opening() {
            format!(
                "Make your opening argument {}: {}",
                self.persona.stance.preposition(),
                self.topic
            )
        } else {
            REBUTTAL_DIRECTIVE.to_string()
        }
    }

    pub fn build(self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        messages.push(ChatMessage::system(self.system_prompt()));
        messages.extend(
            self.history
                .iter()
                .map(|utterance| ChatMessage::assistant(utterance.content.clone())),
        );
        messages.push(ChatMessage::user(self.directive()));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChatRole, Stance};
    use crate::features::personas::PersonaManager;

    const TOPIC: &str = "Should AI replace teachers?";

    #[test]
    fn test_opening_for() {
        let manager = PersonaManager::new();
        let messages = PromptBuilder::new(manager.get_persona(Stance::For), TOPIC).build();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert!(messages[0].content.ends_with("The debate topic is: Should AI replace teachers?"));
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(
            messages[1].content,
            "Make your opening argument in favor of: Should AI replace teachers?"
        );
    }

    #[test]
    fn test_opening_against() {
        let manager = PersonaManager::new();
        let builder = PromptBuilder::new(manager.get_persona(Stance::Against), TOPIC);
        assert_eq!(
            builder.directive(),
            "Make your opening argument against: Should AI replace teachers?"
        );
    }

    #[test]
    fn test_rebuttal_includes_history_in_order() {
        let manager = PersonaManager::new();
        let history = vec![
            Utterance::new(Stance::For, "first", 1),
            Utterance::new(Stance::Against, "second", 2),
        ];
        let messages = PromptBuilder::new(manager.get_persona(Stance::For), TOPIC)
            .with_history(&history)
            .build();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1], ChatMessage::assistant("first"));
        assert_eq!(messages[2], ChatMessage::assistant("second"));
        assert_eq!(messages[3], ChatMessage::user(REBUTTAL_DIRECTIVE));
    }
}
