//! Persona responder: produces one debater's next utterance

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::{PersonaManager, PromptBuilder};
use crate::core::{Stance, TextGenerator};
use crate::features::debate::Utterance;

#[derive(Clone)]
pub struct PersonaResponder {
    personas: PersonaManager,
    generator: Arc<dyn TextGenerator>,
}

impl PersonaResponder {
    pub fn new(personas: PersonaManager, generator: Arc<dyn TextGenerator>) -> Self {
        Self { personas, generator }
    }

    /// Generate the next argument for `stance`.
    ///
    /// `history` is read only; appending the result is the caller's job.
    /// The generated text is returned verbatim.
    pub async fn respond(&self, stance: Stance, topic: &str, history: &[Utterance]) -> Result<String> {
        let persona = self.personas.get_persona(stance);
        let builder = PromptBuilder::new(persona, topic).with_history(history);

        debug!(
            "{} ({}) generating {} with {} prior turns",
            persona.name,
            stance,
            if builder.is_opening() { "opening argument" } else { "rebuttal" },
            history.len()
        );

        let messages = builder.build();
        self.generator.generate(&messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChatMessage, ChatRole};
    use crate::test_support::ScriptedGenerator;

    #[tokio::test]
    async fn test_respond_returns_text_verbatim() {
        let generator = Arc::new(ScriptedGenerator::new(vec!["  Teachers matter.\n"]));
        let responder = PersonaResponder::new(PersonaManager::new(), generator.clone());

        let text = responder.respond(Stance::For, "topic", &[]).await.unwrap();

        assert_eq!(text, "  Teachers matter.\n");
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_respond_sends_history_as_context() {
        let generator = Arc::new(ScriptedGenerator::new(vec!["rebuttal"]));
        let responder = PersonaResponder::new(PersonaManager::new(), generator.clone());
        let history = vec![Utterance::new(Stance::For, "opening", 1)];

        responder.respond(Stance::Against, "topic", &history).await.unwrap();

        let calls = generator.calls();
        let messages: &[ChatMessage] = &calls[0];
        assert_eq!(messages.len(), 3);
        assert!(messages[0].content.contains("argues against the topic"));
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[1].content, "opening");
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_respond_propagates_generator_error() {
        let generator = Arc::new(ScriptedGenerator::failing_at(1));
        let responder = PersonaResponder::new(PersonaManager::new(), generator);

        let err = responder.respond(Stance::For, "topic", &[]).await.unwrap_err();
        assert!(err.to_string().contains("scripted failure"));
    }
}
