//! # Feature: Debate Personas
//!
//! The two debaters, one per stance. Each persona's instruction text is loaded
//! from prompt/*.md at compile time and can be overridden from configuration.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with FOR and AGAINST personas

use serde::{Deserialize, Serialize};

use crate::core::{Config, Stance};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub stance: Stance,
    pub system_prompt: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct PersonaManager {
    for_persona: Persona,
    against_persona: Persona,
}

impl Default for PersonaManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaManager {
    pub fn new() -> Self {
        PersonaManager {
            for_persona: Persona {
                name: "Proponent".to_string(),
                stance: Stance::For,
                system_prompt: include_str!("../../../prompt/for.md").trim_end().to_string(),
                description: "A persuasive debater who always argues in favor of the topic".to_string(),
            },
            against_persona: Persona {
                name: "Opponent".to_string(),
                stance: Stance::Against,
                system_prompt: include_str!("../../../prompt/against.md").trim_end().to_string(),
                description: "A persuasive debater who always argues against the topic".to_string(),
            },
        }
    }

    /// Built-in personas with any prompt overrides from the config applied
    pub fn from_config(config: &Config) -> Self {
        let mut manager = Self::new();
        if let Some(prompt) = &config.for_prompt {
            manager.set_system_prompt(Stance::For, prompt);
        }
        if let Some(prompt) = &config.against_prompt {
            manager.set_system_prompt(Stance::Against, prompt);
        }
        manager
    }

    pub fn get_persona(&self, stance: Stance) -> &Persona {
        match stance {
            Stance::For => &self.for_persona,
            Stance::Against => &self.against_persona,
        }
    }

    pub fn set_system_prompt(&mut self, stance: Stance, prompt: &str) {
        let persona = match stance {
            Stance::For => &mut self.for_persona,
            Stance::Against => &mut self.against_persona,
        };
        persona.system_prompt = prompt.trim().to_string();
    }
}
