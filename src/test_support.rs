//! Test doubles shared by unit tests across modules.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

use crate::core::{ChatMessage, TextGenerator};

/// Fake generator that replays canned responses and records every request.
///
/// Once the script runs out it answers `"turn N"` for the N-th call.
pub struct ScriptedGenerator {
    responses: Vec<String>,
    fail_on: Option<usize>,
    delay_on: Option<(usize, Duration)>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: responses.into_iter().map(String::from).collect(),
            fail_on: None,
            delay_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::new(Vec::new())
    }

    /// Fails on the `call`-th request (1-based)
    pub fn failing_at(call: usize) -> Self {
        Self::echo().with_failure_at(call)
    }

    pub fn with_failure_at(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    /// Sleeps for `delay` before answering the `call`-th request
    pub fn with_delay_on(mut self, call: usize, delay: Duration) -> Self {
        self.delay_on = Some((call, delay));
        self
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(messages.to_vec());
            calls.len()
        };

        if let Some((slow_call, delay)) = self.delay_on {
            if slow_call == call {
                tokio::time::sleep(delay).await;
            }
        }

        if self.fail_on == Some(call) {
            return Err(anyhow!("scripted failure on call {call}"));
        }

        Ok(self
            .responses
            .get(call - 1)
            .cloned()
            .unwrap_or_else(|| format!("turn {call}")))
    }
}
