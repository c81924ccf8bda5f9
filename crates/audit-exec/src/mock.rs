//! Scripted command runner for tests
//!
//! A regular module rather than a `#[cfg(test)]` one so other crates'
//! tests can drive pipeline code without touching a real process.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::runner::{CommandOutput, CommandRunner};
use crate::{ExecError, Result};

/// One invocation observed by a [`ScriptedRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

/// Runner that replays canned outputs in order and records every call.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<CommandOutput>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a zero-exit response with the given combined output.
    pub fn push_success(&self, text: &str) {
        self.push_response(text, 0);
    }

    /// Queue a non-zero-exit response with the given combined output.
    pub fn push_failure(&self, text: &str, code: i32) {
        self.push_response(text, code);
    }

    fn push_response(&self, text: &str, code: i32) {
        self.responses
            .lock()
            .expect("responses mutex poisoned")
            .push_back(CommandOutput {
                text: text.to_string(),
                code: Some(code),
            });
    }

    /// Every invocation made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    /// Whether nothing was ever invoked.
    pub fn untouched(&self) -> bool {
        self.calls().is_empty()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(RecordedCall {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            });
        self.responses
            .lock()
            .expect("responses mutex poisoned")
            .pop_front()
            .ok_or_else(|| ExecError::Unscripted {
                program: program.to_string(),
            })
    }
}
