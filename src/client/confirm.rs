// ABOUTME: Blocking yes/no confirmation used before destructive client actions
// ABOUTME: Provides a stdin-backed prompt and a fixed-answer implementation for scripted use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question
pub trait Confirm: Send + Sync {
    /// `true` when the user agreed
    fn confirm(&self, prompt: &str) -> bool;
}

/// Prompt on stderr and read the answer from stdin (`y`/`yes`, anything else is no)
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

/// Always gives the same answer (`--yes` flags, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
