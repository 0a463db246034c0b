//! mnemon-speech — text-to-speech shell-outs for quiz prompts.
//!
//! Speech is strictly best-effort: every quiz runs fine without audio,
//! so callers log failures and keep going rather than aborting.

use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Something that can read a prompt out loud.
pub trait Speaker {
    /// Speak `text`, blocking until the utterance ends.
    fn say(&self, text: &str) -> Result<()>;
}

/// Speaks through an external command such as `say` or `espeak`.
/// The text is appended as the command's final argument.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The macOS `say` binary, the historical default.
    pub fn system_default() -> Self {
        Self::new("say", Vec::new())
    }
}

impl Speaker for CommandSpeaker {
    fn say(&self, text: &str) -> Result<()> {
        tracing::debug!(program = %self.program, "speaking {} chars", text.len());
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("failed to run speech command {:?}", self.program))?;
        anyhow::ensure!(
            status.success(),
            "speech command {:?} exited with {status}",
            self.program
        );
        Ok(())
    }
}

/// Discards all speech. Used when `--say` is off and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn say(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}
