//! Append-only conversation transcript.
//!
//! Entries are recorded in event order and never mutated; rendering is a
//! separate projection that can be repeated at any time. The transcript lives
//! in memory only and is discarded with the session.

use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Speaker::User => "you",
            Speaker::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TranscriptEntry {
    pub(crate) speaker: Speaker,
    pub(crate) text: String,
    pub(crate) ts_utc: i64,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub(crate) fn new() -> Self {
        Transcript::default()
    }

    pub(crate) fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker,
            text: text.into(),
            ts_utc: Utc::now().timestamp(),
        });
    }

    pub(crate) fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project the transcript to display text, one speaker-tagged line block
    /// per entry, in append order. Does not mutate; rendering twice yields
    /// the same string.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry.speaker.label());
            out.push_str("> ");
            out.push_str(&entry.text);
            out.push('\n');
        }
        out
    }
}
