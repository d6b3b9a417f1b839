//! Action-phrase dispatch: the one-way channel from template interactions to
//! the host conversational agent.
//!
//! Templates call [`Dispatcher::dispatch`] with the exact phrase carried by
//! the activated sub-element; the dispatcher plays the click cue first, then
//! notifies, and swallows failures from both collaborators. Local-state
//! interactions that must not notify (tab switches, collapses) use
//! [`Dispatcher::click`] for feedback only. There is no retry, no
//! deduplication and no rate limiting anywhere in this path.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Host collaborator responsible for conversational routing.
pub trait ConversationSink: Send + Sync {
    fn notify(&self, action_phrase: &str) -> Result<()>;
}

/// Host collaborator responsible for interaction feedback.
pub trait FeedbackCue: Send + Sync {
    fn play_click(&self) -> Result<()>;
}

/// Injected service object handed to every template activation.
#[derive(Clone)]
pub struct Dispatcher {
    sink: Arc<dyn ConversationSink>,
    cue: Arc<dyn FeedbackCue>,
}

impl Dispatcher {
    pub fn new(sink: Arc<dyn ConversationSink>, cue: Arc<dyn FeedbackCue>) -> Self {
        Self { sink, cue }
    }

    /// Click cue, then notify, in that order, always.
    pub fn dispatch(&self, action_phrase: &str) {
        self.click();
        if let Err(err) = self.sink.notify(action_phrase) {
            warn!(target: "dispatch", "notify failed: {err:#}");
        }
    }

    /// Feedback cue only, for interactions that stay local.
    pub fn click(&self) {
        if let Err(err) = self.cue.play_click() {
            debug!(target: "feedback", "click cue failed: {err:#}");
        }
    }
}

/// One notified phrase, timestamped for display.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub at: DateTime<Utc>,
    pub phrase: String,
}

/// Shared in-process record of notified phrases, shown in the preview pane.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl Transcript {
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, phrase: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(TranscriptEntry {
                at: Utc::now(),
                phrase: phrase.to_string(),
            });
        }
    }
}

/// Sink used by the preview UI: records phrases and logs them.
pub struct TranscriptSink {
    transcript: Transcript,
}

impl TranscriptSink {
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }
}

impl ConversationSink for TranscriptSink {
    fn notify(&self, action_phrase: &str) -> Result<()> {
        info!(target: "dispatch", "notify: {action_phrase}");
        self.transcript.push(action_phrase);
        Ok(())
    }
}

/// Sink for headless runs: one phrase per stdout line.
pub struct StdoutSink;

impl ConversationSink for StdoutSink {
    fn notify(&self, action_phrase: &str) -> Result<()> {
        let mut out = std::io::stdout();
        writeln!(out, "{action_phrase}")?;
        Ok(())
    }
}

/// Terminal BEL cue with a runtime mute toggle. Fire-and-forget: the write
/// is not awaited and overlapping cues from rapid clicks are fine.
#[derive(Debug, Default)]
pub struct TerminalBell {
    muted: AtomicBool,
}

impl TerminalBell {
    pub fn new(muted: bool) -> Self {
        Self {
            muted: AtomicBool::new(muted),
        }
    }

    pub fn muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    pub fn toggle(&self) -> bool {
        !self.muted.fetch_xor(true, Ordering::Relaxed)
    }
}

impl FeedbackCue for TerminalBell {
    fn play_click(&self) -> Result<()> {
        if self.muted() {
            return Ok(());
        }
        let mut out = std::io::stdout();
        out.write_all(b"\x07")?;
        out.flush()?;
        Ok(())
    }
}

/// No-op cue for headless runs.
pub struct SilentCue;

impl FeedbackCue for SilentCue {
    fn play_click(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;
    impl ConversationSink for FailingSink {
        fn notify(&self, _: &str) -> Result<()> {
            anyhow::bail!("channel down")
        }
    }

    struct FailingCue;
    impl FeedbackCue for FailingCue {
        fn play_click(&self) -> Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    #[test]
    fn collaborator_failures_never_escape() {
        let dispatcher = Dispatcher::new(Arc::new(FailingSink), Arc::new(FailingCue));
        dispatcher.dispatch("show me pricing");
        dispatcher.click();
    }

    #[test]
    fn transcript_records_exact_phrases() {
        let transcript = Transcript::default();
        let dispatcher = Dispatcher::new(
            Arc::new(TranscriptSink::new(transcript.clone())),
            Arc::new(SilentCue),
        );
        dispatcher.dispatch("  spaced  phrase  ");
        let entries = transcript.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].phrase, "  spaced  phrase  ");
    }

    #[test]
    fn bell_toggle_flips_mute() {
        let bell = TerminalBell::new(false);
        assert!(!bell.muted());
        assert!(bell.toggle());
        assert!(bell.muted());
        assert!(!bell.toggle());
    }
}
