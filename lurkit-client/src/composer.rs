use crate::api::Error;
use crate::format::{self, Format};

/// Whether a composer creates top-level comments or replies. Picks the
/// user-facing failure message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposerKind {
    Comment,
    Reply,
}

impl ComposerKind {
    fn failure_message(&self) -> &'static str {
        match self {
            ComposerKind::Comment => "Failed to add comment. Please try again.",
            ComposerKind::Reply => "Failed to add reply. Please try again.",
        }
    }
}

/// Per-instance submission state of one comment form.
///
/// Idle -> Submitting on [`Composer::begin_submit`], back to Idle on
/// [`Composer::finish_submit`]. At most one submission is in flight per
/// instance; every open reply form is its own instance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Composer {
    kind: ComposerKind,
    buffer: String,
    submitting: bool,
    error: Option<&'static str>,
}

impl Composer {
    pub fn new(kind: ComposerKind) -> Composer {
        Composer {
            kind,
            buffer: String::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, buffer: String) {
        self.buffer = buffer;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The failure message to surface, if the last submission failed.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.buffer.trim().is_empty()
    }

    /// Transition to Submitting and hand back the content to send, or `None`
    /// when the buffer is blank or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.buffer.clone())
    }

    /// Transition back to Idle. Success clears the buffer; failure keeps it
    /// so the user does not lose typed text, and surfaces a fixed message.
    pub fn finish_submit(&mut self, result: Result<(), Error>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.buffer.clear();
                self.error = None;
            }
            Err(_) => {
                self.error = Some(self.kind.failure_message());
            }
        }
    }

    /// Apply a toolbar format to the byte range `[start, end)` of the buffer
    /// and return the byte index the caret should collapse to.
    pub fn apply_format(&mut self, format: Format, start: usize, end: usize) -> usize {
        let (buffer, caret) = format::splice(&self.buffer, start, end, format);
        self.buffer = buffer;
        caret
    }
}
