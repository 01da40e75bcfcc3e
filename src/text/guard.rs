//! All-or-nothing edits with rollback on limit violation.
//!
//! Every content mutation runs through [`EditGuard::apply`]: the buffer is
//! snapshotted (a rope clone shares its nodes), the edit runs, the whole
//! buffer is rewrapped and the result is validated. A failed validation
//! restores the snapshot, so the buffer is byte-identical to before.
//!
//! A limit only rejects an edit that makes things worse. Content that already
//! exceeds a limit tightened after the fact can still be shrunk or edited in
//! ways that do not grow past the limit.

use crate::error::{Error, Rejection, Result};
use crate::event::{LogLevel, emit_event, emit_log_with};
use crate::text::buffer::Buffer;
use crate::text::wrap::{Layout, wrap};
use crate::unicode::WidthMethod;

/// Size limits enforced on every committed state. Zero means unlimited for
/// `char_limit` and `max_lines`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub width: usize,
    pub char_limit: usize,
    pub max_lines: usize,
}

impl Limits {
    /// Characters an edit may still add to a buffer of `current` characters.
    #[must_use]
    pub fn char_budget(&self, current: usize) -> Option<usize> {
        (self.char_limit > 0).then(|| self.char_limit.saturating_sub(current))
    }

    /// Line breaks an edit may still add to a buffer of `current` lines.
    #[must_use]
    pub fn line_budget(&self, current: usize) -> Option<usize> {
        (self.max_lines > 0).then(|| self.max_lines.saturating_sub(current))
    }
}

#[derive(Clone, Copy, Debug)]
struct Measure {
    chars: usize,
    lines: usize,
    overflowing: usize,
}

impl Measure {
    fn of(buffer: &Buffer, layout: &Layout) -> Self {
        Self {
            chars: buffer.total_char_count(),
            lines: buffer.line_count(),
            overflowing: layout.overflowing().count(),
        }
    }
}

/// Runs edits against a buffer and its layout transactionally.
#[derive(Clone, Copy, Debug, Default)]
pub struct EditGuard {
    limits: Limits,
    method: WidthMethod,
}

impl EditGuard {
    #[must_use]
    pub fn new(limits: Limits, method: WidthMethod) -> Self {
        Self { limits, method }
    }

    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Apply `edit` to `buffer`.
    ///
    /// `layout` must be the current wrap of `buffer`. On success both are
    /// updated and the edit's return value is passed through. On failure both
    /// are left untouched.
    pub fn apply<T, F>(&self, buffer: &mut Buffer, layout: &mut Layout, edit: F) -> Result<T>
    where
        F: FnOnce(&mut Buffer) -> T,
    {
        let before = Measure::of(buffer, layout);
        let snapshot = buffer.clone();

        let value = edit(buffer);
        let next = wrap(buffer, self.limits.width, self.method);

        if let Err(rejection) = self.validate(before, buffer, &next) {
            *buffer = snapshot;
            return Err(self.reject(rejection));
        }

        *layout = next;
        Ok(value)
    }

    /// Report a rejection and turn it into an error.
    ///
    /// Also used for edits refused before they touch the buffer.
    #[must_use]
    pub fn reject(&self, rejection: Rejection) -> Error {
        emit_log_with(LogLevel::Debug, || format!("edit rejected: {rejection}"));
        emit_event(
            "edit_rejected",
            &format!("{{\"kind\":\"{}\"}}", rejection.kind()),
        );
        Error::Rejected(rejection)
    }

    fn validate(
        &self,
        before: Measure,
        buffer: &Buffer,
        layout: &Layout,
    ) -> std::result::Result<(), Rejection> {
        let after = Measure::of(buffer, layout);
        let limits = &self.limits;

        if limits.char_limit > 0 && after.chars > limits.char_limit && after.chars > before.chars {
            return Err(Rejection::CharLimit {
                limit: limits.char_limit,
                attempted: after.chars,
            });
        }

        if limits.max_lines > 0 && after.lines > limits.max_lines && after.lines > before.lines {
            return Err(Rejection::MaxLines {
                limit: limits.max_lines,
                attempted: after.lines,
            });
        }

        if after.overflowing <= before.overflowing {
            return Ok(());
        }
        match layout.overflowing().next() {
            Some((visual_row, line)) => Err(Rejection::LineWidth {
                visual_row,
                width: line.width,
                limit: layout.width(),
            }),
            None => Ok(()),
        }
    }
}
