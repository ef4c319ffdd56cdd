//! Caller-configurable behavior for the streaming front end.
//!
//! Grounded in `dpx-dicom-charset::Config`: a plain `Copy` struct, doc
//! comment on every field, a `const fn new()` behind `Default`, plus a
//! named preset constructor for the stricter posture.

/// Options for [`crate::dispatch::from_unicode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// When an input scalar has no representation in the target encoding:
    /// `true` stops at that scalar and reports it to the caller (§7.2's
    /// default "the caller requested error reporting"); `false` skips the
    /// scalar silently and continues encoding the rest of the input.
    pub report_unrepresentable: bool,
}

impl TranscodeOptions {
    pub const fn new() -> Self {
        TranscodeOptions { report_unrepresentable: true }
    }

    /// Unrepresentable scalars are dropped rather than reported; use when
    /// the caller has no recovery path and would rather get partial output
    /// than an early stop.
    pub const fn new_silent() -> Self {
        TranscodeOptions { report_unrepresentable: false }
    }
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reports_unrepresentable() {
        assert!(TranscodeOptions::default().report_unrepresentable);
        assert!(!TranscodeOptions::new_silent().report_unrepresentable);
    }
}
