use crate::mvi::Intent;

use super::state::FormField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus forward. The field being left becomes touched.
    FocusNext,
    /// Move focus backward. The field being left becomes touched.
    FocusPrev,
    /// Jump to a field, e.g. the first invalid one after a rejected submit.
    Focus(FormField),
    /// Submit pressed: every field becomes touched.
    TouchAll,
    /// Create request sent.
    SubmitStarted,
    /// Create request failed; the values stay for another attempt.
    SubmitFailed,
    /// Clear the form.
    Reset,
}

impl Intent for FormIntent {}
