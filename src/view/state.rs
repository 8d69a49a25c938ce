use crate::domain::model::{ComparisonRequest, ComparisonResult};
use crate::utils::error::ComparisonError;

pub const VALIDATION_MESSAGE: &str = "Please fill in both options to compare.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    A,
    B,
}

/// Outcome of pressing the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The request must now be sent; the state is loading.
    Started(ComparisonRequest),
    /// A field was blank; the validation message is set.
    Invalid,
    /// A request is already in flight.
    Busy,
}

/// Form state owned by the comparison view.
///
/// `error` and `result` are never both present. Starting a request clears
/// them, and `is_loading` is true only until [`ViewState::resolve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    option_a: String,
    option_b: String,
    is_loading: bool,
    error: Option<String>,
    result: Option<ComparisonResult>,
    blocked: bool,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option_a(&self) -> &str {
        &self.option_a
    }

    pub fn option_b(&self) -> &str {
        &self.option_b
    }

    pub fn option(&self, slot: OptionSlot) -> &str {
        match slot {
            OptionSlot::A => &self.option_a,
            OptionSlot::B => &self.option_b,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> ViewPhase {
        if self.is_loading {
            ViewPhase::Loading
        } else if self.result.is_some() {
            ViewPhase::Success
        } else if self.error.is_some() && !self.blocked {
            ViewPhase::Failed
        } else {
            ViewPhase::Idle
        }
    }

    /// True when the last submit was refused because a field was blank.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn inputs_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && !is_blank(&self.option_a) && !is_blank(&self.option_b)
    }

    /// Replaces a field's text. Ignored while loading; returns whether the edit applied.
    pub fn set_option(&mut self, slot: OptionSlot, text: impl Into<String>) -> bool {
        if self.is_loading {
            return false;
        }
        match slot {
            OptionSlot::A => self.option_a = text.into(),
            OptionSlot::B => self.option_b = text.into(),
        }
        true
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_loading {
            return SubmitAttempt::Busy;
        }

        if is_blank(&self.option_a) || is_blank(&self.option_b) {
            self.result = None;
            let rejection = ComparisonError::Validation {
                message: VALIDATION_MESSAGE.to_string(),
            };
            self.error = Some(rejection.banner_message());
            self.blocked = true;
            return SubmitAttempt::Invalid;
        }

        self.error = None;
        self.result = None;
        self.blocked = false;
        self.is_loading = true;
        SubmitAttempt::Started(ComparisonRequest::new(
            self.option_a.clone(),
            self.option_b.clone(),
        ))
    }

    pub fn resolve(&mut self, outcome: Result<ComparisonResult, ComparisonError>) {
        self.is_loading = false;
        match outcome {
            Ok(result) => {
                self.error = None;
                self.result = Some(result);
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.banner_message());
            }
        }
    }

    /// Empties the form. Ignored while loading.
    pub fn reset(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        *self = Self::default();
        true
    }
}
