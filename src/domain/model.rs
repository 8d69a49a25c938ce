use serde::{Deserialize, Serialize};

/// Two free-text options to be weighed against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub option_a: String,
    pub option_b: String,
}

impl ComparisonRequest {
    pub fn new(option_a: impl Into<String>, option_b: impl Into<String>) -> Self {
        Self {
            option_a: option_a.into(),
            option_b: option_b.into(),
        }
    }
}

/// Pros and cons the model produced for a single option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionAnalysis {
    name: String,
    pros: Vec<String>,
    cons: Vec<String>,
}

impl OptionAnalysis {
    pub fn new(name: impl Into<String>, pros: Vec<String>, cons: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pros,
            cons,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pros(&self) -> &[String] {
        &self.pros
    }

    pub fn cons(&self) -> &[String] {
        &self.cons
    }
}

/// A complete comparison. Every field is required on the wire; a payload
/// missing one of them is rejected rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    item_a: OptionAnalysis,
    item_b: OptionAnalysis,
    conclusion: String,
}

impl ComparisonResult {
    pub fn new(item_a: OptionAnalysis, item_b: OptionAnalysis, conclusion: impl Into<String>) -> Self {
        Self {
            item_a,
            item_b,
            conclusion: conclusion.into(),
        }
    }

    pub fn item_a(&self) -> &OptionAnalysis {
        &self.item_a
    }

    pub fn item_b(&self) -> &OptionAnalysis {
        &self.item_b
    }

    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    /// Both analyses in display order.
    pub fn items(&self) -> [&OptionAnalysis; 2] {
        [&self.item_a, &self.item_b]
    }
}
