//! Step sequence definition.

use thiserror::Error;

/// The step the wizard opens on when the URL names none.
pub const DEFAULT_STEP: &str = "about";

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("EMPTY_SEQUENCE")]
    EmptySequence,
    #[error("DUPLICATE_STEP: {0}")]
    DuplicateStep(String),
    #[error("UNKNOWN_STEP: {0}")]
    UnknownStep(String),
}

/// Which half of the wizard a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Information,
    Documentation,
}

/// The ordered steps of the wizard, partitioned into two phases and
/// flattened into one sequence for navigation.
///
/// Invariant: step names are unique across both phases, and the sequence
/// is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    information: Vec<String>,
    documentation: Vec<String>,
}

impl StepSequence {
    /// Build a sequence from the two phases, enforcing uniqueness.
    pub fn new<S: Into<String>>(
        information: Vec<S>,
        documentation: Vec<S>,
    ) -> Result<Self, WizardError> {
        let information: Vec<String> = information.into_iter().map(Into::into).collect();
        let documentation: Vec<String> = documentation.into_iter().map(Into::into).collect();
        if information.is_empty() && documentation.is_empty() {
            return Err(WizardError::EmptySequence);
        }
        let mut seen = Vec::new();
        for step in information.iter().chain(documentation.iter()) {
            if seen.contains(&step.as_str()) {
                return Err(WizardError::DuplicateStep(step.clone()));
            }
            seen.push(step.as_str());
        }
        Ok(Self {
            information,
            documentation,
        })
    }

    /// The catalogue wizard the form ships with.
    pub fn catalogue() -> Self {
        // Infallible: the step lists are fixed and distinct.
        Self {
            information: [
                "about",
                "images",
                "details",
                "location",
                "provenance",
                "components",
                "object identification",
                "secondary measurements",
                "valuation",
            ]
            .map(String::from)
            .to_vec(),
            documentation: ["records", "media"].map(String::from).to_vec(),
        }
    }

    /// All steps in navigation order.
    pub fn combined(&self) -> impl Iterator<Item = &str> {
        self.information
            .iter()
            .chain(self.documentation.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.information.len() + self.documentation.len()
    }

    pub fn is_empty(&self) -> bool {
        // `new` forbids this; kept for the len/is_empty pairing.
        self.len() == 0
    }

    pub fn contains(&self, step: &str) -> bool {
        self.index_of(step).is_some()
    }

    pub fn index_of(&self, step: &str) -> Option<usize> {
        self.combined().position(|s| s == step)
    }

    /// The step at a flattened index.
    pub fn step_at(&self, index: usize) -> Option<&str> {
        self.combined().nth(index)
    }

    /// Which phase a step belongs to.
    pub fn phase_of(&self, step: &str) -> Option<Phase> {
        if self.information.iter().any(|s| s == step) {
            return Some(Phase::Information);
        }
        if self.documentation.iter().any(|s| s == step) {
            return Some(Phase::Documentation);
        }
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
