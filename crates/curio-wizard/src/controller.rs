//! The navigation controller.

use crate::query::{format_query, OBJECT_ID_PARAM};
use crate::steps::{Phase, StepSequence, WizardError, DEFAULT_STEP};

/// Route of the external review-request flow the wizard hands off to
/// after its last step.
pub const HANDOFF_ROUTE: &str = "/catalog/assign/request";

/// Outcome of a navigation action.
///
/// The caller owns the side effects: on `Moved` it mirrors the new step to
/// the URL and resets any transient per-step feedback (a "saved" notice);
/// on `Handoff` it leaves the wizard entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The current step changed.
    Moved { step: String },
    /// A boundary was hit; the current step is unchanged.
    Held,
    /// The sequence is exhausted and an object id is available: leave the
    /// wizard for the external flow. Emitted exactly once per `next`.
    Handoff { route: String },
}

/// The step-navigation state machine.
///
/// Holds the canonical position; the URL is only a mirror. Invariant: the
/// current index is always in range for the sequence.
#[derive(Debug, Clone)]
pub struct Wizard {
    steps: StepSequence,
    current: usize,
}

impl Wizard {
    /// Start at the default step (or the first step if the sequence does
    /// not contain the default).
    pub fn new(steps: StepSequence) -> Self {
        let current = steps.index_of(DEFAULT_STEP).unwrap_or(0);
        Self { steps, current }
    }

    /// Start from a mirrored URL token. An unknown or absent token falls
    /// back to the default step rather than erroring: a shared or stale
    /// link must still open the wizard.
    pub fn restore(steps: StepSequence, token: Option<&str>) -> Self {
        match token.and_then(|t| steps.index_of(t)) {
            Some(current) => Self { steps, current },
            None => Self::new(steps),
        }
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    /// The current step name. This is also the token mirrored to the URL.
    pub fn current_step(&self) -> &str {
        self.steps.step_at(self.current).unwrap_or(DEFAULT_STEP)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> Option<Phase> {
        self.steps.phase_of(self.current_step())
    }

    /// Move one step back. Holds at the first step.
    pub fn back(&mut self) -> Transition {
        if self.current == 0 {
            return Transition::Held;
        }
        self.current -= 1;
        Transition::Moved {
            step: self.current_step().to_string(),
        }
    }

    /// Move one step forward. At the last step: hands off to the external
    /// flow when an object id is available, holds otherwise (nothing to
    /// review yet).
    pub fn next(&mut self, object_id: Option<&str>) -> Transition {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
            return Transition::Moved {
                step: self.current_step().to_string(),
            };
        }
        match object_id {
            Some(id) => Transition::Handoff {
                route: handoff_route(id),
            },
            None => Transition::Held,
        }
    }

    /// Jump directly to a named step (the step-picker path).
    pub fn jump(&mut self, step: &str) -> Result<Transition, WizardError> {
        match self.steps.index_of(step) {
            Some(index) => {
                self.current = index;
                Ok(Transition::Moved {
                    step: step.to_string(),
                })
            }
            None => Err(WizardError::UnknownStep(step.to_string())),
        }
    }
}

/// The external review-request route for a catalogued object.
pub fn handoff_route(object_id: &str) -> String {
    format!(
        "{HANDOFF_ROUTE}?{}",
        format_query(&[(OBJECT_ID_PARAM.to_string(), object_id.to_string())])
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────
