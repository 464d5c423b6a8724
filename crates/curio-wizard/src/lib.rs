//! Step navigation for the cataloguing wizard.
//!
//! The wizard is a fixed ordered sequence of named steps in two phases
//! ("information", then "documentation"), flattened for navigation. The
//! [`Wizard`] controller holds the canonical position; the browser URL is
//! only a persisted mirror, written through the [`query`] module after
//! every transition and read back once on load.
//!
//! Boundary policy: `back` at the first step holds, `next` at the last
//! step holds unless an object id is available, in which case it hands
//! off to the external review-request flow.
//!
//! # Example
//!
//! ```
//! use curio_wizard::{StepSequence, Transition, Wizard};
//!
//! let mut wizard = Wizard::new(StepSequence::catalogue());
//! assert_eq!(wizard.current_step(), "about");
//!
//! assert!(matches!(wizard.next(None), Transition::Moved { .. }));
//! assert_eq!(wizard.current_step(), "images");
//!
//! wizard.back();
//! assert_eq!(wizard.current_step(), "about");
//! // Backing past the first step holds.
//! assert!(matches!(wizard.back(), Transition::Held));
//! ```

pub mod controller;
pub mod query;
pub mod steps;

pub use controller::{handoff_route, Transition, Wizard};
pub use steps::{Phase, StepSequence, WizardError, DEFAULT_STEP};
