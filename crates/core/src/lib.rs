//! # practica
//!
//! Engine for the Practica walkthrough: an interactive tour of the logistic
//! learner model `p = σ(θ − β + γ·T)`.
//!
//! This crate is the host-testable half of the app. It owns everything with
//! actual behavior — the slide deck, the navigation state machine, the
//! formula evaluator, and the derived presentation state — and nothing that
//! touches a browser. The wasm front end (`practica_web`) is a thin render
//! layer over these types.
//!
//! ## Quick start
//!
//! ```
//! use practica::prelude::*;
//!
//! // Probability of success after 5 practice opportunities.
//! let p = success_probability(-0.5, 1.0, 0.3, 5);
//! assert!(p > 0.0 && p < 1.0);
//!
//! // Walk the deck.
//! let mut nav = NavState::new();
//! assert!(nav.go_to(1));
//! assert_eq!(nav.max_visited(), 1);
//!
//! // Derived UI state is a pure projection, never stored.
//! let stage = formula_stage(nav.current(), nav.current_flags());
//! assert_eq!(stage, FormulaStage::Hidden);
//! ```
//!
//! ## Feature flags
//!
//! - `std` (default): standard library support
//! - `serde`: serialization/deserialization for the public state types

pub mod answers;
pub mod deck;
pub mod model;
pub mod nav;
pub mod reveal;

/// Prelude module for convenient imports.
///
/// ```
/// use practica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::answers::{SharedAnswers, TaskChoice};
    pub use crate::deck::{self, SlideKind};
    pub use crate::model::{
        outcome_curve, outcome_logit, outcome_probability, sigmoid, success_curve,
        success_probability, Outcome, OutcomeCounts, OutcomeGains,
    };
    pub use crate::nav::{NavState, StepFlags};
    pub use crate::reveal::{formula_stage, helper_visible, FormulaStage};
}
