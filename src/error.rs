//! Error types for the evaluator.
//!
//! A goal that cannot be satisfied is not an error: it simply produces
//! no states. The variants here describe broken substitutions.

use thiserror::Error;

use crate::core::logic_variable::Var;

/// Errors raised by substitution operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Walking a variable did not terminate: the substitution contains a
    /// chain of variable bindings that leads back to itself.
    #[error("binding chain starting at {var:?} is cyclic (gave up after {steps} steps)")]
    CyclicBinding { var: Var, steps: usize },

    /// `extend` was asked to rebind a variable that already has a value.
    #[error("variable {0:?} is already bound")]
    AlreadyBound(Var),

    /// The value of a variable contains the variable itself. Only possible
    /// when unification runs without the occurs check.
    #[error("value of {0:?} is an infinite term")]
    CyclicTerm(Var),
}

impl Error {
    /// True for errors that only a bug (or a hand-built substitution) can cause.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Error::CyclicBinding { .. } | Error::AlreadyBound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
