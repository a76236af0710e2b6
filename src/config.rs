//! Search configuration.

/// Settings shared by every goal of one search.
///
/// The configuration travels inside `State`, so it is fixed for a search
/// once the initial state has been built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Config {
    /// Reject bindings that would make a variable part of its own value.
    ///
    /// Off by default: without it `x == (x)` succeeds and binds `x` to an
    /// infinite term, which `Substitution::resolve` reports as
    /// `Error::CyclicTerm`.
    pub occurs_check: bool,
}

impl Config {
    /// Creates the default configuration (no occurs check).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with the occurs check enabled.
    #[must_use]
    pub fn checked() -> Self {
        Self {
            occurs_check: true,
        }
    }

    /// Builder method to set the occurs check.
    #[must_use]
    pub fn with_occurs_check(mut self, enabled: bool) -> Self {
        self.occurs_check = enabled;
        self
    }
}
