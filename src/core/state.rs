//! Search state threaded through goals.

use crate::config::Config;
use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use crate::error::Result;

/// Immutable pair of substitution and fresh-variable counter.
///
/// Every branch of the search owns its state; minting a variable or
/// adding a binding returns a new state and never touches the old one.
/// The state also remembers which variables were minted on the way, so
/// results can be looked up by name after the search.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct State {
    substitution: Substitution,
    counter: usize,
    variables: im::Vector<Var>,
    config: Config,
}

impl State {
    /// An empty state searching with the given configuration.
    pub fn new(config: Config) -> Self {
        State {
            config,
            ..State::default()
        }
    }

    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    /// The id the next fresh variable will get.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// All variables minted on this branch, oldest first.
    pub fn variables(&self) -> impl Iterator<Item = &Var> {
        self.variables.iter()
    }

    /// Mint a fresh variable and return it with the successor state.
    pub fn fresh(&self, name: &'static str) -> (Var, State) {
        let var = Var::new(self.counter, name);
        let mut variables = self.variables.clone();
        variables.push_back(var);
        let next = State {
            substitution: self.substitution.clone(),
            counter: self.counter + 1,
            variables,
            config: self.config,
        };
        (var, next)
    }

    /// Same state with a different substitution.
    pub fn with_substitution(&self, substitution: Substitution) -> State {
        State {
            substitution,
            ..self.clone()
        }
    }

    /// Attempt to unify `u` and `v` under this state's substitution and configuration.
    pub fn unify(&self, u: &Term, v: &Term) -> Result<Option<State>> {
        let unified = self.substitution.unify_with(u, v, self.config)?;
        Ok(unified.map(|s| self.with_substitution(s)))
    }

    /// Fully resolved value of `var`.
    pub fn lookup(&self, var: Var) -> Result<Term> {
        self.substitution.resolve(&Term::var(var))
    }

    /// Fully resolved value of the most recently minted variable called `name`.
    ///
    /// Returns `Ok(None)` if no such variable was minted on this branch.
    pub fn lookup_named(&self, name: &str) -> Result<Option<Term>> {
        match self.variables.iter().rev().find(|v| v.name() == name) {
            Some(var) => self.lookup(*var).map(Some),
            None => Ok(None),
        }
    }

    /// Every minted variable with its resolved value, oldest first.
    pub fn bindings(&self) -> Result<Vec<(Var, Term)>> {
        self.variables
            .iter()
            .map(|var| self.lookup(*var).map(|term| (*var, term)))
            .collect()
    }
}
