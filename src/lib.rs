//! A minimal microKanren: logic terms, unification over persistent
//! substitutions, and goals that search through lazy, fairly
//! interleaved streams of states.
//!
//! ```
//! use micro_kanren::prelude::*;
//! use micro_kanren::fresh;
//!
//! let goal = fresh!((x), disj2(eq(x, 5), eq(x, 6)));
//! let values: Vec<_> = run(&goal, State::default())
//!     .map(|s| s.lookup_named("x").unwrap().unwrap())
//!     .collect();
//! assert_eq!(values, vec![Term::new(5), Term::new(6)]);
//! ```

#[macro_use]
pub mod macros;
pub mod config;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod acceptance_tests;
#[cfg(test)]
mod testing;

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Solutions;

/// Apply `goal` to `state` and iterate over the states it succeeds in.
///
/// Solutions are produced on demand, so an infinite search is fine as
/// long as the caller only pulls finitely many.
pub fn run<G: Goal + ?Sized>(goal: &G, state: State) -> Solutions {
    tracing::debug!(
        counter = state.counter(),
        occurs_check = state.config().occurs_check,
        "starting search"
    );
    goal.apply(state).into_iter()
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn it_works() {
        let (x, s) = State::default().fresh("x");

        let result: Vec<_> = run(&eq(x, 42), s.clone()).collect();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].lookup(x).unwrap(), 42);

        let result: Vec<_> = run(&disj2(eq("olive", x), eq("oil", x)), s.clone())
            .map(|s| s.lookup(x).unwrap())
            .collect();
        assert_eq!(result, vec![Term::new("olive"), Term::new("oil")]);

        assert_eq!(run(&alwayso(), s).take(3).count(), 3);
    }

    #[test]
    fn run_accepts_boxed_goals() {
        let goal: BoxedGoal = succeed().boxed();
        assert_eq!(run(&goal, State::default()).count(), 1);
    }

    #[test]
    fn run_starts_from_the_given_state() {
        let (x, s) = State::default().fresh("x");
        let s = s.unify(&x.into(), &Term::new(1)).unwrap().unwrap();
        assert_eq!(run(&eq(x, 1), s.clone()).count(), 1);
        assert_eq!(run(&eq(x, 2), s).count(), 0);
    }
}
