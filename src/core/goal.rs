use super::stream::Stream;
use crate::config::Config;
use crate::core::state::State;
use crate::core::stream::Solutions;
use std::sync::Arc;

/// A goal maps a state to the stream of states in which it holds.
///
/// Goals are pure: applying the same goal to the same state always
/// yields an equivalent stream. Any `Fn(State) -> Stream` is a goal.
pub trait Goal: 'static {
    fn apply(&self, state: State) -> Stream;

    /// Search from an empty state with the default configuration.
    fn solve(&self) -> Solutions {
        self.apply(State::default()).into_iter()
    }

    /// Search from an empty state with the given configuration.
    fn solve_with(&self, config: Config) -> Solutions {
        self.apply(State::new(config)).into_iter()
    }

    /// Erase the goal's type, e.g. to build goal trees at runtime.
    fn boxed(self) -> BoxedGoal
    where
        Self: Sized,
    {
        BoxedGoal(Arc::new(self))
    }
}

impl<F: 'static + Fn(State) -> Stream> Goal for F {
    fn apply(&self, state: State) -> Stream {
        self(state)
    }
}

/// Type-erased, cheaply clonable goal.
#[derive(Clone)]
pub struct BoxedGoal(Arc<dyn Goal>);

impl Goal for BoxedGoal {
    fn apply(&self, state: State) -> Stream {
        self.0.apply(state)
    }
}

impl std::fmt::Debug for BoxedGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<goal>")
    }
}
