//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::{BoxedGoal, Goal};
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::goals::primitive::{fail, succeed};
use std::sync::Arc;

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Both subgoals see the same state. States from `g1` come first as long
/// as it does not suspend; after that the two streams interleave.
pub fn disj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    move |s: State| Stream::merge(g1.apply(s.clone()), g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// `g2` runs in every state produced by `g1`.
pub fn conj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    let g2: Arc<dyn Goal> = Arc::new(g2);
    move |s: State| g1.apply(s).bind(g2.clone())
}

/// Conjunction of any number of goals; succeeds once if there are none.
pub fn conj_all(goals: impl IntoIterator<Item = BoxedGoal>) -> BoxedGoal {
    let mut goals: Vec<_> = goals.into_iter().collect();
    match goals.pop() {
        None => succeed().boxed(),
        Some(last) => goals
            .into_iter()
            .rev()
            .fold(last, |acc, g| conj2(g, acc).boxed()),
    }
}

/// Disjunction of any number of goals; fails if there are none.
pub fn disj_all(goals: impl IntoIterator<Item = BoxedGoal>) -> BoxedGoal {
    let mut goals: Vec<_> = goals.into_iter().collect();
    match goals.pop() {
        None => fail().boxed(),
        Some(last) => goals
            .into_iter()
            .rev()
            .fold(last, |acc, g| disj2(g, acc).boxed()),
    }
}
