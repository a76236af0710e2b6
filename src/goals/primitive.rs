//! Primitive goals: equality, fresh variables, suspension.

use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::error::Error;
use crate::goals::combinators::disj2;
use std::sync::Arc;

/// Creates a goal that succeeds if `u` and `v` unify.
///
/// On success the stream holds exactly one state, with the extended
/// substitution and the unchanged counter.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal {
    let u = u.into();
    let v = v.into();
    move |s: State| match s.unify(&u, &v) {
        Ok(Some(s)) => Stream::singleton(s),
        Ok(None) => Stream::empty(),
        Err(err) => abort(err),
    }
}

/// Broken substitutions cannot be searched any further.
fn abort(err: Error) -> ! {
    if err.is_invariant_violation() {
        tracing::error!(error = %err, "substitution invariant violated, aborting search");
    } else {
        tracing::error!(error = %err, "unification reached an infinite term, aborting search");
    }
    panic!("{}", err)
}

/// Creates a goal that always succeeds exactly once.
pub fn succeed() -> impl Goal {
    |s: State| Stream::singleton(s)
}

/// Creates a goal that never succeeds.
pub fn fail() -> impl Goal {
    |_: State| Stream::empty()
}

/// Introduce a fresh logic variable.
///
/// `f` receives a variable minted from the state's counter and returns
/// the goal to run with the incremented counter. `name` only labels the
/// variable for debugging and `State::lookup_named`.
pub fn call_fresh<G: Goal>(name: &'static str, f: impl 'static + Fn(Var) -> G) -> impl Goal {
    move |s: State| {
        let (x, s) = s.fresh(name);
        tracing::trace!(var = ?x, "minted fresh variable");
        f(x).apply(s)
    }
}

/// Goal built on demand inside a suspension, see [`delay`].
pub struct Delay<F>(Arc<F>);

/// Postpone building and applying a goal until the stream is pulled.
///
/// Recursive relations must go through `delay`, otherwise building the
/// goal recurses forever. Box the delayed goal so the relation's return
/// type does not mention itself:
///
/// ```
/// use micro_kanren::prelude::*;
///
/// fn count_from(n: u32, x: Var) -> impl Goal {
///     delay(move || disj2(eq(x, n), count_from(n + 1, x)).boxed())
/// }
///
/// let goal = call_fresh("x", |x| count_from(0, x));
/// let first: Vec<_> = goal
///     .solve()
///     .take(3)
///     .map(|s| s.lookup_named("x").unwrap().unwrap())
///     .collect();
/// assert_eq!(first, vec![Term::new(0u32), Term::new(1u32), Term::new(2u32)]);
/// ```
pub fn delay<F, G>(thunk: F) -> Delay<F>
where
    F: 'static + Fn() -> G,
    G: Goal,
{
    Delay(Arc::new(thunk))
}

impl<F, G> Goal for Delay<F>
where
    F: 'static + Fn() -> G,
    G: Goal,
{
    fn apply(&self, state: State) -> Stream {
        let thunk = Arc::clone(&self.0);
        Stream::suspension(move || thunk().apply(state))
    }
}

/// Creates a goal that never produces a state, but never finishes either.
pub fn nevero() -> impl Goal {
    delay(|| nevero().boxed())
}

/// Creates a goal that succeeds an unbounded number of times.
pub fn alwayso() -> impl Goal {
    delay(|| disj2(succeed(), alwayso()).boxed())
}
