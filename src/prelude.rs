pub use crate::{
    config::Config,
    core::{
        goal::{BoxedGoal, Goal},
        logic_variable::Var,
        state::State,
        stream::{Solutions, Stream},
        structure::{Atom, Atomic},
        substitution::Substitution,
        term::Term,
    },
    error::Error,
    goals::{combinators::*, primitive::*},
    run,
};
