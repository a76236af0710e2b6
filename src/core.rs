//! Core data structures and logic algorithms

pub mod goal;
pub mod logic_variable;
pub mod state;
pub mod stream;
pub mod structure;
pub mod substitution;
pub mod term;
