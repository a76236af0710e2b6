//! Macros for composing goals with less nesting.
//!
//! They expand into the binary combinators and `call_fresh`; no other
//! goal constructor is involved.

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj2($g0, $crate::disj!($($g);*)) }
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::conj2($g0, $crate::conj!($($g),*)) }
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// `fresh!((x, y), g1, g2)` introduces `x` then `y` and runs the
/// conjunction of the goals. Each name doubles as the variable's label.
#[macro_export]
macro_rules! fresh {
    (($x:ident), $($g:expr),* $(,)?) => {
        $crate::prelude::call_fresh(
            stringify!($x),
            move |$x: $crate::prelude::Var| $crate::conj!($($g),*),
        )
    };

    (($x:ident, $($rest:ident),+), $($g:expr),* $(,)?) => {
        $crate::prelude::call_fresh(
            stringify!($x),
            move |$x: $crate::prelude::Var| $crate::fresh!(($($rest),+), $($g),*),
        )
    };
}
