use crate::core::goal::Goal;
use crate::core::term::Term;

/// Assert that a goal fails
pub fn fails(goal: impl Goal) {
    assert!(goal.solve().next().is_none());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: impl Goal) {
    assert!(goal.solve().next().is_some());
}

/// The values of the variable labelled `name` in the first `n` solutions.
pub fn values_of(goal: impl Goal, name: &str, n: usize) -> Vec<Term> {
    goal.solve()
        .take(n)
        .map(|s| {
            s.lookup_named(name)
                .expect("lookup failed")
                .unwrap_or_else(|| panic!("no variable named {}", name))
        })
        .collect()
}
