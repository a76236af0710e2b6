use crate::error::Error;
use crate::prelude::*;
use crate::testing::{fails, succeeds, values_of};
use crate::{conj, disj, fresh};

#[test]
fn equal_atoms_succeed_once_without_new_bindings() {
    let solutions: Vec<_> = eq(5, 5).solve().collect();
    assert_eq!(solutions, vec![State::default()]);
    assert!(solutions[0].substitution().is_empty());
}

#[test]
fn different_atoms_fail() {
    fails(eq(5, 6));
    fails(eq("olive", "oil"));
    fails(eq(5, "5"));
}

#[test]
fn fresh_variables_are_distinct() {
    let goal = fresh!((x, y), eq(x, 1), eq(y, 2));
    let state = goal.solve().next().unwrap();
    assert_eq!(state.counter(), 2);
    assert_eq!(state.lookup_named("x").unwrap(), Some(Term::new(1)));
    assert_eq!(state.lookup_named("y").unwrap(), Some(Term::new(2)));
}

#[test]
fn both_variables_bound_through_conjunction() {
    let goal = fresh!((x, y), eq(x, 5), eq(y, 5));
    let state = goal.solve().next().unwrap();
    assert_eq!(state.lookup_named("x").unwrap(), Some(Term::new(5)));
    assert_eq!(state.lookup_named("y").unwrap(), Some(Term::new(5)));
}

#[test]
fn disjunction_lists_left_solutions_first() {
    let goal = call_fresh("x", |x| disj2(eq(x, 5), eq(x, 6)));
    assert_eq!(values_of(goal, "x", 10), vec![Term::new(5), Term::new(6)]);
}

#[test]
fn contradictory_conjunction_fails() {
    fails(call_fresh("x", |x| conj2(eq(x, 5), eq(x, 6))));
}

#[test]
fn unbound_variable_resolves_to_itself() {
    let state = call_fresh("q", |_| succeed()).solve().next().unwrap();
    let q = *state.variables().next().unwrap();
    assert_eq!(state.lookup(q).unwrap(), q);
    assert_eq!(state.bindings().unwrap(), vec![(q, Term::var(q))]);
}

#[test]
fn bindings_are_resolved_deeply() {
    let goal = fresh!(
        (x, y),
        eq(x, Term::composite(vec![Term::new(1), Term::var(y)])),
        eq(y, "two")
    );
    assert_eq!(
        values_of(goal, "x", 1),
        vec![Term::composite(vec![Term::new(1), Term::new("two")])]
    );
}

#[test]
fn silent_infinite_branch_does_not_starve_its_sibling() {
    succeeds(call_fresh("x", |x| disj2(nevero(), eq(x, 5))));
    succeeds(call_fresh("x", |x| disj2(eq(x, 5), nevero())));
}

#[test]
fn productive_infinite_branch_does_not_starve_its_sibling() {
    for goal in vec![
        call_fresh("x", |x| disj2(alwayso(), eq(x, 5))).boxed(),
        call_fresh("x", |x| disj2(eq(x, 5), alwayso())).boxed(),
    ] {
        let values = values_of(goal, "x", 5);
        assert_eq!(values.len(), 5);
        assert!(values.contains(&Term::new(5)));
        assert!(values.iter().any(|v| v.is_var()));
    }
}

#[test]
fn solving_does_not_alter_the_starting_state() {
    let (x, s) = State::default().fresh("x");
    let before = s.clone();
    let solutions: Vec<_> = run(&disj2(eq(x, 1), eq(x, 2)), s.clone()).collect();
    assert_eq!(solutions.len(), 2);
    assert_eq!(s, before);
    assert_eq!(s.lookup(x).unwrap(), x);
}

#[test]
fn occurs_check_is_off_by_default() {
    let goal = call_fresh("x", |x| eq(x, vec![Term::var(x)]));
    let state = goal.solve().next().unwrap();
    assert!(matches!(state.lookup_named("x"), Err(Error::CyclicTerm(_))));
}

#[test]
fn occurs_check_rejects_infinite_terms() {
    let goal = call_fresh("x", |x| eq(x, vec![Term::var(x)]));
    assert!(goal.solve_with(Config::checked()).next().is_none());
}

#[test]
fn macros_and_folds_agree() {
    let by_macro = fresh!((x), conj!(disj!(eq(x, 1); eq(x, 2); eq(x, 3)), succeed()));
    let by_fold = call_fresh("x", |x| {
        conj_all(vec![
            disj_all(vec![eq(x, 1).boxed(), eq(x, 2).boxed(), eq(x, 3).boxed()]),
            succeed().boxed(),
        ])
    });
    assert_eq!(values_of(by_macro, "x", 10), values_of(by_fold, "x", 10));
}

fn count_from(n: u64, x: Var) -> impl Goal {
    delay(move || disj2(eq(x, n), count_from(n + 1, x)).boxed())
}

#[test]
fn recursive_relation_enumerates_lazily() {
    let goal = call_fresh("x", |x| count_from(10, x));
    assert_eq!(
        values_of(goal, "x", 3),
        vec![Term::new(10u64), Term::new(11u64), Term::new(12u64)]
    );
}

#[test]
fn recursive_relation_can_be_filtered() {
    let goal = call_fresh("x", |x| conj2(count_from(0, x), eq(x, 7u64)));
    assert_eq!(values_of(goal, "x", 1), vec![Term::new(7u64)]);
}
