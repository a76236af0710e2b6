//! Terms of the language: logic variables, atoms and composites.

use crate::core::logic_variable::Var;
use crate::core::structure::{Atom, Atomic};
use std::fmt::Formatter;
use std::sync::Arc;

/// An immutable term.
///
/// Composites are ordered sequences of terms and unify element-wise.
/// Cloning a term is cheap: atoms and composites are reference counted.
#[derive(Clone)]
pub enum Term {
    Var(Var),
    Atom(Atom),
    Composite(Arc<[Term]>),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn atom<T: Atomic + PartialEq>(value: T) -> Self {
        Term::Atom(Atom::new(value))
    }

    /// Build a composite from anything convertible to terms.
    pub fn composite<T: Into<Term>>(items: impl IntoIterator<Item = T>) -> Self {
        Term::Composite(items.into_iter().map(Into::into).collect())
    }

    /// The empty composite.
    pub fn nil() -> Self {
        Term::Composite(Arc::from(Vec::new()))
    }

    pub fn try_as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_var(&self) -> bool {
        self.try_as_var().is_some()
    }

    pub fn as_composite(&self) -> Option<&[Term]> {
        match self {
            Term::Composite(items) => Some(items),
            _ => None,
        }
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Term::Atom(atom) => atom.downcast_ref(),
            _ => None,
        }
    }

    /// True if both terms are the same variable or share the same allocation.
    pub(crate) fn ptr_eq(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Atom(a), Term::Atom(b)) => a.ptr_eq(b),
            (Term::Composite(a), Term::Composite(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Atom(a), Term::Atom(b)) => a == b,
            (Term::Composite(a), Term::Composite(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.try_as_var().map(|sv| sv == *v).unwrap_or(false)
    }
}

impl<T: Atomic + PartialEq> PartialEq<T> for Term {
    fn eq(&self, other: &T) -> bool {
        self.downcast_ref::<T>().map(|x| x == other).unwrap_or(false)
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        self.downcast_ref::<String>()
            .map(|x| x == other)
            .unwrap_or(false)
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(*v)
    }
}

impl<T: Atomic + PartialEq> From<T> for Term {
    fn from(v: T) -> Self {
        Term::atom(v)
    }
}

/// String slices become `String` atoms, so `"oil"` and `String::from("oil")` unify.
impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::atom(s.to_string())
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::Composite(items.into())
    }
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Atom(a) => write!(f, "{:?}", a),
            Term::Composite(items) => {
                write!(f, "(")?;
                let mut iter = items.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{:?}", first)?;
                }
                for item in iter {
                    write!(f, " {:?}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_compare_with_plain_values() {
        assert_eq!(Term::new(42), 42);
        assert_ne!(Term::new(42), 43);
        assert_eq!(Term::new("olive"), "olive");
        assert_eq!(Term::new("olive"), String::from("olive"));
    }

    #[test]
    fn variables_compare_by_identity() {
        let x = Var::new(0, "x");
        assert_eq!(Term::var(x), x);
        assert_ne!(Term::var(x), Var::new(1, "x"));
        assert_ne!(Term::var(x), Term::new(0usize));
    }

    #[test]
    fn composites_compare_structurally() {
        let a = Term::composite(vec![1, 2, 3]);
        let b = Term::from(vec![Term::new(1), Term::new(2), Term::new(3)]);
        assert_eq!(a, b);
        assert_ne!(a, Term::composite(vec![1, 2]));
    }

    #[test]
    fn nil_is_an_empty_composite() {
        assert_eq!(Term::nil().as_composite(), Some(&[][..]));
        assert_ne!(Term::nil(), Term::new(()));
    }

    #[test]
    fn composites_print_in_parentheses_separated_by_space() {
        let x = Var::new(2, "x");
        let t = Term::from(vec![Term::new(1), Term::var(x), Term::composite(vec!['a'])]);
        assert_eq!(format!("{:?}", t), "(1 x#2 ('a'))");
    }

    #[test]
    fn ptr_eq_only_holds_for_shared_allocations() {
        let t = Term::composite(vec![1]);
        assert!(t.ptr_eq(&t.clone()));
        assert!(!t.ptr_eq(&Term::composite(vec![1])));
    }
}
