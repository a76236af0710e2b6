//! Substitutions map variables to terms.
//!
//! Terms can be atomic, composite or variables themselves.

use crate::config::Config;
use crate::core::logic_variable::Var;
use crate::core::term::Term;
use crate::error::{Error, Result};
use std::fmt::Formatter;

/// Persistent mapping of variables to terms.
///
/// `extend` and `unify` never modify `self`; they return a new
/// substitution that shares structure with the old one, so divergent
/// search branches can keep their own bindings cheaply.
#[derive(Clone, PartialEq, Default)]
pub struct Substitution {
    subs: im::HashMap<Var, Term>,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// The term `x` is directly bound to, if any.
    pub fn get(&self, x: &Var) -> Option<&Term> {
        self.subs.get(x)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.subs.iter()
    }

    /// Resolve `v` through variable bindings.
    ///
    /// If `v` is no variable or a variable that is not substituted, `v`
    /// is returned. A chain longer than the number of bindings can only
    /// be a cycle and is reported as `Error::CyclicBinding`.
    pub fn walk<'a>(&'a self, v: &'a Term) -> Result<&'a Term> {
        let origin = match v {
            Term::Var(var) => *var,
            _ => return Ok(v),
        };

        let mut current = v;
        let mut steps = 0;
        while let Term::Var(var) = current {
            match self.subs.get(var) {
                Some(next) => {
                    steps += 1;
                    if steps > self.subs.len() {
                        return Err(Error::CyclicBinding { var: origin, steps });
                    }
                    current = next;
                }
                None => break,
            }
        }
        Ok(current)
    }

    /// Extend substitution with a `x => v` binding.
    ///
    /// Fails with `Error::AlreadyBound` if `x` already has a value.
    pub fn extend(&self, x: Var, v: Term) -> Result<Self> {
        if self.subs.contains_key(&x) {
            return Err(Error::AlreadyBound(x));
        }
        Ok(Substitution {
            subs: self.subs.update(x, v),
        })
    }

    /// Returns `true` if `v` contains a variable that is equivalent
    /// to `x` under this substitution.
    pub fn occurs(&self, x: Var, v: &Term) -> Result<bool> {
        self.occurs_in(x, v, &mut Vec::new())
    }

    fn occurs_in(&self, x: Var, v: &Term, path: &mut Vec<Var>) -> Result<bool> {
        match self.walk(v)? {
            Term::Var(var) => Ok(*var == x),
            Term::Atom(_) => Ok(false),
            Term::Composite(items) => {
                let origin = v.try_as_var();
                if let Some(var) = origin {
                    if path.contains(&var) {
                        return Err(Error::CyclicTerm(var));
                    }
                    path.push(var);
                }
                let mut found = false;
                for item in items.iter() {
                    if self.occurs_in(x, item, path)? {
                        found = true;
                        break;
                    }
                }
                if origin.is_some() {
                    path.pop();
                }
                Ok(found)
            }
        }
    }

    /// Attempt to unify `u` and `v` under this substitution, without
    /// occurs check.
    ///
    /// `Ok(None)` means the terms do not unify.
    pub fn unify(&self, u: &Term, v: &Term) -> Result<Option<Self>> {
        self.unify_with(u, v, Config::default())
    }

    /// Attempt to unify `u` and `v` under this substitution.
    pub fn unify_with(&self, u: &Term, v: &Term, config: Config) -> Result<Option<Self>> {
        let u = self.walk(u)?;
        let v = self.walk(v)?;

        match (u, v) {
            _ if u.ptr_eq(v) => Ok(Some(self.clone())),
            (Term::Var(a), Term::Var(b)) => {
                // the younger variable points at the older one, whatever the argument order
                if a > b {
                    self.bind(*a, v.clone(), config)
                } else {
                    self.bind(*b, u.clone(), config)
                }
            }
            (Term::Var(a), _) => self.bind(*a, v.clone(), config),
            (_, Term::Var(b)) => self.bind(*b, u.clone(), config),
            (Term::Composite(us), Term::Composite(vs)) => {
                if us.len() != vs.len() {
                    return Ok(None);
                }
                let mut s = self.clone();
                for (ui, vi) in us.iter().zip(vs.iter()) {
                    match s.unify_with(ui, vi, config)? {
                        Some(next) => s = next,
                        None => return Ok(None),
                    }
                }
                Ok(Some(s))
            }
            (Term::Atom(a), Term::Atom(b)) if a == b => Ok(Some(self.clone())),
            _ => Ok(None),
        }
    }

    fn bind(&self, x: Var, v: Term, config: Config) -> Result<Option<Self>> {
        if config.occurs_check && self.occurs(x, &v)? {
            return Ok(None);
        }
        self.extend(x, v).map(Some)
    }

    /// Replace all variables contained in `v` with their substituted
    /// values. Variables without substitution remain in place.
    pub fn resolve(&self, v: &Term) -> Result<Term> {
        self.resolve_in(v, &mut Vec::new())
    }

    fn resolve_in(&self, v: &Term, path: &mut Vec<Var>) -> Result<Term> {
        let walked = self.walk(v)?;
        match walked {
            Term::Composite(items) => {
                let origin = v.try_as_var();
                if let Some(var) = origin {
                    if path.contains(&var) {
                        return Err(Error::CyclicTerm(var));
                    }
                    path.push(var);
                }
                let resolved = items
                    .iter()
                    .map(|item| self.resolve_in(item, path))
                    .collect::<Result<Vec<_>>>()?;
                if origin.is_some() {
                    path.pop();
                }
                Ok(Term::from(resolved))
            }
            _ => Ok(walked.clone()),
        }
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut bindings: Vec<_> = self.subs.iter().collect();
        bindings.sort_by_key(|(var, _)| **var);

        write!(f, "{{")?;
        let mut iter = bindings.into_iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}
