//! Atomic values: the leaves of a term.
//!
//! Any `'static` type with value equality can be an atom once it
//! implements the `Atomic` marker. Atoms of different Rust types never
//! unify, so `5i32` and `5i64` are different atoms.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Marker for types that may be used as atomic terms.
pub trait Atomic: Any + Debug {}

impl Atomic for () {}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for u128 {}

impl Atomic for usize {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for i128 {}

impl Atomic for isize {}

impl Atomic for char {}

impl Atomic for f64 {}

impl Atomic for f32 {}

impl Atomic for String {}

trait AtomValue: Debug {
    fn as_any(&self) -> &dyn Any;

    fn eqv(&self, other: &dyn AtomValue) -> bool;
}

impl<T: Atomic + PartialEq> AtomValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eqv(&self, other: &dyn AtomValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|o| o == self)
            .unwrap_or(false)
    }
}

/// A type-erased atomic value, shared by reference count.
#[derive(Clone)]
pub struct Atom(Arc<dyn AtomValue>);

impl Atom {
    pub fn new<T: Atomic + PartialEq>(value: T) -> Self {
        Atom(Arc::new(value))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    pub fn ptr_eq(&self, other: &Atom) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.eqv(&*other.0)
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
