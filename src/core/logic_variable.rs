use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Named logic variable.
///
/// Identity is the fresh-variable counter value the variable was minted
/// with. The name is purely descriptive to help understanding: two
/// variables with the same name but different ids are different, and
/// variables can be copied, which preserves identity.
#[derive(Copy, Clone)]
pub struct Var {
    id: usize,
    name: &'static str,
}

impl Var {
    /// Variables are minted by `State::fresh`, which owns the counter.
    pub(crate) fn new(id: usize, name: &'static str) -> Self {
        Var { id, name }
    }

    /// Return the counter value this variable was minted with.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Return the variable's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Var {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}
