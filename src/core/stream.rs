//! Lazy, possibly infinite streams of search states.
//!
//! A stream is a small state machine that is advanced one `step` at a
//! time by whoever consumes it. `merge` and `bind` do not walk their
//! inputs when they are called; they build `Merge` and `Bind` nodes that
//! do a bounded amount of work per step. Consuming a prefix of an
//! infinite stream therefore never forces the rest, and long streams
//! never turn into deep recursion.

use crate::core::goal::Goal;
use crate::core::state::State;
use std::sync::Arc;

pub enum Stream {
    Empty,
    Pair(State, Box<Stream>),
    /// Immature stream: the search pauses here, and `merge` uses the
    /// pause to give its other operand a turn.
    Suspension(Box<dyn FnOnce() -> Stream>),
    /// States pulled from an iterator on demand. The stream pauses after
    /// every state, so an endless iterator still shares its turn.
    Lazy(Box<dyn Iterator<Item = State>>),
    Merge(Box<Stream>, Box<Stream>),
    Bind(Box<Stream>, Arc<dyn Goal>),
}

/// Outcome of advancing a stream by one step.
pub(crate) enum Step {
    Done,
    Yield(State, Stream),
    Pending(Stream),
}

impl Stream {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: State) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: State, d: Self) -> Self {
        Stream::Pair(a, Box::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    pub fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = State>,
        I::IntoIter: 'static,
    {
        Stream::Lazy(Box::new(iter.into_iter()))
    }

    /// True if the stream is known to be empty without forcing anything.
    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Produce the states of `s`, interleaved with those of `t`.
    ///
    /// Mature states of `s` come first. Whenever `s` suspends, the
    /// operands swap places, so an infinite `s` cannot starve `t`.
    /// Streams built with `from_iter` suspend after each state.
    pub fn merge(s: Stream, t: Stream) -> Self {
        match (s, t) {
            (Stream::Empty, t) => t,
            (s, Stream::Empty) => s,
            (s, t) => Stream::Merge(Box::new(s), Box::new(t)),
        }
    }

    /// Apply `g` to every state of `self` and merge the resulting streams.
    pub fn bind(self, g: Arc<dyn Goal>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            s => Stream::Bind(Box::new(s), g),
        }
    }

    /// Pull at most `n` states.
    pub fn take(self, n: usize) -> Vec<State> {
        self.into_iter().take(n).collect()
    }

    pub(crate) fn step(self) -> Step {
        let mut current = self;
        loop {
            match current {
                Stream::Empty => return Step::Done,
                Stream::Pair(a, d) => return Step::Yield(a, *d),
                Stream::Suspension(sup) => return Step::Pending(sup()),
                Stream::Lazy(mut iter) => {
                    return match iter.next() {
                        Some(a) => {
                            Step::Yield(a, Stream::suspension(move || Stream::Lazy(iter)))
                        }
                        None => Step::Done,
                    }
                }
                Stream::Merge(s, t) => match (*s).step() {
                    Step::Done => current = *t,
                    Step::Yield(a, s) => return Step::Yield(a, Stream::merge(s, *t)),
                    Step::Pending(s) => return Step::Pending(Stream::merge(*t, s)),
                },
                Stream::Bind(s, g) => match (*s).step() {
                    Step::Done => return Step::Done,
                    Step::Yield(a, rest) => {
                        let head = g.apply(a);
                        current = Stream::merge(head, rest.bind(g));
                    }
                    Step::Pending(s) => return Step::Pending(s.bind(g)),
                },
            }
        }
    }
}

impl std::iter::IntoIterator for Stream {
    type Item = State;
    type IntoIter = Solutions;
    fn into_iter(self) -> Self::IntoIter {
        Solutions(self)
    }
}

impl std::fmt::Debug for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Pair(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Pair(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        _ => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
            _ => write!(f, "(...)"),
        }
    }
}

/// Iterator over the states of a stream, computed on demand.
pub struct Solutions(Stream);

impl Iterator for Solutions {
    type Item = State;
    fn next(&mut self) -> Option<Self::Item> {
        let mut stream = std::mem::replace(&mut self.0, Stream::Empty);
        loop {
            match stream.step() {
                Step::Done => return None,
                Step::Yield(a, rest) => {
                    self.0 = rest;
                    return Some(a);
                }
                Step::Pending(next) => stream = next,
            }
        }
    }
}
