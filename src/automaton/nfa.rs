//! Nondeterministic automaton over bytes.
//!
//! An [`Nfa`] is assembled with an [`NfaBuilder`] and is immutable once
//! built. States are dense indices, so cyclic graphs are just index cycles.
//! There are no epsilon transitions: every transition consumes one byte.

use std::fmt;

use log::trace;

use super::condition::Condition;
use super::state_set::StateSet;
use crate::AutomatonError;

/// A state identifier, assigned in creation order starting at 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// # Panics
    ///
    /// If `index` does not fit in a `u32`.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        StateId(u32::try_from(index).expect("NFA state id exceeds u32::MAX"))
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0)
    }
}

/// An outgoing edge: on a byte satisfying `condition`, move to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: StateId,
    pub condition: Condition,
}

/// A frozen NFA with exactly one start state and at most one accept state.
#[derive(Debug, Clone)]
pub struct Nfa {
    start: StateId,
    accept: Option<StateId>,
    /// Outgoing transitions, indexed by state.
    transitions: Vec<Vec<Transition>>,
}

impl Nfa {
    pub fn builder() -> NfaBuilder {
        NfaBuilder::new()
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// The accept state, if one was designated.
    ///
    /// An NFA without one accepts nothing.
    pub fn accept(&self) -> Option<StateId> {
        self.accept
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.transitions.len()).map(StateId::from_index)
    }

    /// Outgoing transitions of `state`, in insertion order.
    #[inline]
    pub fn transitions(&self, state: StateId) -> &[Transition] {
        &self.transitions[state.index()]
    }

    /// Run the NFA directly over `input`.
    ///
    /// Tracks every reachable state at once, so the cost per byte grows with
    /// the number of active states. Compile with [`Nfa::to_dfa`] to match
    /// repeatedly.
    pub fn matches(&self, input: &[u8]) -> bool {
        let Some(accept) = self.accept else {
            return false;
        };

        let mut current = StateSet::singleton(self.state_count(), self.start);
        let mut next = StateSet::new(self.state_count());
        for &byte in input {
            next.clear();
            for state in current.iter() {
                for transition in self.transitions(state) {
                    if transition.condition.matches(byte) {
                        next.insert(transition.target);
                    }
                }
            }
            std::mem::swap(&mut current, &mut next);
            if current.is_empty() {
                return false;
            }
        }

        current.contains(accept)
    }
}

/// Incremental constructor for an [`Nfa`].
///
/// Start and accept may each be set once. Transitions may be added in any
/// order and may overlap.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    start: Option<StateId>,
    accept: Option<StateId>,
    transitions: Vec<Vec<Transition>>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(states: usize) -> Self {
        Self {
            start: None,
            accept: None,
            transitions: Vec::with_capacity(states),
        }
    }

    /// Allocate a fresh state with the next id.
    pub fn add_state(&mut self) -> StateId {
        let id = StateId::from_index(self.transitions.len());
        self.transitions.push(Vec::new());
        id
    }

    /// Allocate a fresh state and make it the start state.
    pub fn add_start_state(&mut self) -> Result<StateId, AutomatonError> {
        if let Some(existing) = self.start {
            return Err(AutomatonError::StartAlreadySet { existing });
        }
        let start = self.add_state();
        self.start = Some(start);
        Ok(start)
    }

    /// Designate an existing state as the accept state.
    pub fn set_accept(&mut self, state: StateId) -> Result<(), AutomatonError> {
        self.check_state(state)?;
        if let Some(existing) = self.accept {
            return Err(AutomatonError::AcceptAlreadySet { existing });
        }
        self.accept = Some(state);
        Ok(())
    }

    /// Append `from --condition--> to`.
    ///
    /// Duplicate and overlapping transitions are kept as given.
    pub fn add_transition(
        &mut self,
        from: StateId,
        condition: Condition,
        to: StateId,
    ) -> Result<(), AutomatonError> {
        self.check_state(from)?;
        self.check_state(to)?;
        self.transitions[from.index()].push(Transition {
            target: to,
            condition,
        });
        Ok(())
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Freeze into an [`Nfa`]. Fails if no start state was added.
    pub fn build(self) -> Result<Nfa, AutomatonError> {
        let start = self.start.ok_or(AutomatonError::MissingStart)?;
        trace!(
            "built NFA with {} states, start {}, accept {:?}",
            self.transitions.len(),
            start,
            self.accept.map(|s| s.index())
        );
        Ok(Nfa {
            start,
            accept: self.accept,
            transitions: self.transitions,
        })
    }

    fn check_state(&self, state: StateId) -> Result<(), AutomatonError> {
        if state.index() >= self.transitions.len() {
            return Err(AutomatonError::UnknownState {
                state,
                state_count: self.transitions.len(),
            });
        }
        Ok(())
    }
}
