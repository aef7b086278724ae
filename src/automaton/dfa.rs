//! Deterministic automaton over the full byte alphabet.
//!
//! The determinizer only talks to a [`DfaSink`]; [`DfaBuilder`] is the sink
//! that produces this crate's [`Dfa`]. A `Dfa` is total: every state has
//! exactly one successor for each of the 256 byte values.

use std::fmt;

/// Number of distinct input symbols.
pub const ALPHABET_SIZE: usize = 256;

/// Destination for the states and transitions discovered by subset
/// construction.
///
/// The determinizer calls `add_fail_state` once, then `add_start_state`
/// once, then `add_state` for every further active set. `add_transition` is
/// called exactly once per `(state, byte)` pair.
pub trait DfaSink {
    type State: Copy;
    type Output;

    fn add_fail_state(&mut self) -> Self::State;

    fn add_start_state(&mut self, label: String, accepting: bool) -> Self::State;

    fn add_state(&mut self, label: String, accepting: bool) -> Self::State;

    fn add_transition(&mut self, from: Self::State, byte: u8, to: Self::State);

    fn build(self) -> Self::Output;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DfaStateId(u32);

impl DfaStateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// # Panics
    ///
    /// If `index` does not fit in a `u32`.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        DfaStateId(u32::try_from(index).expect("DFA state id exceeds u32::MAX"))
    }
}

#[derive(Debug, Clone)]
struct StateInfo {
    label: String,
    accepting: bool,
}

/// A compiled, immutable DFA.
#[derive(Clone)]
pub struct Dfa {
    states: Vec<StateInfo>,
    /// `[state * 256 + byte] -> next state`
    next: Vec<DfaStateId>,
    start: DfaStateId,
    fail: DfaStateId,
}

impl Dfa {
    pub fn start(&self) -> DfaStateId {
        self.start
    }

    /// The absorbing, non-accepting sink.
    pub fn fail(&self) -> DfaStateId {
        self.fail
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> impl Iterator<Item = DfaStateId> + '_ {
        (0..self.states.len()).map(DfaStateId::from_index)
    }

    #[inline]
    pub fn is_accepting(&self, state: DfaStateId) -> bool {
        self.states[state.index()].accepting
    }

    /// Diagnostic label. Carries no matching semantics.
    pub fn label(&self, state: DfaStateId) -> &str {
        &self.states[state.index()].label
    }

    #[inline]
    pub fn step(&self, state: DfaStateId, byte: u8) -> DfaStateId {
        self.next[state.index() * ALPHABET_SIZE + byte as usize]
    }

    /// One transition per input byte; returns early once the fail state is
    /// reached.
    pub fn matches(&self, input: &[u8]) -> bool {
        let mut state = self.start;
        for &byte in input {
            state = self.step(state, byte);
            if state == self.fail {
                return false;
            }
        }
        self.is_accepting(state)
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("states_count", &self.states.len())
            .field("start", &self.label(self.start))
            .field(
                "accepting_count",
                &self.states.iter().filter(|s| s.accepting).count(),
            )
            .finish()
    }
}

/// Builds a [`Dfa`] from sink calls.
///
/// Transitions left undeclared at `build()` lead to the fail state, which is
/// created on demand if the caller never added one. Without a start state
/// the fail state starts the automaton, which then accepts nothing.
#[derive(Debug, Default)]
pub struct DfaBuilder {
    states: Vec<StateInfo>,
    next: Vec<Option<DfaStateId>>,
    start: Option<DfaStateId>,
    fail: Option<DfaStateId>,
}

impl DfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_state(&mut self, label: String, accepting: bool) -> DfaStateId {
        let id = DfaStateId::from_index(self.states.len());
        self.states.push(StateInfo { label, accepting });
        self.next.resize(self.next.len() + ALPHABET_SIZE, None);
        id
    }

    /// # Panics
    ///
    /// If a fail state already exists.
    pub fn add_fail_state(&mut self) -> DfaStateId {
        assert!(self.fail.is_none(), "fail state is already set");
        let fail = self.push_state("fail".to_string(), false);
        self.fail = Some(fail);
        fail
    }

    /// # Panics
    ///
    /// If a start state already exists.
    pub fn add_start_state(&mut self, label: String, accepting: bool) -> DfaStateId {
        assert!(self.start.is_none(), "start state is already set");
        let start = self.push_state(label, accepting);
        self.start = Some(start);
        start
    }

    pub fn add_state(&mut self, label: String, accepting: bool) -> DfaStateId {
        self.push_state(label, accepting)
    }

    pub fn add_transition(&mut self, from: DfaStateId, byte: u8, to: DfaStateId) {
        let slot = &mut self.next[from.index() * ALPHABET_SIZE + byte as usize];
        debug_assert!(
            slot.is_none(),
            "transition from {} on {:#04x} declared twice",
            from.index(),
            byte
        );
        *slot = Some(to);
    }

    pub fn build(mut self) -> Dfa {
        let fail = match self.fail {
            Some(fail) => fail,
            None => self.add_fail_state(),
        };
        let start = self.start.unwrap_or(fail);
        // Undeclared slots, including the fail state's own, fall into fail.
        let next = self
            .next
            .into_iter()
            .map(|slot| slot.unwrap_or(fail))
            .collect();
        Dfa {
            states: self.states,
            next,
            start,
            fail,
        }
    }
}

impl DfaSink for DfaBuilder {
    type State = DfaStateId;
    type Output = Dfa;

    fn add_fail_state(&mut self) -> DfaStateId {
        DfaBuilder::add_fail_state(self)
    }

    fn add_start_state(&mut self, label: String, accepting: bool) -> DfaStateId {
        DfaBuilder::add_start_state(self, label, accepting)
    }

    fn add_state(&mut self, label: String, accepting: bool) -> DfaStateId {
        DfaBuilder::add_state(self, label, accepting)
    }

    fn add_transition(&mut self, from: DfaStateId, byte: u8, to: DfaStateId) {
        DfaBuilder::add_transition(self, from, byte, to)
    }

    fn build(self) -> Dfa {
        DfaBuilder::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_built_dfa() {
        // "ab" exactly
        let mut b = DfaBuilder::new();
        let fail = b.add_fail_state();
        for byte in 0..=255u8 {
            b.add_transition(fail, byte, fail);
        }
        let start = b.add_start_state("s".into(), false);
        let a = b.add_state("a".into(), false);
        let ab = b.add_state("ab".into(), true);
        b.add_transition(start, b'a', a);
        b.add_transition(a, b'b', ab);
        let dfa = b.build();

        assert_eq!(dfa.state_count(), 4);
        assert!(dfa.matches(b"ab"));
        assert!(!dfa.matches(b"a"));
        assert!(!dfa.matches(b"abb"));
        assert!(!dfa.matches(b""));
        assert_eq!(dfa.step(start, b'z'), fail);
        assert_eq!(dfa.label(ab), "ab");
    }

    #[test]
    fn test_missing_fail_and_start() {
        let dfa = DfaBuilder::new().build();
        assert_eq!(dfa.state_count(), 1);
        assert_eq!(dfa.start(), dfa.fail());
        assert!(!dfa.matches(b""));
        assert!((0..=255u8).all(|byte| dfa.step(dfa.fail(), byte) == dfa.fail()));
    }

    #[test]
    fn test_accepting_start_matches_empty_input() {
        let mut b = DfaBuilder::new();
        b.add_start_state("s".into(), true);
        let dfa = b.build();
        assert!(dfa.matches(b""));
        assert!(!dfa.matches(b"x"));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "DFA state id exceeds u32::MAX")]
    fn test_state_id_overflow_panics() {
        DfaStateId::from_index(u32::MAX as usize + 1);
    }

    #[test]
    #[should_panic(expected = "start state is already set")]
    fn test_second_start_panics() {
        let mut b = DfaBuilder::new();
        b.add_start_state("a".into(), false);
        b.add_start_state("b".into(), false);
    }
}
