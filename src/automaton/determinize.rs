//! Subset construction: NFA to total DFA over 256 byte values.
//!
//! Each DFA state stands for the set of NFA states active after some input
//! prefix. Sets are explored breadth-first from `{start}`; for every byte the
//! successor set is the union of all matching transition targets. The empty
//! successor is never explored and maps to a single shared fail state.

use std::collections::VecDeque;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use super::dfa::{Dfa, DfaBuilder, DfaSink, ALPHABET_SIZE};
use super::nfa::Nfa;
use super::state_set::StateSet;

/// Options for [`Determinizer`].
#[derive(Debug, Clone)]
pub struct DeterminizeConfig {
    labels: bool,
}

impl Default for DeterminizeConfig {
    fn default() -> Self {
        Self { labels: true }
    }
}

impl DeterminizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether DFA states get a `{0,3,5}`-style label. When off, every label
    /// is empty.
    pub fn labels(mut self, yes: bool) -> Self {
        self.labels = yes;
        self
    }

    pub fn labels_enabled(&self) -> bool {
        self.labels
    }
}

/// Runs subset construction with a given configuration.
///
/// All bookkeeping lives inside a single [`Determinizer::run`] call, so one
/// `Nfa` may be determinized from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Determinizer {
    config: DeterminizeConfig,
}

impl Determinizer {
    pub fn new(config: DeterminizeConfig) -> Self {
        Self { config }
    }

    /// Determinize `nfa`, emitting every state and transition into `sink`.
    pub fn run<S: DfaSink>(&self, nfa: &Nfa, mut sink: S) -> S::Output {
        let capacity = nfa.state_count();
        let accepting = |set: &StateSet| nfa.accept().is_some_and(|a| set.contains(a));

        let fail = sink.add_fail_state();
        for byte in 0..=u8::MAX {
            sink.add_transition(fail, byte, fail);
        }

        let mut active: FxHashMap<StateSet, S::State> = FxHashMap::default();
        let mut visited: FxHashSet<StateSet> = FxHashSet::default();
        let mut queue: VecDeque<(StateSet, S::State)> = VecDeque::new();

        let initial = StateSet::singleton(capacity, nfa.start());
        let start = sink.add_start_state(self.label(&initial), accepting(&initial));
        active.insert(initial.clone(), start);
        queue.push_back((initial, start));

        let mut next = StateSet::new(capacity);
        while let Some((current, from)) = queue.pop_front() {
            if visited.contains(&current) {
                continue;
            }

            for byte in 0..=u8::MAX {
                next.clear();
                for state in current.iter() {
                    for transition in nfa.transitions(state) {
                        if transition.condition.matches(byte) {
                            next.insert(transition.target);
                        }
                    }
                }

                let to = if next.is_empty() {
                    fail
                } else {
                    match active.get(&next) {
                        Some(&existing) => existing,
                        None => {
                            let state = sink.add_state(self.label(&next), accepting(&next));
                            trace!("new DFA state for {:?} ({} NFA states)", next, next.len());
                            active.insert(next.clone(), state);
                            queue.push_back((next.clone(), state));
                            state
                        }
                    }
                };
                sink.add_transition(from, byte, to);
            }

            visited.insert(current);
        }

        debug!(
            "determinized {} NFA states into {} DFA states (+1 fail, {} transitions)",
            capacity,
            active.len(),
            (active.len() + 1) * ALPHABET_SIZE
        );
        sink.build()
    }

    fn label(&self, set: &StateSet) -> String {
        if self.config.labels {
            set.label()
        } else {
            String::new()
        }
    }
}

impl Nfa {
    /// Compile into a [`Dfa`] with the default configuration.
    pub fn to_dfa(&self) -> Dfa {
        Determinizer::default().run(self, DfaBuilder::new())
    }

    /// Compile into a caller-supplied DFA representation.
    pub fn to_dfa_with<S: DfaSink>(&self, sink: S) -> S::Output {
        Determinizer::default().run(self, sink)
    }
}
