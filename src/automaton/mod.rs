//! Byte-level finite automata
//!
//! This module builds nondeterministic automata over bytes and compiles them
//! into total deterministic automata by subset construction. The key
//! components are:
//!
//! - `Condition`: A guard on one input byte (exact value or leading bits)
//! - `Nfa` / `NfaBuilder`: The immutable NFA and its incremental constructor
//! - `Determinizer`: Subset construction, emitting into a `DfaSink`
//! - `Dfa` / `DfaBuilder`: The compiled automaton and the sink that makes it
//!
//! # Module Organization
//!
//! - `condition`: Transition guards
//! - `nfa`: NFA data model, builder, and direct simulation
//! - `determinize`: Subset construction (`Nfa::to_dfa`)
//! - `dfa`: DFA sink trait, builder, and matching loop
//! - `state_set`: Canonical bit-set keys for active sets

mod condition;
mod determinize;
mod dfa;
mod nfa;
mod state_set;

pub use condition::{Condition, Prefix};
pub use determinize::{DeterminizeConfig, Determinizer};
pub use dfa::{Dfa, DfaBuilder, DfaSink, DfaStateId, ALPHABET_SIZE};
pub use nfa::{Nfa, NfaBuilder, StateId, Transition};
