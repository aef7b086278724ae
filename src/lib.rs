//! likematch: NFA to DFA compilation for byte-level pattern matching
//!
//! Patterns such as SQL `LIKE` are translated elsewhere into an [`Nfa`] whose
//! transitions consume single bytes. [`Nfa::to_dfa`] determinizes it once so
//! that every later match is a single pass with one table lookup per byte:
//!
//! ```
//! use likematch::{Condition, Nfa};
//!
//! // a%  (an 'a' followed by anything)
//! let mut b = Nfa::builder();
//! let start = b.add_start_state()?;
//! let rest = b.add_state();
//! b.add_transition(start, Condition::value(b'a'), rest)?;
//! b.add_transition(rest, Condition::prefix(0, 0)?, rest)?;
//! b.set_accept(rest)?;
//! let dfa = b.build()?.to_dfa();
//!
//! assert!(dfa.matches(b"abc"));
//! assert!(!dfa.matches(b"xa"));
//! # Ok::<(), likematch::AutomatonError>(())
//! ```
//!
//! The compiled [`Dfa`] is immutable and may be shared across threads:
//! ```
//! # use likematch::{Condition, Nfa};
//! use std::sync::Arc;
//!
//! # let mut b = Nfa::builder();
//! # let start = b.add_start_state()?;
//! # b.set_accept(start)?;
//! let dfa = Arc::new(b.build()?.to_dfa());
//! let dfa_clone = Arc::clone(&dfa);
//! std::thread::spawn(move || dfa_clone.matches(b"")).join().unwrap();
//! # Ok::<(), likematch::AutomatonError>(())
//! ```

pub mod automaton;

pub use automaton::{
    Condition, DeterminizeConfig, Determinizer, Dfa, DfaBuilder, DfaSink, DfaStateId, Nfa,
    NfaBuilder, Prefix, StateId, Transition,
};

use thiserror::Error;

/// Errors raised while assembling an automaton.
///
/// All of them are construction-order or argument contract violations;
/// compiling a built NFA cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// `add_start_state` was called on a builder that already has one.
    #[error("start state is already set to {existing}")]
    StartAlreadySet { existing: StateId },

    /// `set_accept` was called on a builder that already has one.
    #[error("accept state is already set to {existing}")]
    AcceptAlreadySet { existing: StateId },

    /// `build` was called before any start state was added.
    #[error("NFA has no start state")]
    MissingStart,

    /// A state id that was not allocated by this builder.
    #[error("unknown state {state}; builder has {state_count} states")]
    UnknownState { state: StateId, state_count: usize },

    /// A prefix condition whose arguments cannot describe leading bits.
    #[error("invalid prefix condition {prefix:#b} over {bits} bits")]
    InvalidPrefix { prefix: u8, bits: u8 },
}
