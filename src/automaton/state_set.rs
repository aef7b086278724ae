//! Canonical active sets for subset construction.
//!
//! An active set is stored as a bit-vector over dense NFA state ids. Two sets
//! built from the same members compare and hash equal regardless of the
//! order states were discovered in, which is what lets the determinizer key
//! its memo table on them. Up to 256 NFA states fit inline without a heap
//! allocation.

use std::fmt;

use smallvec::SmallVec;

use super::nfa::StateId;

const WORD_BITS: usize = 64;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    words: SmallVec<[u64; 4]>,
}

impl StateSet {
    /// An empty set able to hold ids in `[0, capacity)`.
    ///
    /// Sets compared against each other must share a capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: SmallVec::from_elem(0, capacity.div_ceil(WORD_BITS)),
        }
    }

    pub fn singleton(capacity: usize, state: StateId) -> Self {
        let mut set = Self::new(capacity);
        set.insert(state);
        set
    }

    /// Remove every member, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|word| *word = 0);
    }

    #[inline]
    pub fn insert(&mut self, state: StateId) {
        let id = state.index();
        self.words[id / WORD_BITS] |= 1u64 << (id % WORD_BITS);
    }

    #[inline]
    pub fn contains(&self, state: StateId) -> bool {
        let id = state.index();
        self.words
            .get(id / WORD_BITS)
            .is_some_and(|word| word & (1u64 << (id % WORD_BITS)) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(StateId::from_index(i * WORD_BITS + bit))
            })
        })
    }

    /// Diagnostic label: sorted member ids, e.g. `{0,3,5}`.
    pub fn label(&self) -> String {
        let mut label = String::from("{");
        for (i, state) in self.iter().enumerate() {
            if i > 0 {
                label.push(',');
            }
            label.push_str(&state.index().to_string());
        }
        label.push('}');
        label
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
