use bitvec::prelude::*;
use std::fmt;
use std::fmt::{Debug, Formatter};

#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSet {
    cardinality: usize,
    bit_vec: BitVec,
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<_> = self.iter().map(|i| i.to_string()).collect();
        write!(
            f,
            "BitSet {{ cardinality: {}, bit_vec: [{}]}}",
            self.cardinality,
            values.join(", "),
        )
    }
}

impl BitSet {
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            cardinality: 0,
            bit_vec: bitvec![0; size],
        }
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.cardinality == self.bit_vec.len()
    }

    /// Returns whether the bit was already set. Indices past the end are ignored.
    #[inline]
    pub fn set_bit(&mut self, idx: usize) -> bool {
        match self.bit_vec.get(idx).map(|b| *b) {
            Some(true) => true,
            Some(false) => {
                self.bit_vec.set(idx, true);
                self.cardinality += 1;
                false
            }
            None => false,
        }
    }

    #[inline]
    pub fn get_first_unset(&self) -> Option<usize> {
        if self.full() {
            return None;
        }
        self.bit_vec.iter().position(|b| !*b)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bit_vec
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| i)
    }
}
