//! Hashing of floating-point fields.
//!
//! `f64` does not implement [`Hash`], yet instruments compare structurally
//! and must hash consistently with that comparison. [`HashReal`] feeds the
//! bit pattern of each value into a [`Hasher`], mapping `-0.0` onto `0.0`
//! so that values equal under `==` hash identically.

use std::hash::Hasher;

use crate::Real;

/// Feeds floating-point data into a [`Hasher`].
pub trait HashReal {
    /// Hash `self` into `state`.
    fn hash_real<H: Hasher>(&self, state: &mut H);
}

impl HashReal for Real {
    fn hash_real<H: Hasher>(&self, state: &mut H) {
        let bits = if *self == 0.0 { 0u64 } else { self.to_bits() };
        state.write_u64(bits);
    }
}

impl HashReal for [Real] {
    fn hash_real<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for x in self {
            x.hash_real(state);
        }
    }
}

impl HashReal for Vec<Real> {
    fn hash_real<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash_real(state);
    }
}

impl HashReal for Vec<Vec<Real>> {
    fn hash_real<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for row in self {
            row.hash_real(state);
        }
    }
}
