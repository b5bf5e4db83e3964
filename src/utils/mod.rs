/*!
# Utilities

Small helpers shared by algorithms and generators, most notably [`Probability`] to validate
probability parameters. Tests additionally get a union-find used by the reference algorithms.
*/

use num::{One, Zero};

#[cfg(test)]
mod union_find;

#[cfg(test)]
pub(crate) use union_find::DisjointSet;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
