//! Randomized balanced two-way split of a roster.

use rand::Rng;
use rand::seq::SliceRandom;

use teamsplit_types::{Partition, Roster};

/// Shuffle a copy of `roster` uniformly and split it at `ceil(n/2)`.
///
/// `SliceRandom::shuffle` is a Fisher-Yates shuffle, so every permutation is
/// equally likely. The roster itself is left untouched.
pub fn generate<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Partition {
    let mut shuffled = roster.members().to_vec();
    shuffled.shuffle(rng);
    Partition::from_shuffled(shuffled)
}
