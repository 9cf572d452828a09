//! Candidate shuffling port
//!
//! Seed candidates are stored in random order so ballot position does not
//! favour anyone. The randomness source is injected so use cases stay
//! deterministic under test.

/// Reorders candidates in place
pub trait CandidateShuffler: Send + Sync {
    fn shuffle(&self, candidates: &mut [String]);
}

/// Keeps the submitted order
pub struct NoShuffle;

impl CandidateShuffler for NoShuffle {
    fn shuffle(&self, _candidates: &mut [String]) {}
}

/// Reverses the order so tests can observe that shuffling happened
#[cfg(test)]
pub struct ReverseShuffle;

#[cfg(test)]
impl CandidateShuffler for ReverseShuffle {
    fn shuffle(&self, candidates: &mut [String]) {
        candidates.reverse();
    }
}
