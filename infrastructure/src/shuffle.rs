//! Random candidate shuffling

use chorus_application::CandidateShuffler;
use rand::seq::SliceRandom;

/// Uniform Fisher-Yates shuffle from the thread-local RNG
pub struct RandomShuffler;

impl CandidateShuffler for RandomShuffler {
    fn shuffle(&self, candidates: &mut [String]) {
        candidates.shuffle(&mut rand::thread_rng());
    }
}
