// ABOUTME: Quiz question selection strategy
// ABOUTME: Uniform random pick in production, swappable for deterministic tests

use rand::seq::SliceRandom;
use trivia_core::Question;

/// Chooses the next quiz question from an already-filtered candidate set
pub trait QuestionPicker: Send + Sync {
    /// Returns `None` only when `candidates` is empty
    fn pick<'a>(&self, candidates: &'a [Question]) -> Option<&'a Question>;
}

/// Uniform random selection using the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick<'a>(&self, candidates: &'a [Question]) -> Option<&'a Question> {
        candidates.choose(&mut rand::thread_rng())
    }
}
