use serde::{Deserialize, Serialize};

use crate::policy::Policy;

/// Construction contract for a [`Translator`](crate::Translator).
///
/// Validated once, before any translation: a zero frame count is rejected,
/// and `policy` is a closed enum so unknown algorithm names never get past
/// parsing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub frame_count: usize,
    pub policy: Policy,
}

impl SimConfig {
    pub fn new(frame_count: usize, policy: Policy) -> Self {
        Self {
            frame_count,
            policy,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_count: 256,
            policy: Policy::Fifo,
        }
    }
}
