//! Page-replacement policies.
//!
//! Bookkeeping is scoped to currently resident pages: a page enters via
//! `on_load`, is refreshed by `on_access`, and leaves either by being
//! picked as a victim or via `forget`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

pub use self::fifo::Fifo;
pub use self::lru::Lru;

mod fifo;
mod lru;

pub trait ReplacementPolicy {
    /// A page became resident at the current access clock.
    fn on_load(&mut self, page: u16, clock: u64);

    /// A resident page was touched by a translation. FIFO ignores this;
    /// LRU refreshes the page's stamp.
    fn on_access(&mut self, page: u16, clock: u64);

    /// Removes and returns the victim. Callers only invoke this while at
    /// least one page is resident.
    fn pick_victim(&mut self) -> u16;
}

/// Replacement algorithm selector.
///
/// A closed enum: unknown names are rejected while parsing, before a
/// translator exists, so the replacement engine never sees an
/// unsupported policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    Fifo,
    Lru,
}

impl Policy {
    pub fn build(self) -> Box<dyn ReplacementPolicy> {
        match self {
            Policy::Fifo => Box::new(Fifo::new()),
            Policy::Lru => Box::new(Lru::new()),
        }
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "LRU" => Ok(Policy::Lru),
            other => Err(SimError::Config(format!(
                "unsupported replacement policy '{}' (expected FIFO or LRU)",
                other
            ))),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
        })
    }
}
