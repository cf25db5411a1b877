//! Where non-deterministic seeds come from.
//!
//! The random entry points never reach for a global RNG. They take a
//! [`RandomnessSource`], normally chosen once at startup by
//! [`detect_source`]. Two sources are strong ([`OsEntropy`], [`ThreadEntropy`]);
//! [`ClockEntropy`] is a weak, predictable fallback that is only ever handed
//! out when the caller opted in.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::error::{NameError, Result};
use crate::hash::fnv1a32;

/// How trustworthy a source's output is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// Unpredictable to an outside observer.
    Strong,
    /// Guessable from the wall clock. Fine for throwaway names, nothing else.
    Weak,
}

/// A provider of 32-bit seeds.
pub trait RandomnessSource {
    fn next_seed(&mut self) -> Result<u32>;

    fn strength(&self) -> Strength;

    fn name(&self) -> &'static str;
}

/// Reads straight from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl RandomnessSource for OsEntropy {
    fn next_seed(&mut self) -> Result<u32> {
        getrandom::u32().map_err(|e| {
            NameError::RandomnessUnavailable(format!("operating system source failed: {e}"))
        })
    }

    fn strength(&self) -> Strength {
        Strength::Strong
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

/// The thread-local CSPRNG from `rand`, seeded from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl RandomnessSource for ThreadEntropy {
    fn next_seed(&mut self) -> Result<u32> {
        Ok(rand::rng().random_range(0..=u32::MAX))
    }

    fn strength(&self) -> Strength {
        Strength::Strong
    }

    fn name(&self) -> &'static str {
        "thread"
    }
}

/// Clock nanoseconds, process id and a call counter folded through FNV-1a.
///
/// Predictable by anyone who can estimate when the call happened. Never use
/// it for names that must not be guessed.
#[derive(Debug, Default, Clone)]
pub struct ClockEntropy {
    counter: u32,
}

impl RandomnessSource for ClockEntropy {
    fn next_seed(&mut self) -> Result<u32> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        self.counter = self.counter.wrapping_add(1);
        Ok(fnv1a32(&format!(
            "{nanos}:{}:{}",
            std::process::id(),
            self.counter
        )))
    }

    fn strength(&self) -> Strength {
        Strength::Weak
    }

    fn name(&self) -> &'static str {
        "clock"
    }
}

/// Which source [`detect_source`] should hand out.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EntropyPolicy {
    /// The OS source, or the clock source if allowed and the OS is unreachable.
    #[default]
    Auto,
    Os,
    Thread,
    Clock,
}

fn weak_fallback(allow_weak: bool, cause: &str) -> Result<Box<dyn RandomnessSource>> {
    if !allow_weak {
        return Err(NameError::RandomnessUnavailable(format!(
            "{cause}; the clock fallback is disabled"
        )));
    }
    tracing::warn!(cause, "using weak clock-based randomness");
    Ok(Box::new(ClockEntropy::default()))
}

/// Probe for a source matching `policy`.
///
/// `allow_weak` gates every path that would end in [`ClockEntropy`].
pub fn detect_source(
    policy: EntropyPolicy,
    allow_weak: bool,
) -> Result<Box<dyn RandomnessSource>> {
    detect_source_with(Box::new(OsEntropy), policy, allow_weak)
}

/// [`detect_source`] with `primary` standing in for the operating system
/// source. `Os` and `Auto` probe it once; `Auto` falls back to the clock when
/// the probe fails and `allow_weak` is set.
pub fn detect_source_with(
    mut primary: Box<dyn RandomnessSource>,
    policy: EntropyPolicy,
    allow_weak: bool,
) -> Result<Box<dyn RandomnessSource>> {
    let source: Box<dyn RandomnessSource> = match policy {
        EntropyPolicy::Os => {
            primary.next_seed()?;
            primary
        }
        EntropyPolicy::Thread => Box::new(ThreadEntropy),
        EntropyPolicy::Clock => weak_fallback(allow_weak, "clock source requested")?,
        EntropyPolicy::Auto => match primary.next_seed() {
            Ok(_) => primary,
            Err(e) => weak_fallback(allow_weak, &e.to_string())?,
        },
    };
    tracing::debug!(source = source.name(), "selected randomness source");
    Ok(source)
}
