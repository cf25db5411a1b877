//! Human-readable names like `autumn-river-4821`.
//!
//! A name is an adjective, a noun and a short random token joined by a
//! delimiter. Two ways in:
//!
//! - [`seeded_generate`] hashes a seed string together with every argument
//!   and always returns the same name for the same inputs. Use it for
//!   previews.
//! - [`random_generate`] draws its seed from an injected
//!   [`RandomnessSource`], normally picked once with [`detect_source`].
//!
//! [`bulk_seeded`] and [`bulk_random`] return batches with no duplicates.
//!
//! ```
//! use haikuname::{seeded_generate, GenerateArgs, NameConfig};
//!
//! let args = GenerateArgs::new()
//!     .with_options(NameConfig::new().token_length(4).token_hex(true));
//! let name = seeded_generate("seed-1", &args).unwrap();
//! assert_eq!(name.name, "tight-cherry-62aa");
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod hash;
pub mod logging;
pub mod stream;

pub use config::{merge_config, NameConfig, ResolvedConfig, WordList};
pub use error::{NameError, Result, WordKind};
pub use generator::bulk::{
    bulk_random, bulk_random_with, bulk_seeded, bulk_seeded_with, capacity, BulkPolicy,
};
pub use generator::entropy::{
    detect_source, detect_source_with, ClockEntropy, EntropyPolicy, OsEntropy, RandomnessSource, Strength,
    ThreadEntropy,
};
pub use generator::{
    assemble_name, random_generate, seed_material, seeded_generate, GenerateArgs, GeneratedName,
    NameParts,
};
pub use hash::fnv1a32;
pub use stream::{Mulberry32, NumberStream};
