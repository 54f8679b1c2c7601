#![doc = include_str!("../README.md")]

mod alphabet;
mod codec;
mod decode;
mod encode;
mod error;
mod generator;
mod options;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;
mod validate;

pub use crate::alphabet::*;
pub use crate::decode::*;
pub use crate::encode::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::options::*;
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
pub use crate::validate::*;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = '.';

/// Alphabet used when none is configured.
pub const DEFAULT_ALPHABET: Alphabet = Alphabet::Standard;

/// Number of random bytes drawn when no random source is configured.
pub const DEFAULT_RANDOM_BYTES: usize = 12;

/// Smallest random byte count a SUID may carry.
pub const MIN_RANDOM_BYTES: usize = 2;

/// Largest byte count that may be drawn from a random source in one call.
pub const MAX_RANDOM_BYTES: usize = 65_536;

/// Width of the big-endian timestamp segment before base64 encoding.
pub const TIMESTAMP_BYTES: usize = 6;
