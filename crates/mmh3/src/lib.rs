//! MurmurHash3 for Rust (**NOT CRYPTO**).
//!
//! `mmh3` computes the three MurmurHash3 variants over a byte slice and a
//! seed, reproducibly across platforms and bit-for-bit compatible with other
//! ports of the algorithm. Use it for hash tables, sharding, fingerprinting,
//! and deduplication keys; never for anything adversarial.
//!
//! # Quick Start
//!
//! ```
//! // One-shot free functions, seed passed explicitly.
//! assert_eq!(mmh3::hash32(b"Hello, world", 0), 1785891924);
//! assert_eq!(mmh3::hash32(b"Hello, world", 10), -172601702);
//!
//! assert_eq!(
//!   mmh3::hash128_x64(b"Hello, world", 0),
//!   158517598496188337575393694976300464500,
//! );
//! assert_eq!(
//!   mmh3::hash128_x86(b"Hello, world", 7),
//!   52510795136989075550025607058488316817,
//! );
//!
//! // Or through the trait, which also covers the default (zero) seed.
//! use mmh3::{FastHash, Murmur3_32};
//! assert_eq!(Murmur3_32::hash(b"Hello, world"), 1785891924);
//! ```
//!
//! # Inputs are bytes
//!
//! The algorithms consume bytes, not strings. A text key must be serialized
//! to bytes first, and the encoding is part of the digest: the UTF-8 and
//! UTF-16 encodings of the same text hash to different values. All examples
//! here use byte literals to keep that choice explicit.
//!
//! # Which variant?
//!
//! - [`hash32`] - 32-bit digest, returned as `i32` (two's-complement view of
//!   the raw state; this is the convention every mmh3 port shares).
//! - [`hash128_x64`] - 128-bit digest tuned for 64-bit targets. The usual
//!   default.
//! - [`hash128_x86`] - 128-bit digest tuned for 32-bit targets. A different
//!   algorithm with different output, not a reformatting of the x64 digest.
//!
//! Either 128-bit variant runs anywhere; "x64"/"x86" only describe which
//! word width the inner loop favors.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub use hashes::fast::{Murmur3_32, Murmur3x64_128, Murmur3x86_128};
pub use traits::FastHash;

/// Generate a 32-bit hash value.
///
/// ```
/// assert_eq!(mmh3::hash32(b"Hello, world", 0), 1785891924);
/// ```
#[inline]
#[must_use]
pub fn hash32(key: &[u8], seed: u32) -> i32 {
  Murmur3_32::hash_with_seed(seed, key)
}

/// Generate a 128-bit hash value with the x64 variant.
#[inline]
#[must_use]
pub fn hash128_x64(key: &[u8], seed: u64) -> u128 {
  Murmur3x64_128::hash_with_seed(seed, key)
}

/// Generate a 128-bit hash value with the x86 variant.
#[inline]
#[must_use]
pub fn hash128_x86(key: &[u8], seed: u32) -> u128 {
  Murmur3x86_128::hash_with_seed(seed, key)
}

/// Generate a 128-bit hash value, selecting the variant with `x64arch`.
///
/// Callers without a reason to prefer otherwise pass `true`; the x64 variant
/// is the customary default. When `x64arch` is false the seed is truncated to
/// its low 32 bits, matching the x86 variant's 32-bit lane width.
///
/// ```
/// let key = b"Hello, world";
/// assert_eq!(mmh3::hash128(key, 80, true), mmh3::hash128_x64(key, 80));
/// assert_eq!(mmh3::hash128(key, 7, false), mmh3::hash128_x86(key, 7));
/// ```
#[inline]
#[must_use]
pub fn hash128(key: &[u8], seed: u64, x64arch: bool) -> u128 {
  if x64arch {
    hash128_x64(key, seed)
  } else {
    hash128_x86(key, seed as u32)
  }
}
