//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.

pub mod murmur3;

pub use murmur3::{Murmur3_32, Murmur3x64_128, Murmur3x86_128};
