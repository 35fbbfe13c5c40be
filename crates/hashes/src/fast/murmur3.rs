//! MurmurHash3 (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the MurmurHash3 family, bit-for-bit
//! compatible with Austin Appleby's reference algorithm: the 32-bit variant
//! and both 128-bit variants (the x64 one built on two 64-bit lanes, the x86
//! one on four 32-bit lanes).
//!
//! All three consume `(&[u8], seed)` and nothing else. Hashing a string means
//! hashing some byte encoding of it, and different encodings of the "same"
//! text produce different digests; the encoding choice belongs to the caller.

#![allow(clippy::indexing_slicing)] // Tight block parsing

use traits::FastHash;

use crate::util::{rotl32, rotl64};

/// 32-bit MurmurHash3.
///
/// The digest is the raw 32-bit state reinterpreted as two's-complement, so
/// the output type is `i32`. The 128-bit variants stay unsigned.
#[derive(Clone, Default)]
pub struct Murmur3_32;

/// 128-bit MurmurHash3 tuned for 64-bit targets.
#[derive(Clone, Default)]
pub struct Murmur3x64_128;

/// 128-bit MurmurHash3 tuned for 32-bit targets.
///
/// Produces a different digest than [`Murmur3x64_128`] for the same input;
/// the two are distinct algorithms, not two encodings of one result.
#[derive(Clone, Default)]
pub struct Murmur3x86_128;

const C1_32: u32 = 0xcc9e_2d51;
const C2_32: u32 = 0x1b87_3593;

const C1_X64: u64 = 0x87c3_7b91_1142_53d5;
const C2_X64: u64 = 0x4cf5_ad43_2745_937f;

const C1_X86: u32 = 0x239b_961b;
const C2_X86: u32 = 0xab0e_9789;
const C3_X86: u32 = 0x38b3_4ae5;
const C4_X86: u32 = 0xa1e3_8b93;

#[inline(always)]
fn scramble32(mut k: u32) -> u32 {
  k = k.wrapping_mul(C1_32);
  k = rotl32(k, 15);
  k.wrapping_mul(C2_32)
}

#[inline(always)]
fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^ (h >> 16)
}

#[inline(always)]
fn fmix64(mut h: u64) -> u64 {
  h ^= h >> 33;
  h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
  h ^= h >> 33;
  h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
  h ^ (h >> 33)
}

#[inline(always)]
fn hash32(seed: u32, data: &[u8]) -> i32 {
  let mut h = seed;

  let (blocks, tail) = data.as_chunks::<4>();
  for block in blocks {
    let k = u32::from_le_bytes(*block);
    h ^= scramble32(k);
    h = rotl32(h, 13);
    h = h.wrapping_mul(5).wrapping_add(0xe654_6b64);
  }

  // The tail gets the scramble only; the rotate/multiply-add step above is
  // reserved for full blocks.
  let mut k = 0u32;
  if tail.len() >= 3 {
    k ^= (tail[2] as u32) << 16;
  }
  if tail.len() >= 2 {
    k ^= (tail[1] as u32) << 8;
  }
  if !tail.is_empty() {
    k ^= tail[0] as u32;
    h ^= scramble32(k);
  }

  h = fmix32(h ^ (data.len() as u32));
  h as i32
}

#[inline(always)]
fn hash128_x64(seed: u64, data: &[u8]) -> u128 {
  let mut h1 = seed;
  let mut h2 = seed;

  let (blocks, tail) = data.as_chunks::<16>();
  for block in blocks {
    let (lanes, _) = block.as_chunks::<8>();
    let mut k1 = u64::from_le_bytes(lanes[0]);
    let mut k2 = u64::from_le_bytes(lanes[1]);

    k1 = k1.wrapping_mul(C1_X64);
    k1 = rotl64(k1, 31);
    k1 = k1.wrapping_mul(C2_X64);
    h1 ^= k1;

    h1 = rotl64(h1, 27);
    h1 = h1.wrapping_add(h2);
    h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

    k2 = k2.wrapping_mul(C2_X64);
    k2 = rotl64(k2, 33);
    k2 = k2.wrapping_mul(C1_X64);
    h2 ^= k2;

    h2 = rotl64(h2, 31);
    h2 = h2.wrapping_add(h1);
    h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
  }

  let mut k2 = 0u64;
  if tail.len() >= 15 {
    k2 ^= (tail[14] as u64) << 48;
  }
  if tail.len() >= 14 {
    k2 ^= (tail[13] as u64) << 40;
  }
  if tail.len() >= 13 {
    k2 ^= (tail[12] as u64) << 32;
  }
  if tail.len() >= 12 {
    k2 ^= (tail[11] as u64) << 24;
  }
  if tail.len() >= 11 {
    k2 ^= (tail[10] as u64) << 16;
  }
  if tail.len() >= 10 {
    k2 ^= (tail[9] as u64) << 8;
  }
  if tail.len() >= 9 {
    k2 ^= tail[8] as u64;
    k2 = k2.wrapping_mul(C2_X64);
    k2 = rotl64(k2, 33);
    k2 = k2.wrapping_mul(C1_X64);
    h2 ^= k2;
  }

  let mut k1 = 0u64;
  if tail.len() >= 8 {
    k1 ^= (tail[7] as u64) << 56;
  }
  if tail.len() >= 7 {
    k1 ^= (tail[6] as u64) << 48;
  }
  if tail.len() >= 6 {
    k1 ^= (tail[5] as u64) << 40;
  }
  if tail.len() >= 5 {
    k1 ^= (tail[4] as u64) << 32;
  }
  if tail.len() >= 4 {
    k1 ^= (tail[3] as u64) << 24;
  }
  if tail.len() >= 3 {
    k1 ^= (tail[2] as u64) << 16;
  }
  if tail.len() >= 2 {
    k1 ^= (tail[1] as u64) << 8;
  }
  if !tail.is_empty() {
    k1 ^= tail[0] as u64;
    k1 = k1.wrapping_mul(C1_X64);
    k1 = rotl64(k1, 31);
    k1 = k1.wrapping_mul(C2_X64);
    h1 ^= k1;
  }

  let len = data.len() as u64;
  h1 ^= len;
  h2 ^= len;

  // Each cross-add reads the value just written by the previous line.
  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  h1 = fmix64(h1);
  h2 = fmix64(h2);

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  ((h2 as u128) << 64) | (h1 as u128)
}

#[inline(always)]
fn hash128_x86(seed: u32, data: &[u8]) -> u128 {
  let mut h1 = seed;
  let mut h2 = seed;
  let mut h3 = seed;
  let mut h4 = seed;

  let (blocks, tail) = data.as_chunks::<16>();
  for block in blocks {
    let (lanes, _) = block.as_chunks::<4>();
    let mut k1 = u32::from_le_bytes(lanes[0]);
    let mut k2 = u32::from_le_bytes(lanes[1]);
    let mut k3 = u32::from_le_bytes(lanes[2]);
    let mut k4 = u32::from_le_bytes(lanes[3]);

    k1 = k1.wrapping_mul(C1_X86);
    k1 = rotl32(k1, 15);
    k1 = k1.wrapping_mul(C2_X86);
    h1 ^= k1;

    h1 = rotl32(h1, 19);
    h1 = h1.wrapping_add(h2);
    h1 = h1.wrapping_mul(5).wrapping_add(0x561c_cd1b);

    k2 = k2.wrapping_mul(C2_X86);
    k2 = rotl32(k2, 16);
    k2 = k2.wrapping_mul(C3_X86);
    h2 ^= k2;

    h2 = rotl32(h2, 17);
    h2 = h2.wrapping_add(h3);
    h2 = h2.wrapping_mul(5).wrapping_add(0x0bca_a747);

    k3 = k3.wrapping_mul(C3_X86);
    k3 = rotl32(k3, 17);
    k3 = k3.wrapping_mul(C4_X86);
    h3 ^= k3;

    h3 = rotl32(h3, 15);
    h3 = h3.wrapping_add(h4);
    h3 = h3.wrapping_mul(5).wrapping_add(0x96cd_1c35);

    k4 = k4.wrapping_mul(C4_X86);
    k4 = rotl32(k4, 18);
    k4 = k4.wrapping_mul(C1_X86);
    h4 ^= k4;

    h4 = rotl32(h4, 13);
    // h1 here is the value this block already finished mixing above.
    h4 = h4.wrapping_add(h1);
    h4 = h4.wrapping_mul(5).wrapping_add(0x32ac_3b17);
  }

  let mut k4 = 0u32;
  if tail.len() >= 15 {
    k4 ^= (tail[14] as u32) << 16;
  }
  if tail.len() >= 14 {
    k4 ^= (tail[13] as u32) << 8;
  }
  if tail.len() >= 13 {
    k4 ^= tail[12] as u32;
    k4 = k4.wrapping_mul(C4_X86);
    k4 = rotl32(k4, 18);
    k4 = k4.wrapping_mul(C1_X86);
    h4 ^= k4;
  }

  let mut k3 = 0u32;
  if tail.len() >= 12 {
    k3 ^= (tail[11] as u32) << 24;
  }
  if tail.len() >= 11 {
    k3 ^= (tail[10] as u32) << 16;
  }
  if tail.len() >= 10 {
    k3 ^= (tail[9] as u32) << 8;
  }
  if tail.len() >= 9 {
    k3 ^= tail[8] as u32;
    k3 = k3.wrapping_mul(C3_X86);
    k3 = rotl32(k3, 17);
    k3 = k3.wrapping_mul(C4_X86);
    h3 ^= k3;
  }

  let mut k2 = 0u32;
  if tail.len() >= 8 {
    k2 ^= (tail[7] as u32) << 24;
  }
  if tail.len() >= 7 {
    k2 ^= (tail[6] as u32) << 16;
  }
  if tail.len() >= 6 {
    k2 ^= (tail[5] as u32) << 8;
  }
  if tail.len() >= 5 {
    k2 ^= tail[4] as u32;
    k2 = k2.wrapping_mul(C2_X86);
    k2 = rotl32(k2, 16);
    k2 = k2.wrapping_mul(C3_X86);
    h2 ^= k2;
  }

  let mut k1 = 0u32;
  if tail.len() >= 4 {
    k1 ^= (tail[3] as u32) << 24;
  }
  if tail.len() >= 3 {
    k1 ^= (tail[2] as u32) << 16;
  }
  if tail.len() >= 2 {
    k1 ^= (tail[1] as u32) << 8;
  }
  if !tail.is_empty() {
    k1 ^= tail[0] as u32;
    k1 = k1.wrapping_mul(C1_X86);
    k1 = rotl32(k1, 15);
    k1 = k1.wrapping_mul(C2_X86);
    h1 ^= k1;
  }

  let len = data.len() as u32;
  h1 ^= len;
  h2 ^= len;
  h3 ^= len;
  h4 ^= len;

  // h1 accumulates all three lanes before the others read it back; the
  // sequence is order-sensitive and must stay exactly as written.
  h1 = h1.wrapping_add(h2);
  h1 = h1.wrapping_add(h3);
  h1 = h1.wrapping_add(h4);
  h2 = h2.wrapping_add(h1);
  h3 = h3.wrapping_add(h1);
  h4 = h4.wrapping_add(h1);

  h1 = fmix32(h1);
  h2 = fmix32(h2);
  h3 = fmix32(h3);
  h4 = fmix32(h4);

  h1 = h1.wrapping_add(h2);
  h1 = h1.wrapping_add(h3);
  h1 = h1.wrapping_add(h4);
  h2 = h2.wrapping_add(h1);
  h3 = h3.wrapping_add(h1);
  h4 = h4.wrapping_add(h1);

  ((h4 as u128) << 96) | ((h3 as u128) << 64) | ((h2 as u128) << 32) | (h1 as u128)
}

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = i32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash32(seed, data)
  }
}

impl FastHash for Murmur3x64_128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash128_x64(seed, data)
  }
}

impl FastHash for Murmur3x86_128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = u128;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash128_x86(seed, data)
  }
}
