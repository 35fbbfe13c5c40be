#![no_main]

use std::io::Cursor;

use hashes::fast::{Murmur3_32, Murmur3x64_128, Murmur3x86_128};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let seed_bytes_len = core::cmp::min(4, input.len());
  let (seed_bytes, data) = input.split_at(seed_bytes_len);

  let mut tmp = [0u8; 4];
  tmp[..seed_bytes.len()].copy_from_slice(seed_bytes);
  let seed = u32::from_le_bytes(tmp);

  let ours32 = Murmur3_32::hash_with_seed(seed, data);
  let ours_x64 = Murmur3x64_128::hash_with_seed(seed as u64, data);
  let ours_x86 = Murmur3x86_128::hash_with_seed(seed, data);

  let exp32 = murmur3::murmur3_32(&mut Cursor::new(data), seed).unwrap();
  let exp_x64 = murmur3::murmur3_x64_128(&mut Cursor::new(data), seed).unwrap();
  let exp_x86 = murmur3::murmur3_x86_128(&mut Cursor::new(data), seed).unwrap();

  assert_eq!(ours32 as u32, exp32);
  assert_eq!(ours_x64, exp_x64);
  assert_eq!(ours_x86, exp_x86);
});
