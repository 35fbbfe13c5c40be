// Rotations are kept as standalone width-parameterized helpers so every kernel
// spells out which word width it rotates in. `rotate_left` compiles to the
// native rotate where one exists and to shift/or everywhere else, with
// identical results on all targets.

#[inline(always)]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}

#[inline(always)]
pub const fn rotl64(x: u64, n: u32) -> u64 {
  x.rotate_left(n)
}
