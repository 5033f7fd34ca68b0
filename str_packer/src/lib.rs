//! Packs a literal byte string into a fixed array of 16-bit code units, two bytes per unit,
//! with a configurable byte order and zero padding.  Handy for building the fixed-width text
//! records some display/firmware interfaces want out of plain string literals.
//!
//! [`pack`] is a `const fn`, so the table can be built at compile time:
//!
//! ```
//! use str_packer::{pack, ByteOrder};
//!
//! const LABEL: [u16; 8] = pack(b"HELLO123", ByteOrder::Big);
//! assert_eq!(LABEL, [0x4845, 0x4c4c, 0x4f31, 0x3233, 0, 0, 0, 0]);
//! ```
//!
//! Completely standalone; nothing here touches the numeric crates.

/// Which of each pair of input bytes lands in the high octet of the output unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
  /// Earlier byte in the high octet.
  Big,
  /// Earlier byte in the low octet.
  Little,
}

/// Reads byte `ix` of `s`, or 0 past the end.
const fn byte_at(s: &[u8], ix: usize) -> u16 {
  if ix < s.len() {
    s[ix] as u16
  } else {
    0
  }
}

/// Packs the first 16 bytes of `s` into eight 16-bit units, two bytes per unit.
///
/// Missing bytes read as zero, so short inputs zero-pad the tail and an odd-length input
/// zero-fills the open half of its final unit.  Bytes past the first 16 are ignored.
pub const fn pack(s: &[u8], order: ByteOrder) -> [u16; 8] {
  let mut out = [0u16; 8];
  let mut ix = 0;
  while ix < out.len() {
    let a = byte_at(s, ix * 2);
    let b = byte_at(s, ix * 2 + 1);
    out[ix] = match order {
      ByteOrder::Big => a << 8 | b,
      ByteOrder::Little => b << 8 | a,
    };
    ix += 1;
  }
  out
}

#[test]
fn packs_big_endian() {
  assert_eq!(pack(b"HELLO123", ByteOrder::Big), [
    0x4845, 0x4c4c, 0x4f31, 0x3233, 0, 0, 0, 0
  ]);
}

#[test]
fn packs_little_endian() {
  assert_eq!(pack(b"HELLO123", ByteOrder::Little), [
    0x4548, 0x4c4c, 0x314f, 0x3332, 0, 0, 0, 0
  ]);
}

#[test]
fn zero_fills_odd_lengths_and_padding() {
  assert_eq!(pack(b"ABC", ByteOrder::Big), [0x4142, 0x4300, 0, 0, 0, 0, 0, 0]);
  assert_eq!(pack(b"ABC", ByteOrder::Little), [0x4241, 0x0043, 0, 0, 0, 0, 0, 0]);
  assert_eq!(pack(b"", ByteOrder::Big), [0; 8]);
}

#[test]
fn ignores_bytes_past_sixteen() {
  let full = pack(b"0123456789abcdef__extra", ByteOrder::Big);
  assert_eq!(full, pack(b"0123456789abcdef", ByteOrder::Big));
  assert_eq!(full[7], (b'e' as u16) << 8 | b'f' as u16);
}

#[test]
fn usable_in_const_context() {
  const PACKED: [u16; 8] = pack(b"Hi", ByteOrder::Big);
  assert_eq!(PACKED[0], 0x4869);
  assert_eq!(PACKED[1..], [0; 7]);
}
