use kbpad_bit_derive::Bit;
use kbpad_bit_mask::{Bitable, Bitmask};

#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq)]
enum Sequential {
    First,
    Second,
    Third,
}

#[derive(Bit, Debug, Clone, Copy, PartialEq, Eq)]
enum Sparse {
    Low,
    #[bit(12)]
    High,
    Next,
}

#[test]
fn sequential_variants_take_consecutive_bits() {
    assert_eq!(Sequential::First.bit(), 1);
    assert_eq!(Sequential::Second.bit(), 1 << 1);
    assert_eq!(Sequential::Third.bit(), 1 << 2);
    assert_eq!(Sequential::Third.index(), 2);
}

#[test]
fn explicit_position_moves_following_variants() {
    assert_eq!(Sparse::Low.index(), 0);
    assert_eq!(Sparse::High.index(), 12);
    assert_eq!(Sparse::Next.index(), 13);
    assert_eq!(Sparse::High.bit(), 0x1000);
}

#[test]
fn derived_values_pack_into_a_mask() {
    let mask = Bitmask::new(&[Sparse::Low, Sparse::Next]);
    assert_eq!(mask.bits(), 0x2001);
    assert!(!mask.contains(Sparse::High));
}
