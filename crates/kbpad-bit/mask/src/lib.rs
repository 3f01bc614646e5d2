mod bitmask;

pub use bitmask::Bitmask;

/// A value that occupies a single bit position in a [`Bitmask`].
pub trait Bitable {
    fn bit(&self) -> u64;
    fn index(&self) -> u32;
}
