mod derive;

use proc_macro::TokenStream;

use crate::derive::handle_derive_bit;

/// Implements `kbpad_bit_mask::Bitable` for a fieldless enum.
///
/// Variants take consecutive bit positions starting at zero. A variant
/// annotated with `#[bit(n)]` is placed at position `n` and the following
/// variants continue from `n + 1`.
#[proc_macro_derive(Bit, attributes(bit))]
pub fn derive_bit(input: TokenStream) -> TokenStream {
    handle_derive_bit(input)
}
