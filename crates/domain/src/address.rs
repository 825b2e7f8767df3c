//! Byte address → (set index, tag) decomposition.
//!
//! Layout of an address, low bits on the right:
//!
//! ```text
//! | tag | set index (log2 num_sets) | block offset (log2 block_size) |
//! ```
//!
//! Both widths come from power-of-two sizes, so the split is pure shifting
//! and masking. The power-of-two precondition is checked once when the
//! [`CacheGeometry`](crate::CacheGeometry) is built, never per address.

/// Set index and tag of one byte address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedAddress {
    pub set_index: usize,
    pub tag: u64,
}

/// Precomputed shift amounts for a validated geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressDecoder {
    block_offset_bits: u32,
    set_index_bits: u32,
    set_mask: u64,
}

impl AddressDecoder {
    /// Both arguments must be non-zero powers of two.
    pub(crate) fn new(block_size: u64, num_sets: u64) -> Self {
        debug_assert!(block_size.is_power_of_two());
        debug_assert!(num_sets.is_power_of_two());

        Self {
            block_offset_bits: block_size.trailing_zeros(),
            set_index_bits: num_sets.trailing_zeros(),
            set_mask: num_sets - 1,
        }
    }

    #[inline]
    pub fn decode(&self, address: u64) -> DecodedAddress {
        let block_number = address >> self.block_offset_bits;
        let tag = address
            .checked_shr(self.block_offset_bits + self.set_index_bits)
            .unwrap_or(0);

        DecodedAddress {
            set_index: (block_number & self.set_mask) as usize,
            tag,
        }
    }

    pub fn block_offset_bits(&self) -> u32 {
        self.block_offset_bits
    }

    pub fn set_index_bits(&self) -> u32 {
        self.set_index_bits
    }
}
