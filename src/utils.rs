//! Index helpers shared by the array-backed storage strategies

/// Trait for index calculation strategies
pub trait IndexStrategy {
    /// Calculate the slot index for a logical position
    fn get_index(position: usize, slots: usize) -> usize;
}

/// Simple modulo-based index calculation
pub struct SimpleIndex;

impl IndexStrategy for SimpleIndex {
    #[inline(always)]
    fn get_index(position: usize, slots: usize) -> usize {
        position % slots
    }
}

/// Power-of-2 optimized index calculation
///
/// `slots` must be a power of two.
pub struct PowerOf2Index;

impl IndexStrategy for PowerOf2Index {
    #[inline(always)]
    fn get_index(position: usize, slots: usize) -> usize {
        position & (slots - 1)
    }
}

/// Returns the smallest power of 2 greater than or equal to `n`
pub const fn round_up_to_power_of_2(mut n: usize) -> usize {
    if n == 0 {
        return 1;
    }

    n -= 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    #[cfg(target_pointer_width = "64")]
    {
        n |= n >> 32;
    }
    n + 1
}
