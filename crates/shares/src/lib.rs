pub mod constants;
mod compact;
mod delimiter;
mod errors;
mod namespace;
mod sparse;

pub use compact::{compact_shares_needed, CompactShareSplitter};
pub use delimiter::{delim_len, marshal_delimited};
pub use errors::Error;
pub use namespace::{Namespace, PAY_FOR_BLOB_NAMESPACE, TX_NAMESPACE};
pub use sparse::sparse_shares_needed;

use constants::SHARE_SIZE;

/// `Share` is a single fixed size chunk of the data square.
///
/// Note: These are heap allocated, a square can hold tens of thousands of them.
pub type Share = Box<[u8; SHARE_SIZE]>;

/// Returns the smallest power of two that is greater than or equal to `input`.
///
/// Inputs of zero and one both round up to one.
pub const fn round_up_power_of_two(input: u64) -> u64 {
    input.next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::round_up_power_of_two;

    #[test]
    fn round_up_power_of_two_edges() {
        assert_eq!(round_up_power_of_two(0), 1);
        assert_eq!(round_up_power_of_two(1), 1);
        assert_eq!(round_up_power_of_two(2), 2);
        assert_eq!(round_up_power_of_two(3), 4);
        assert_eq!(round_up_power_of_two(15), 16);
        assert_eq!(round_up_power_of_two(16), 16);
        assert_eq!(round_up_power_of_two(17), 32);
        assert_eq!(round_up_power_of_two(1 << 40), 1 << 40);
    }

    #[test]
    fn round_up_power_of_two_is_power_of_two() {
        for input in 0..5000u64 {
            let got = round_up_power_of_two(input);
            assert!(got.is_power_of_two());
            assert!(got >= input);
            assert!(got / 2 < input.max(1));
        }
    }
}
