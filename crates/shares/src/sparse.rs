use crate::constants::{CONTINUATION_SPARSE_SHARE_CONTENT_SIZE, FIRST_SPARSE_SHARE_CONTENT_SIZE};

/// Returns the number of sparse shares needed to hold a blob of `sequence_len` bytes.
///
/// Sparse shares hold a single blob each, so unlike compact shares there
/// are no delimiters or reserved bytes to account for.
pub const fn sparse_shares_needed(sequence_len: u32) -> usize {
    let sequence_len = sequence_len as usize;
    if sequence_len == 0 {
        return 0;
    }
    if sequence_len <= FIRST_SPARSE_SHARE_CONTENT_SIZE {
        return 1;
    }
    let remaining = sequence_len - FIRST_SPARSE_SHARE_CONTENT_SIZE;
    1 + remaining.div_ceil(CONTINUATION_SPARSE_SHARE_CONTENT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_shares_needed_boundaries() {
        assert_eq!(sparse_shares_needed(0), 0);
        assert_eq!(sparse_shares_needed(1), 1);
        assert_eq!(sparse_shares_needed(256), 1);
        assert_eq!(sparse_shares_needed(478), 1);
        assert_eq!(sparse_shares_needed(479), 2);
        assert_eq!(sparse_shares_needed(478 + 482), 2);
        assert_eq!(sparse_shares_needed(478 + 482 + 1), 3);
    }
}
