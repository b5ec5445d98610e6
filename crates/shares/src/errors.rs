/// Errors that can occur while constructing namespaces or shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Only version zero namespaces are supported.
    UnsupportedNamespaceVersion {
        /// The version that was requested.
        version: u8,
    },
    /// The namespace id did not have exactly `NAMESPACE_ID_SIZE` bytes.
    InvalidNamespaceIdLength {
        /// Number of bytes that were provided.
        length: usize,
        /// Number of bytes that were expected.
        expected: usize,
    },
    /// A version zero sub id was longer than the user controlled part of the id.
    SubIdTooLong {
        /// Number of bytes that were provided.
        length: usize,
        /// Maximum number of bytes accepted.
        max_length: usize,
    },
    /// A compact sequence would be longer than its `u32` length field allows.
    SequenceTooLong {
        /// Bytes already in the sequence.
        sequence_len: usize,
        /// Length of the transaction that did not fit.
        tx_len: usize,
    },
    /// The share version does not fit into the info byte.
    InvalidShareVersion {
        /// The version that was requested.
        version: u8,
    },
}
