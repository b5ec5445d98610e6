//! Protobuf wire formats that carry blobs through a block.
//!
//! A user submits a [`BlobTx`]: a signed transaction plus the blobs it pays
//! for. When the block is laid out, the blobs move to their own namespaces and
//! the transaction is re-encoded as an [`IndexWrapper`] that records the share
//! index at which each of its blobs starts.

mod blob_tx;
mod errors;
mod index_wrapper;

pub use blob_tx::{blob_tx_shares_used, marshal_blob_tx, unmarshal_blob_tx, Blob, BlobTx};
pub use errors::Error;
pub use index_wrapper::{marshal_index_wrapper, unmarshal_index_wrapper, IndexWrapper};

/// Type id carried by every encoded [`IndexWrapper`].
pub const INDEX_WRAPPER_TYPE_ID: &str = "INDX";

/// Type id carried by every encoded [`BlobTx`].
pub const BLOB_TX_TYPE_ID: &str = "BLOB";
