use prost::Message;
use shares::sparse_shares_needed;

use crate::BLOB_TX_TYPE_ID;

/// An opaque payload stored in its own namespace.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct Blob {
    #[prost(bytes = "vec", tag = "1")]
    pub namespace_id: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
    #[prost(uint32, tag = "3")]
    pub share_version: u32,
    #[prost(uint32, tag = "4")]
    pub namespace_version: u32,
}

/// A transaction bundled with the blobs it pays for.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct BlobTx {
    #[prost(bytes = "vec", tag = "1")]
    pub tx: Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub blobs: Vec<Blob>,
    #[prost(string, tag = "3")]
    pub type_id: String,
}

impl BlobTx {
    pub fn new(tx: Vec<u8>, blobs: Vec<Blob>) -> Self {
        Self {
            tx,
            blobs,
            type_id: BLOB_TX_TYPE_ID.to_owned(),
        }
    }
}

/// Encodes `tx` and `blobs` as a blob transaction.
pub fn marshal_blob_tx(tx: &[u8], blobs: &[Blob]) -> Vec<u8> {
    BlobTx::new(tx.to_vec(), blobs.to_vec()).encode_to_vec()
}

/// Decodes `bytes` as a blob transaction.
///
/// Returns `None` for anything that is not a protobuf encoded blob
/// transaction with the expected type id, which is how ordinary
/// transactions are told apart from blob transactions.
pub fn unmarshal_blob_tx(bytes: &[u8]) -> Option<BlobTx> {
    let blob_tx = BlobTx::decode(bytes).ok()?;
    (blob_tx.type_id == BLOB_TX_TYPE_ID).then_some(blob_tx)
}

/// Returns the number of sparse shares the blobs of `blob_tx` occupy.
///
/// Each blob starts in a fresh share, so the result does not depend on the
/// size of the square the blobs end up in.
pub fn blob_tx_shares_used(blob_tx: &BlobTx) -> usize {
    blob_tx
        .blobs
        .iter()
        .map(|blob| blob_shares_used(blob.data.len()))
        .sum()
}

/// Blob lengths are `u32` in the share format. Longer blobs are counted as
/// the longest representable one, which already needs millions of shares
/// and so can never fit in a square.
fn blob_shares_used(len: usize) -> usize {
    sparse_shares_needed(u32::try_from(len).unwrap_or(u32::MAX))
}
