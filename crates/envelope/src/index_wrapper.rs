use prost::Message;

use crate::{errors::Error, INDEX_WRAPPER_TYPE_ID};

/// A transaction that pays for blobs, together with the share index at which
/// each of those blobs starts in the square.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct IndexWrapper {
    #[prost(bytes = "vec", tag = "1")]
    pub tx: Vec<u8>,
    #[prost(uint32, repeated, tag = "2")]
    pub share_indexes: Vec<u32>,
    #[prost(string, tag = "3")]
    pub type_id: String,
}

impl IndexWrapper {
    pub fn new(tx: Vec<u8>, share_indexes: Vec<u32>) -> Self {
        Self {
            tx,
            share_indexes,
            type_id: INDEX_WRAPPER_TYPE_ID.to_owned(),
        }
    }
}

/// Wraps `tx` with the share indexes of its blobs and encodes the result.
///
/// The encoded length grows with the length of `tx`, with the number of
/// indexes and with the magnitude of each index (indexes are varints).
pub fn marshal_index_wrapper(tx: &[u8], share_indexes: &[u32]) -> Result<Vec<u8>, Error> {
    if share_indexes.is_empty() {
        return Err(Error::NoShareIndexes);
    }
    Ok(IndexWrapper::new(tx.to_vec(), share_indexes.to_vec()).encode_to_vec())
}

/// Decodes `bytes` as an index wrapper.
///
/// Returns `None` if the bytes are not a protobuf encoded index wrapper with
/// the expected type id.
pub fn unmarshal_index_wrapper(bytes: &[u8]) -> Option<IndexWrapper> {
    let index_wrapper = IndexWrapper::decode(bytes).ok()?;
    (index_wrapper.type_id == INDEX_WRAPPER_TYPE_ID).then_some(index_wrapper)
}
