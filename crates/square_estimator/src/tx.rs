use envelope::{blob_tx_shares_used, unmarshal_blob_tx, BlobTx};
use shares::delim_len;

use crate::calibrator::Overhead;

/// A transaction destined for the block, classified by whether it carries blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedTransaction {
    /// An ordinary transaction, stored in the square as is.
    Plain { tx: Vec<u8> },
    /// A transaction that pays for blobs. In the square its blobs are moved
    /// to their own namespaces and `tx` is replaced by an index wrapper.
    BlobCarrier(BlobTx),
}

impl From<BlobTx> for ParsedTransaction {
    fn from(blob_tx: BlobTx) -> Self {
        Self::BlobCarrier(blob_tx)
    }
}

impl ParsedTransaction {
    /// The largest number of delimited bytes this transaction can occupy in
    /// the compact shares, given the worst case envelope overhead.
    pub fn max_encoded_len(&self, overhead: &Overhead) -> usize {
        let len = match self {
            Self::Plain { tx } => tx.len(),
            Self::BlobCarrier(blob_tx) => {
                blob_tx.tx.len() + overhead.wrapper + overhead.per_index * blob_tx.blobs.len()
            }
        };
        // The delimiter covers the wrapped length, it is part of the stream too.
        len + delim_len(len as u64)
    }

    /// The number of sparse shares the blobs of this transaction occupy.
    pub fn blob_shares_used(&self) -> usize {
        match self {
            Self::Plain { .. } => 0,
            Self::BlobCarrier(blob_tx) => blob_tx_shares_used(blob_tx),
        }
    }
}

/// Classifies raw block transactions.
///
/// Anything that decodes as a blob transaction is treated as one, everything
/// else is a plain transaction. Order is preserved and nothing is validated.
pub fn parse_txs<T: AsRef<[u8]>>(raw_txs: &[T]) -> Vec<ParsedTransaction> {
    raw_txs
        .iter()
        .map(|raw_tx| {
            let raw_tx = raw_tx.as_ref();
            unmarshal_blob_tx(raw_tx).map_or_else(
                || ParsedTransaction::Plain {
                    tx: raw_tx.to_vec(),
                },
                ParsedTransaction::BlobCarrier,
            )
        })
        .collect()
}
