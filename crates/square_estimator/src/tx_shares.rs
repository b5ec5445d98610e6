use maybe_rayon::prelude::*;
use shares::compact_shares_needed;

use crate::{encoder::EnvelopeEncoder, errors::Error, tx::ParsedTransaction, SquareEstimator};

impl<E: EnvelopeEncoder> SquareEstimator<E> {
    /// Estimates the number of compact shares `txs` occupy in a square of `square_size`.
    ///
    /// Every blob carrying transaction is charged the worst case envelope
    /// overhead for `square_size`, so the real number of shares is never
    /// larger than the estimate.
    pub fn estimate_tx_shares(
        &self,
        square_size: u64,
        txs: &[ParsedTransaction],
    ) -> Result<usize, Error> {
        let overhead = self.overhead(square_size)?;

        let tx_bytes: usize = txs
            .maybe_par_iter()
            .map(|tx| tx.max_encoded_len(&overhead))
            .sum();

        Ok(compact_shares_needed(tx_bytes))
    }
}

#[cfg(test)]
mod tests {
    use envelope::{Blob, BlobTx};

    use crate::{ParsedTransaction, SquareEstimator, SquareSizeConstraints};

    fn blob_tx(tx_len: usize, num_blobs: usize) -> ParsedTransaction {
        let blob = Blob {
            namespace_id: vec![1; 28],
            data: vec![2; 100],
            share_version: 0,
            namespace_version: 0,
        };
        BlobTx::new(vec![3; tx_len], vec![blob; num_blobs]).into()
    }

    #[test]
    fn no_txs_need_no_shares() {
        let estimator: SquareEstimator = SquareEstimator::default();
        assert_eq!(estimator.estimate_tx_shares(128, &[]).expect("estimates"), 0);
    }

    #[test]
    fn plain_txs_are_delimited() {
        let estimator: SquareEstimator = SquareEstimator::default();

        let txs = vec![ParsedTransaction::Plain { tx: vec![0; 10] }];
        assert_eq!(estimator.estimate_tx_shares(128, &txs).expect("estimates"), 1);

        // 472 + 2 byte delimiter fills the first share exactly.
        let txs = vec![ParsedTransaction::Plain { tx: vec![0; 472] }];
        assert_eq!(estimator.estimate_tx_shares(128, &txs).expect("estimates"), 1);

        // 473 + 2 byte delimiter spills into a continuation share.
        let txs = vec![ParsedTransaction::Plain { tx: vec![0; 473] }];
        assert_eq!(estimator.estimate_tx_shares(128, &txs).expect("estimates"), 2);
    }

    #[test]
    fn blob_txs_are_charged_worst_case_overhead() {
        let estimator: SquareEstimator = SquareEstimator::default();

        // At square size 128 the wrapper costs 16 bytes and each index 5.
        // 400 + 16 + 5 * 10 = 466, plus a 2 byte delimiter = 468.
        let txs = vec![blob_tx(400, 10)];
        assert_eq!(estimator.estimate_tx_shares(128, &txs).expect("estimates"), 1);

        // 400 + 16 + 5 * 12 = 476, plus a 2 byte delimiter = 478.
        let txs = vec![blob_tx(400, 12)];
        assert_eq!(estimator.estimate_tx_shares(128, &txs).expect("estimates"), 2);
    }

    #[test]
    fn order_does_not_matter() {
        let estimator =
            SquareEstimator::new(SquareSizeConstraints::new(1, 64).expect("valid constraints"))
                .expect("valid constraints");

        let mut txs: Vec<_> = (0..50)
            .map(|i| {
                if i % 3 == 0 {
                    blob_tx(90 + i, 1 + i % 4)
                } else {
                    ParsedTransaction::Plain { tx: vec![9; 40 * i] }
                }
            })
            .collect();

        let forward = estimator.estimate_tx_shares(64, &txs).expect("estimates");
        txs.reverse();
        let backward = estimator.estimate_tx_shares(64, &txs).expect("estimates");
        assert_eq!(forward, backward);
    }
}
