use maybe_rayon::prelude::*;
use shares::round_up_power_of_two;

use crate::{
    config::SquareSizeConstraints, encoder::EnvelopeEncoder, errors::Error,
    tx::ParsedTransaction, SquareEstimator,
};

/// Where a block's data goes in the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEstimate {
    /// The side length of the square, in shares. Always a power of two.
    pub square_size: u64,
    /// The index of the first share that blobs may use. Shares before it are
    /// reserved for transactions.
    pub non_reserved_start: usize,
}

impl LayoutEstimate {
    /// The number of shares in the square.
    pub const fn capacity(&self) -> u64 {
        self.square_size * self.square_size
    }

    /// Returns true if `share_count` shares fit in the square.
    ///
    /// Note: The estimate is capped at the maximum square size, so a block
    /// that is too large still gets an estimate. Callers that build the
    /// square must check that the real share count fits.
    pub const fn fits(&self, share_count: usize) -> bool {
        share_count as u64 <= self.capacity()
    }
}

impl<E: EnvelopeEncoder> SquareEstimator<E> {
    /// Estimates the size of the square needed to hold `txs` and the index
    /// of the first share available to blobs.
    ///
    /// The estimate is deliberately liberal: the transaction shares assume
    /// the worst case envelope overhead of the largest square, and the total
    /// is inflated by the worst case padding before rounding up to a power
    /// of two. Over estimating only costs some padding.
    pub fn estimate_square_size(&self, txs: &[ParsedTransaction]) -> Result<LayoutEstimate, Error> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("estimate_square_size", num_txs = txs.len()).entered();

        let SquareSizeConstraints {
            min_square_size,
            max_square_size,
            padding,
            ..
        } = self.constraints;

        // Calibrated against the largest square so that the estimate holds
        // whichever size is picked below.
        let tx_shares = self.estimate_tx_shares(max_square_size, txs)?;
        let blob_shares: usize = txs
            .maybe_par_iter()
            .map(ParsedTransaction::blob_shares_used)
            .sum();

        let total_shares = (tx_shares + blob_shares) as f64;
        if total_shares <= 1.0 {
            return Ok(LayoutEstimate {
                square_size: min_square_size,
                non_reserved_start: tx_shares,
            });
        }

        let padded_shares = padding.apply(total_shares);
        let min_side = padded_shares.sqrt().ceil() as u64;
        let rounded = round_up_power_of_two(min_side);
        let square_size = rounded.clamp(min_square_size, max_square_size);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                tx_shares,
                blob_shares,
                padded_shares,
                square_size,
                "estimated square size"
            );
            if rounded > max_square_size {
                tracing::warn!(
                    needed = rounded,
                    max_square_size,
                    "estimated square size exceeds the maximum, the block may not fit"
                );
            }
        }

        Ok(LayoutEstimate {
            square_size,
            non_reserved_start: tx_shares,
        })
    }
}
