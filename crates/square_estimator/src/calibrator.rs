use std::sync::PoisonError;

use shares::delim_len;

use crate::{
    constants::MAX_SQUARE_SIZE_LIMIT,
    encoder::EnvelopeEncoder,
    errors::{CalibrationError, Error},
    SquareEstimator,
};

/// The worst case number of bytes the envelope adds to a transaction in a
/// square of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overhead {
    /// Bytes added by wrapping a transaction, measured with a single index.
    pub wrapper: usize,
    /// Bytes charged for every blob the transaction pays for.
    pub per_index: usize,
}

impl<E: EnvelopeEncoder> SquareEstimator<E> {
    /// Returns the worst case overhead of wrapping a transaction in a square
    /// of `square_size`.
    ///
    /// Both figures are measured by encoding synthetic maximal inputs with
    /// the envelope encoder. They only depend on `square_size`, so they are
    /// computed once per square size and then served from memory.
    pub fn overhead(&self, square_size: u64) -> Result<Overhead, Error> {
        if let Some(overhead) = self.cached_overhead(square_size) {
            return Ok(overhead);
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("calibrate_overhead", square_size).entered();

        let (wrapper, per_index) = maybe_rayon::join(
            || self.max_index_wrapper_overhead(square_size),
            || self.max_index_overhead(square_size),
        );
        let overhead = Overhead {
            wrapper: wrapper?,
            per_index: per_index?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            square_size,
            wrapper = overhead.wrapper,
            per_index = overhead.per_index,
            "calibrated envelope overhead"
        );

        self.overheads
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(square_size, overhead);

        Ok(overhead)
    }

    /// Calculates the maximum number of bytes introduced by wrapping a
    /// transaction with a share index.
    ///
    /// The probe is the largest transaction that could fit in the square,
    /// wrapped with the largest share index, so every length field is at its
    /// widest.
    ///
    /// Note: This allocates `square_size^2 * continuation_share_content_size` bytes.
    pub fn max_index_wrapper_overhead(&self, square_size: u64) -> Result<usize, Error> {
        let max_share_index = max_share_index(square_size)?;
        let max_tx = zeroed_probe(
            square_size,
            max_share_index,
            self.constraints.continuation_share_content_size,
        )?;

        let wrapped = self.wrap(square_size, &max_tx, &[max_share_index])?;

        Ok(grown_by(square_size, max_tx.len(), wrapped.len())?)
    }

    /// Calculates the maximum number of bytes that adding one more share index
    /// to an index wrapper can cost.
    ///
    /// The marginal cost of a second index is measured, then the width of the
    /// largest share index varint is added on top.
    ///
    /// Note: `max_index_wrapper_overhead` already accounts for one index, so
    /// the first blob of every transaction is charged twice. Do not remove
    /// either term without re-deriving the bound from the wire format.
    pub fn max_index_overhead(&self, square_size: u64) -> Result<usize, Error> {
        let max_share_index = max_share_index(square_size)?;
        let max_index_len = delim_len(u64::from(max_share_index));

        let one_index = self.wrap(square_size, &[0u8], &[max_share_index])?;
        let two_indexes = self.wrap(
            square_size,
            &[0u8],
            &[max_share_index, max_share_index - 1],
        )?;

        Ok(grown_by(square_size, one_index.len(), two_indexes.len())? + max_index_len)
    }

    fn wrap(
        &self,
        square_size: u64,
        tx: &[u8],
        share_indexes: &[u32],
    ) -> Result<Vec<u8>, CalibrationError> {
        self.encoder
            .wrap(tx, share_indexes)
            .map_err(|source| CalibrationError::Encoder {
                square_size,
                source,
            })
    }

    fn cached_overhead(&self, square_size: u64) -> Option<Overhead> {
        self.overheads
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&square_size)
            .copied()
    }
}

/// The number of shares in a square of `square_size`, which is also the
/// largest share index the envelope may have to encode.
fn max_share_index(square_size: u64) -> Result<u32, CalibrationError> {
    if square_size == 0 || square_size > MAX_SQUARE_SIZE_LIMIT {
        return Err(CalibrationError::InvalidSquareSize { square_size });
    }
    u32::try_from(square_size * square_size)
        .map_err(|_| CalibrationError::InvalidSquareSize { square_size })
}

/// Allocates the zeroed transaction that fills every share of the square.
fn zeroed_probe(
    square_size: u64,
    num_shares: u32,
    content_size: usize,
) -> Result<Vec<u8>, CalibrationError> {
    let too_large = || CalibrationError::ProbeTooLarge {
        square_size,
        num_shares,
        content_size,
    };

    let len = usize::try_from(num_shares)
        .ok()
        .and_then(|num_shares| num_shares.checked_mul(content_size))
        .ok_or_else(too_large)?;

    let mut probe = Vec::new();
    probe.try_reserve_exact(len).map_err(|_| too_large())?;
    probe.resize(len, 0);
    Ok(probe)
}

fn grown_by(square_size: u64, shorter: usize, longer: usize) -> Result<usize, CalibrationError> {
    longer
        .checked_sub(shorter)
        .ok_or(CalibrationError::EncodedLenShrank {
            square_size,
            shorter,
            longer,
        })
}
