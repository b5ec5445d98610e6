#[cfg(all(feature = "singlethreaded", feature = "multithreaded"))]
compile_error!("`singlethreaded` and `multithreaded` cannot be enabled simultaneously");

mod calibrator;
mod config;
pub mod constants;
mod encoder;
mod errors;
mod square_size;
mod tx;
mod tx_shares;

use std::{collections::BTreeMap, sync::RwLock};

// Exported types
//
pub use calibrator::Overhead;
pub use config::{SquareSizeConstraints, WorstCasePadding};
pub use encoder::{EnvelopeEncoder, ProtobufEnvelope};
pub use errors::{CalibrationError, ConfigError, Error};
pub use square_size::LayoutEstimate;
pub use tx::{parse_txs, ParsedTransaction};

/// `SquareEstimator` over estimates the square a block needs, so that the
/// block's transactions and blobs are guaranteed to fit.
///
/// It holds:
/// - the constraints the returned square size must respect,
/// - the envelope encoder whose worst case overhead is being accounted for,
/// - the overhead already measured for each square size.
///
/// Estimating is a pure computation; an estimator can be shared between
/// threads and reused across blocks.
#[derive(Debug)]
pub struct SquareEstimator<E = ProtobufEnvelope> {
    constraints: SquareSizeConstraints,
    encoder: E,
    overheads: RwLock<BTreeMap<u64, Overhead>>,
}

impl Default for SquareEstimator {
    fn default() -> Self {
        Self {
            constraints: SquareSizeConstraints::default(),
            encoder: ProtobufEnvelope,
            overheads: RwLock::default(),
        }
    }
}

impl SquareEstimator {
    /// Creates an estimator that accounts for the protobuf index wrapper.
    pub fn new(constraints: SquareSizeConstraints) -> Result<Self, Error> {
        Self::with_encoder(constraints, ProtobufEnvelope)
    }
}

impl<E: EnvelopeEncoder> SquareEstimator<E> {
    /// Creates an estimator that accounts for the overhead of `encoder`.
    ///
    /// Fails if the constraints do not describe a usable range of square sizes.
    pub fn with_encoder(constraints: SquareSizeConstraints, encoder: E) -> Result<Self, Error> {
        constraints.validate()?;
        Ok(Self {
            constraints,
            encoder,
            overheads: RwLock::default(),
        })
    }

    pub const fn constraints(&self) -> &SquareSizeConstraints {
        &self.constraints
    }
}

/// Estimates the square size and the first non reserved share index for `txs`.
///
/// This is a convenience for one off estimates. Keep a `SquareEstimator`
/// around instead when estimating repeatedly, so that the envelope overhead
/// is only measured once.
pub fn estimate_square_size(
    constraints: &SquareSizeConstraints,
    txs: &[ParsedTransaction],
) -> Result<LayoutEstimate, Error> {
    SquareEstimator::new(constraints.clone())?.estimate_square_size(txs)
}
