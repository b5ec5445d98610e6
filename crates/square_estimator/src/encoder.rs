/// Wraps a transaction together with the share indexes of its blobs.
///
/// The calibrator measures the worst case overhead of the wire format by
/// encoding synthetic inputs, so any implementation must be deterministic and
/// its output length must not shrink when the payload, the number of indexes,
/// or an index grows.
pub trait EnvelopeEncoder: Send + Sync {
    fn wrap(&self, tx: &[u8], share_indexes: &[u32]) -> Result<Vec<u8>, envelope::Error>;
}

/// The protobuf index wrapper that ends up in the square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtobufEnvelope;

impl EnvelopeEncoder for ProtobufEnvelope {
    fn wrap(&self, tx: &[u8], share_indexes: &[u32]) -> Result<Vec<u8>, envelope::Error> {
        envelope::marshal_index_wrapper(tx, share_indexes)
    }
}
