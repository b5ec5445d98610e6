/// Errors that can occur while encoding an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index wrapper must point at the start of at least one blob.
    NoShareIndexes,
}
