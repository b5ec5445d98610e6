/// The factor by which the estimated number of shares is inflated to cover padding.
///
/// Note: In the worst case 37.5% of the square, plus `WORST_CASE_PADDING_BASE`
/// shares, is lost to padding between blobs of different namespaces.
/// This is a protocol tuning value, it is not derived.
pub const WORST_CASE_PADDING_COEFFICIENT: f64 = 1.625;

/// The number of shares added on top of the inflated estimate to cover
/// padding at the edges of the square.
pub const WORST_CASE_PADDING_BASE: f64 = 3.0;

/// The largest square size that can be configured or calibrated.
///
/// Note: Calibrating a square size allocates `square_size^2` continuation
/// shares worth of bytes, about 125 MB at this limit.
pub const MAX_SQUARE_SIZE_LIMIT: u64 = 1 << 9;
