use serde::{Deserialize, Serialize};
use shares::constants::{
    CONTINUATION_COMPACT_SHARE_CONTENT_SIZE, DEFAULT_MAX_SQUARE_SIZE, DEFAULT_MIN_SQUARE_SIZE,
};

use crate::{
    constants::{MAX_SQUARE_SIZE_LIMIT, WORST_CASE_PADDING_BASE, WORST_CASE_PADDING_COEFFICIENT},
    errors::ConfigError,
};

/// The bounds the estimator works within.
///
/// These are fixed for a given protocol version and are passed explicitly to
/// every estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SquareSizeConstraints {
    /// The smallest square size that may be returned. Must be a power of two.
    pub min_square_size: u64,
    /// The largest square size that may be returned. Must be a power of two.
    pub max_square_size: u64,
    /// The number of data bytes in a compact share that continues a sequence.
    pub continuation_share_content_size: usize,
    /// How the share count is inflated to make room for padding.
    pub padding: WorstCasePadding,
}

impl Default for SquareSizeConstraints {
    fn default() -> Self {
        Self {
            min_square_size: DEFAULT_MIN_SQUARE_SIZE,
            max_square_size: DEFAULT_MAX_SQUARE_SIZE,
            continuation_share_content_size: CONTINUATION_COMPACT_SHARE_CONTENT_SIZE,
            padding: WorstCasePadding::default(),
        }
    }
}

/// Models the shares lost to padding as `shares * coefficient + base`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorstCasePadding {
    pub coefficient: f64,
    pub base: f64,
}

impl Default for WorstCasePadding {
    fn default() -> Self {
        Self {
            coefficient: WORST_CASE_PADDING_COEFFICIENT,
            base: WORST_CASE_PADDING_BASE,
        }
    }
}

impl WorstCasePadding {
    /// Inflates `shares` by the worst case padding.
    pub fn apply(&self, shares: f64) -> f64 {
        shares.mul_add(self.coefficient, self.base)
    }
}

impl SquareSizeConstraints {
    /// Creates constraints with the default content size and padding.
    pub fn new(min_square_size: u64, max_square_size: u64) -> Result<Self, ConfigError> {
        let constraints = Self {
            min_square_size,
            max_square_size,
            ..Self::default()
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Parses and validates constraints from json.
    ///
    /// Missing fields take their default value, for example:
    /*
    {
      "min_square_size": 1,
      "max_square_size": 64,
      "padding": { "coefficient": 1.625, "base": 3.0 }
    }
    */
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let constraints: Self = serde_json::from_str(json)?;
        constraints.validate()?;
        Ok(constraints)
    }

    /// Checks that the constraints describe a usable range of square sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_square_size", self.min_square_size),
            ("max_square_size", self.max_square_size),
        ] {
            if !value.is_power_of_two() {
                return Err(ConfigError::NotPowerOfTwo { field, value });
            }
        }

        if self.min_square_size > self.max_square_size {
            return Err(ConfigError::MinExceedsMax {
                min: self.min_square_size,
                max: self.max_square_size,
            });
        }

        if self.max_square_size > MAX_SQUARE_SIZE_LIMIT {
            return Err(ConfigError::MaxSquareSizeTooLarge {
                max: self.max_square_size,
                limit: MAX_SQUARE_SIZE_LIMIT,
            });
        }

        if self.continuation_share_content_size == 0 {
            return Err(ConfigError::ZeroContentSize);
        }

        let WorstCasePadding { coefficient, base } = self.padding;
        if !(coefficient.is_finite() && coefficient >= 1.0 && base.is_finite() && base >= 0.0) {
            return Err(ConfigError::InvalidPadding { coefficient, base });
        }

        Ok(())
    }
}
