/// Errors that can occur while configuring or running the estimator.
#[derive(Debug)]
pub enum Error {
    /// The supplied constraints are inconsistent.
    Config(ConfigError),
    /// The envelope encoder could not be probed.
    ///
    /// Note: The probes are synthetic inputs that are always valid under a
    /// correct configuration, so this signals a broken invariant. The block
    /// being built must be abandoned, an estimate without the overhead
    /// constants could under provision the square.
    Calibration(CalibrationError),
}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<CalibrationError> for Error {
    fn from(value: CalibrationError) -> Self {
        Self::Calibration(value)
    }
}

/// Errors raised while validating or parsing `SquareSizeConstraints`.
#[derive(Debug)]
pub enum ConfigError {
    /// A square size bound was not a power of two.
    NotPowerOfTwo {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was supplied.
        value: u64,
    },
    /// The minimum square size was larger than the maximum.
    MinExceedsMax {
        /// Configured minimum.
        min: u64,
        /// Configured maximum.
        max: u64,
    },
    /// The maximum square size is larger than `MAX_SQUARE_SIZE_LIMIT`.
    MaxSquareSizeTooLarge {
        /// Configured maximum.
        max: u64,
        /// Largest accepted maximum.
        limit: u64,
    },
    /// Continuation shares must have room for data.
    ZeroContentSize,
    /// The padding coefficient must be finite and at least one, the base finite and non negative.
    InvalidPadding {
        /// Configured coefficient.
        coefficient: f64,
        /// Configured base.
        base: f64,
    },
    /// The json could not be parsed into constraints.
    InvalidJson(serde_json::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value)
    }
}

/// Errors raised while probing the envelope encoder for its worst case overhead.
#[derive(Debug)]
pub enum CalibrationError {
    /// The encoder rejected a probe.
    Encoder {
        /// Square size being calibrated.
        square_size: u64,
        /// Error returned by the encoder.
        source: envelope::Error,
    },
    /// The square size is zero or larger than `MAX_SQUARE_SIZE_LIMIT`.
    InvalidSquareSize {
        /// Square size being calibrated.
        square_size: u64,
    },
    /// The probe for the square size could not be allocated.
    ProbeTooLarge {
        /// Square size being calibrated.
        square_size: u64,
        /// Number of shares the probe fills.
        num_shares: u32,
        /// Data bytes per share.
        content_size: usize,
    },
    /// A probe that should have grown the encoding did not.
    EncodedLenShrank {
        /// Square size being calibrated.
        square_size: u64,
        /// Length of the smaller input, or of its encoding.
        shorter: usize,
        /// Length of the encoding that should have been at least as long.
        longer: usize,
    },
}
