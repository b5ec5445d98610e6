// Note: All sizes in this file are in bytes unless stated otherwise and
// describe share format version zero.

/// The number of bytes in a single share.
pub const SHARE_SIZE: usize = 512;

/// The number of bytes used to encode the version of a namespace.
pub const NAMESPACE_VERSION_SIZE: usize = 1;

/// The number of bytes used to encode the id of a namespace.
pub const NAMESPACE_ID_SIZE: usize = 28;

/// The number of bytes a namespace occupies at the start of every share.
pub const NAMESPACE_SIZE: usize = NAMESPACE_VERSION_SIZE + NAMESPACE_ID_SIZE;

/// The number of leading zero bytes in the id of a version zero namespace.
pub const NAMESPACE_VERSION_ZERO_PREFIX_SIZE: usize = 18;

/// The number of bytes a user controls in the id of a version zero namespace.
pub const NAMESPACE_VERSION_ZERO_ID_SIZE: usize = NAMESPACE_ID_SIZE - NAMESPACE_VERSION_ZERO_PREFIX_SIZE;

/// The number of bytes used for the info byte (share version and sequence start flag).
pub const SHARE_INFO_BYTES: usize = 1;

/// The number of bytes used to encode the length of a sequence in its first share.
pub const SEQUENCE_LEN_BYTES: usize = 4;

/// The number of bytes every compact share reserves to point at the first
/// unit that starts inside of it.
pub const COMPACT_SHARE_RESERVED_BYTES: usize = 4;

/// The number of bytes available for data in the first share of a compact sequence.
pub const FIRST_COMPACT_SHARE_CONTENT_SIZE: usize = SHARE_SIZE
    - NAMESPACE_SIZE
    - SHARE_INFO_BYTES
    - SEQUENCE_LEN_BYTES
    - COMPACT_SHARE_RESERVED_BYTES;

/// The number of bytes available for data in every other share of a compact sequence.
pub const CONTINUATION_COMPACT_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES - COMPACT_SHARE_RESERVED_BYTES;

/// The number of bytes available for data in the first share of a sparse sequence.
pub const FIRST_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES - SEQUENCE_LEN_BYTES;

/// The number of bytes available for data in every other share of a sparse sequence.
pub const CONTINUATION_SPARSE_SHARE_CONTENT_SIZE: usize =
    SHARE_SIZE - NAMESPACE_SIZE - SHARE_INFO_BYTES;

/// The first share version.
pub const SHARE_VERSION_ZERO: u8 = 0;

/// The largest share version that fits next to the sequence start flag in the info byte.
pub const MAX_SHARE_VERSION: u8 = 127;

/// The smallest square size a block may use.
pub const DEFAULT_MIN_SQUARE_SIZE: u64 = 1;

/// The largest square size a block may use.
///
/// Note: This is a protocol parameter; modifying it changes the maximum block size.
pub const DEFAULT_MAX_SQUARE_SIZE: u64 = 128;
