use crate::{
    constants::{
        NAMESPACE_ID_SIZE, NAMESPACE_SIZE, NAMESPACE_VERSION_ZERO_ID_SIZE,
        NAMESPACE_VERSION_ZERO_PREFIX_SIZE,
    },
    errors::Error,
};

/// The only namespace version this crate understands.
const NAMESPACE_VERSION_ZERO: u8 = 0;

/// Namespace for ordinary transactions.
pub const TX_NAMESPACE: Namespace = Namespace::primary_reserved(0x01);

/// Namespace for the index wrapped transactions that pay for blobs.
pub const PAY_FOR_BLOB_NAMESPACE: Namespace = Namespace::primary_reserved(0x04);

/// A namespace groups shares in the square. It is written at the start of
/// every share and determines where in the square the share may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace {
    version: u8,
    id: [u8; NAMESPACE_ID_SIZE],
}

impl Namespace {
    /// Creates a namespace from a version and a full length id.
    pub fn new(version: u8, id: &[u8]) -> Result<Self, Error> {
        if version != NAMESPACE_VERSION_ZERO {
            return Err(Error::UnsupportedNamespaceVersion { version });
        }
        let id: [u8; NAMESPACE_ID_SIZE] =
            id.try_into().map_err(|_| Error::InvalidNamespaceIdLength {
                length: id.len(),
                expected: NAMESPACE_ID_SIZE,
            })?;
        Ok(Self { version, id })
    }

    /// Creates a version zero namespace by left padding `sub_id` with zeroes.
    pub fn new_v0(sub_id: &[u8]) -> Result<Self, Error> {
        if sub_id.len() > NAMESPACE_VERSION_ZERO_ID_SIZE {
            return Err(Error::SubIdTooLong {
                length: sub_id.len(),
                max_length: NAMESPACE_VERSION_ZERO_ID_SIZE,
            });
        }
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - sub_id.len()..].copy_from_slice(sub_id);
        Ok(Self {
            version: NAMESPACE_VERSION_ZERO,
            id,
        })
    }

    const fn primary_reserved(last_byte: u8) -> Self {
        let mut id = [0u8; NAMESPACE_ID_SIZE];
        id[NAMESPACE_ID_SIZE - 1] = last_byte;
        Self {
            version: NAMESPACE_VERSION_ZERO,
            id,
        }
    }

    pub const fn version(&self) -> u8 {
        self.version
    }

    pub const fn id(&self) -> &[u8; NAMESPACE_ID_SIZE] {
        &self.id
    }

    /// Returns true if the namespace belongs to the range reserved for
    /// protocol data, which is laid out before any blob.
    pub fn is_reserved(&self) -> bool {
        self.version == NAMESPACE_VERSION_ZERO
            && self.id[..NAMESPACE_ID_SIZE - 1].iter().all(|byte| *byte == 0)
    }

    /// Returns true if the id carries the zero prefix every version zero namespace must have.
    pub fn has_version_zero_prefix(&self) -> bool {
        self.id[..NAMESPACE_VERSION_ZERO_PREFIX_SIZE]
            .iter()
            .all(|byte| *byte == 0)
    }

    /// Serializes the namespace as it appears at the start of a share.
    pub fn to_bytes(&self) -> [u8; NAMESPACE_SIZE] {
        let mut bytes = [0u8; NAMESPACE_SIZE];
        bytes[0] = self.version;
        bytes[1..].copy_from_slice(&self.id);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_namespaces() {
        assert!(TX_NAMESPACE.is_reserved());
        assert!(PAY_FOR_BLOB_NAMESPACE.is_reserved());
        assert!(TX_NAMESPACE < PAY_FOR_BLOB_NAMESPACE);

        let user = Namespace::new_v0(&[1; 10]).expect("valid sub id");
        assert!(!user.is_reserved());
        assert!(user.has_version_zero_prefix());
        assert!(PAY_FOR_BLOB_NAMESPACE < user);
    }

    #[test]
    fn new_v0_pads_on_the_left() {
        let namespace = Namespace::new_v0(&[0xAA, 0xBB]).expect("valid sub id");
        let bytes = namespace.to_bytes();

        assert_eq!(bytes.len(), NAMESPACE_SIZE);
        assert_eq!(bytes[0], 0);
        assert!(bytes[1..NAMESPACE_SIZE - 2].iter().all(|byte| *byte == 0));
        assert_eq!(&bytes[NAMESPACE_SIZE - 2..], &[0xAA, 0xBB]);
    }

    #[test]
    fn new_v0_rejects_long_sub_id() {
        let err = Namespace::new_v0(&[1; 11]).unwrap_err();
        assert_eq!(
            err,
            Error::SubIdTooLong {
                length: 11,
                max_length: 10
            }
        );
    }

    #[test]
    fn new_rejects_bad_inputs() {
        assert_eq!(
            Namespace::new(1, &[0; NAMESPACE_ID_SIZE]).unwrap_err(),
            Error::UnsupportedNamespaceVersion { version: 1 }
        );
        assert_eq!(
            Namespace::new(0, &[0; 27]).unwrap_err(),
            Error::InvalidNamespaceIdLength {
                length: 27,
                expected: NAMESPACE_ID_SIZE
            }
        );
        assert_eq!(
            Namespace::new(0, TX_NAMESPACE.id()).expect("valid id"),
            TX_NAMESPACE
        );
    }
}
