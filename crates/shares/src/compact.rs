use crate::{
    constants::{
        COMPACT_SHARE_RESERVED_BYTES, CONTINUATION_COMPACT_SHARE_CONTENT_SIZE,
        FIRST_COMPACT_SHARE_CONTENT_SIZE, MAX_SHARE_VERSION, NAMESPACE_SIZE, SEQUENCE_LEN_BYTES,
        SHARE_INFO_BYTES, SHARE_SIZE,
    },
    delimiter::delim_len,
    errors::Error,
    namespace::Namespace,
    Share,
};

/// Returns the number of compact shares needed to hold a sequence of
/// `sequence_len` delimited bytes.
///
/// The first share of a sequence also stores the sequence length, so it has
/// less room for data than the shares that follow it.
pub const fn compact_shares_needed(sequence_len: usize) -> usize {
    if sequence_len == 0 {
        return 0;
    }
    if sequence_len <= FIRST_COMPACT_SHARE_CONTENT_SIZE {
        return 1;
    }
    let remaining = sequence_len - FIRST_COMPACT_SHARE_CONTENT_SIZE;
    1 + remaining.div_ceil(CONTINUATION_COMPACT_SHARE_CONTENT_SIZE)
}

/// Packs length delimited units (transactions) back to back into compact shares.
///
/// A unit may straddle several shares. Each share records, in its reserved
/// bytes, where the first unit that starts inside of it begins so that a
/// reader can resynchronise from any share.
#[derive(Debug, Clone)]
pub struct CompactShareSplitter {
    namespace: Namespace,
    share_version: u8,
    /// Every delimited unit, written back to back.
    sequence: Vec<u8>,
    /// Offsets into `sequence` at which a unit starts.
    unit_starts: Vec<usize>,
}

impl CompactShareSplitter {
    pub fn new(namespace: Namespace, share_version: u8) -> Result<Self, Error> {
        if share_version > MAX_SHARE_VERSION {
            return Err(Error::InvalidShareVersion {
                version: share_version,
            });
        }
        Ok(Self {
            namespace,
            share_version,
            sequence: Vec::new(),
            unit_starts: Vec::new(),
        })
    }

    /// Appends `tx` to the sequence, prefixed with its length.
    ///
    /// Fails, leaving the sequence untouched, if the sequence would outgrow
    /// the length field of its first share.
    pub fn write_tx(&mut self, tx: &[u8]) -> Result<(), Error> {
        extended_sequence_len(self.sequence.len(), tx.len())?;

        self.unit_starts.push(self.sequence.len());
        self.sequence.reserve(delim_len(tx.len() as u64) + tx.len());
        prost::encoding::encode_varint(tx.len() as u64, &mut self.sequence);
        self.sequence.extend_from_slice(tx);
        Ok(())
    }

    /// The number of delimited bytes written so far.
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unit_starts.is_empty()
    }

    /// The number of shares `export` would produce.
    pub fn count(&self) -> usize {
        compact_shares_needed(self.sequence.len())
    }

    /// Lays the written units out into shares.
    pub fn export(&self) -> Vec<Share> {
        let num_shares = self.count();
        let mut shares = Vec::with_capacity(num_shares);

        let namespace = self.namespace.to_bytes();
        let mut offset = 0;
        let mut next_unit = 0;

        for share_index in 0..num_shares {
            let is_sequence_start = share_index == 0;
            let mut share: Share = Box::new([0u8; SHARE_SIZE]);

            share[..NAMESPACE_SIZE].copy_from_slice(&namespace);
            let mut cursor = NAMESPACE_SIZE;

            share[cursor] = (self.share_version << 1) | u8::from(is_sequence_start);
            cursor += SHARE_INFO_BYTES;

            if is_sequence_start {
                // `write_tx` keeps the sequence within `u32::MAX` bytes.
                let sequence_len = u32::try_from(self.sequence.len()).unwrap_or(u32::MAX);
                share[cursor..cursor + SEQUENCE_LEN_BYTES]
                    .copy_from_slice(&sequence_len.to_be_bytes());
                cursor += SEQUENCE_LEN_BYTES;
            }

            let reserved_at = cursor;
            cursor += COMPACT_SHARE_RESERVED_BYTES;

            let end = (offset + SHARE_SIZE - cursor).min(self.sequence.len());

            // Point at the first unit that begins in this share, zero if the
            // share only holds the tail of an earlier unit.
            let mut first_unit_start = 0u32;
            if let Some(&unit_start) = self.unit_starts.get(next_unit) {
                if unit_start < end {
                    first_unit_start = (cursor + unit_start - offset) as u32;
                }
            }
            while self
                .unit_starts
                .get(next_unit)
                .is_some_and(|&unit_start| unit_start < end)
            {
                next_unit += 1;
            }
            share[reserved_at..reserved_at + COMPACT_SHARE_RESERVED_BYTES]
                .copy_from_slice(&first_unit_start.to_be_bytes());

            share[cursor..cursor + (end - offset)].copy_from_slice(&self.sequence[offset..end]);
            offset = end;

            shares.push(share);
        }

        shares
    }
}

/// The sequence length after appending a delimited unit of `tx_len` bytes.
fn extended_sequence_len(sequence_len: usize, tx_len: usize) -> Result<u32, Error> {
    delim_len(tx_len as u64)
        .checked_add(tx_len)
        .and_then(|unit_len| unit_len.checked_add(sequence_len))
        .and_then(|len| u32::try_from(len).ok())
        .ok_or(Error::SequenceTooLong {
            sequence_len,
            tx_len,
        })
}
