/// Returns the number of bytes the unsigned varint encoding of `n` occupies.
///
/// This is the length prefix written in front of every unit in a compact
/// share sequence.
pub fn delim_len(n: u64) -> usize {
    prost::encoding::encoded_len_varint(n)
}

/// Prefixes `unit` with its varint encoded length.
pub fn marshal_delimited(unit: &[u8]) -> Vec<u8> {
    let mut delimited = Vec::with_capacity(delim_len(unit.len() as u64) + unit.len());
    prost::encoding::encode_varint(unit.len() as u64, &mut delimited);
    delimited.extend_from_slice(unit);
    delimited
}
