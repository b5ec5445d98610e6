#![allow(dead_code)]

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use envelope::{Blob, BlobTx};
use square_size_estimator::ParsedTransaction;

/// Data from the test input could also be malformed,
/// so raw transactions are kept as plain bytes.
pub type UnsafeBytes = Vec<u8>;

pub fn collect_test_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_test_files_into(dir, &mut files)?;

    // Check that the directory is not empty
    assert!(!files.is_empty());

    files.sort();
    Ok(files)
}

fn collect_test_files_into<P: AsRef<Path>>(dir: P, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_test_files_into(path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

pub fn bytes_from_hex(bytes: &str) -> UnsafeBytes {
    let bytes = bytes
        .strip_prefix("0x")
        .expect("hex strings in the test vectors are prefixed with 0x");
    hex::decode(bytes).expect("invalid hex")
}

pub fn blob(len: usize) -> Blob {
    Blob {
        namespace_id: vec![0xAA; 28],
        data: vec![0xBB; len],
        share_version: 0,
        namespace_version: 0,
    }
}

pub fn plain_tx(len: usize) -> ParsedTransaction {
    ParsedTransaction::Plain { tx: vec![0xCC; len] }
}

pub fn blob_tx(tx_len: usize, blob_lens: &[usize]) -> ParsedTransaction {
    BlobTx::new(
        vec![0xDD; tx_len],
        blob_lens.iter().copied().map(blob).collect(),
    )
    .into()
}
