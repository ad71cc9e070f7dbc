/// Streaming SHA-256 content digests.
///
/// Files are fed through the hasher in fixed-size chunks so memory use stays
/// flat regardless of file size (multi-gigabyte videos included).
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read buffer size for hashing. One buffer is live per scan.
pub const HASH_BUFFER_SIZE: usize = 64 * 1024;

/// Hash the full content of the file at `path`.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let (digest, total_bytes) = hash_reader(file)?;
    debug!("Hashed {} ({total_bytes} bytes): {digest}", path.display());
    Ok(digest)
}

/// Hash everything `reader` yields. Returns the lowercase hex digest and
/// the number of bytes consumed.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<(String, u64)> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; HASH_BUFFER_SIZE];
    let mut total_bytes: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        hasher.update(&buffer[..bytes_read]);
        total_bytes += bytes_read as u64;
    }

    Ok((format!("{:x}", hasher.finalize()), total_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn known_vector() {
        let (digest, n) = hash_reader(&b"hello"[..]).unwrap();
        assert_eq!(digest, HELLO_SHA256);
        assert_eq!(n, 5);
    }

    #[test]
    fn empty_input() {
        let (digest, n) = hash_reader(io::empty()).unwrap();
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(n, 0);
    }

    /// Input spanning several buffers must hash the same as one-shot hashing.
    #[test]
    fn multi_chunk_matches_one_shot() {
        let data: Vec<u8> = (0..HASH_BUFFER_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        let (streamed, n) = hash_reader(&data[..]).unwrap();
        let one_shot = format!("{:x}", Sha256::digest(&data));
        assert_eq!(streamed, one_shot);
        assert_eq!(n, data.len() as u64);
    }

    #[test]
    fn hash_file_reads_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("hello.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert_eq!(hash_file(&path).unwrap(), HELLO_SHA256);
    }

    #[test]
    fn hash_file_missing_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(hash_file(&tmp.path().join("absent")).is_err());
    }
}
