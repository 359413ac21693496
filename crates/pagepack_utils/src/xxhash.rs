use xxhash_rust::xxh3::xxh3_64;

/// Hex digest of the xxh3 hash of `data`.
///
/// The digest is a pure function of the input bytes, so identifiers derived
/// from it survive re-runs, platform changes and directory enumeration order.
pub fn xxhash_hex(data: &[u8]) -> String {
  hex::encode(xxh3_64(data).to_le_bytes())
}

#[test]
fn test_xxhash_hex() {
  let digest = xxhash_hex(b"login");
  assert_eq!(digest.len(), 16);
  assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
  assert_eq!(digest, xxhash_hex(b"login"));
  assert_ne!(digest, xxhash_hex(b"home"));
  assert_ne!(digest, xxhash_hex(b"Login"));
}
