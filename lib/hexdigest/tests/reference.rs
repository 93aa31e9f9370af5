//! Cross-checks against the RustCrypto `sha2` and `sha3` crates.

use hexdigest::{keccak256, sha256, Algorithm, HashError, DIGEST_SIZE};
use sha2::Digest as _;

fn reference_sha256(data: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(data))
}

fn reference_keccak256(data: &[u8]) -> String {
    hex::encode(sha3::Keccak256::digest(data))
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

#[test]
fn known_answers() {
    assert_eq!(
        sha256(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        sha256(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        keccak256(b""),
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
    assert_eq!(
        keccak256(b"abc"),
        "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
    );
}

#[test]
fn keccak_is_not_sha3() {
    let sha3_empty = hex::encode(sha3::Sha3_256::digest(b""));
    assert_eq!(
        sha3_empty,
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );
    assert_ne!(keccak256(b""), sha3_empty);
}

#[test]
fn every_length_up_to_three_blocks() {
    let data = pattern(3 * 136 + 1);
    for len in 0..=data.len() {
        let message = &data[..len];
        assert_eq!(sha256(message), reference_sha256(message), "sha256 len {}", len);
        assert_eq!(keccak256(message), reference_keccak256(message), "keccak256 len {}", len);
    }
}

#[test]
fn block_boundaries() {
    let data = pattern(300);
    for len in [55, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
        assert_eq!(sha256(&data[..len]), reference_sha256(&data[..len]), "len {}", len);
    }
    for len in [134, 135, 136, 137, 271, 272, 273] {
        assert_eq!(keccak256(&data[..len]), reference_keccak256(&data[..len]), "len {}", len);
    }
}

#[test]
fn multi_block_messages() {
    for len in [4096, 5000, 65_537] {
        let data = pattern(len);
        assert_eq!(sha256(&data), reference_sha256(&data));
        assert_eq!(keccak256(&data), reference_keccak256(&data));
    }
}

#[test]
fn output_shape_and_determinism() {
    let data = pattern(1000);
    for algorithm in Algorithm::ALL {
        let first = algorithm.hash(&data);
        assert_eq!(first.len(), 2 * DIGEST_SIZE);
        assert!(first.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(algorithm.hash(&data), first);
    }
}

#[test]
fn avalanche() {
    let mut data = pattern(100);
    for algorithm in Algorithm::ALL {
        let before = algorithm.digest(&data);
        data[42] ^= 0x01;
        let after = algorithm.digest(&data);
        data[42] ^= 0x01;

        let flipped: u32 = before
            .as_bytes()
            .iter()
            .zip(after.as_bytes())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        // 128 expected; 64 is far outside any plausible spread
        assert!(flipped > 64, "{} flipped only {} bits", algorithm, flipped);
    }
}

#[test]
fn into_checks_length() {
    let mut short = [0u8; DIGEST_SIZE - 1];
    assert_eq!(
        hexdigest::sha256_into(b"abc", &mut short),
        Err(HashError::BufferTooSmall { needed: DIGEST_SIZE, actual: DIGEST_SIZE - 1 })
    );

    let mut exact = [0u8; DIGEST_SIZE];
    hexdigest::keccak256_into(b"abc", &mut exact).unwrap();
    assert_eq!(hex::encode(exact), reference_keccak256(b"abc"));
}

#[test]
fn threads_hash_independently() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let data = pattern(1000 + i * 137);
                (sha256(&data), reference_sha256(&data), keccak256(&data), reference_keccak256(&data))
            })
        })
        .collect();
    for handle in handles {
        let (ours_sha, ref_sha, ours_keccak, ref_keccak) = handle.join().unwrap();
        assert_eq!(ours_sha, ref_sha);
        assert_eq!(ours_keccak, ref_keccak);
    }
}
