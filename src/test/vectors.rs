use crate::{hasher::Algorithm, Hasher, E};

pub struct Vector {
    pub input: &'static [u8],
    /// Hex encoded digests in `Algorithm::ALL` order.
    pub digests: [&'static str; Algorithm::COUNT],
}

impl Vector {
    pub fn digest(&self, algorithm: Algorithm) -> Vec<u8> {
        let position = Algorithm::ALL
            .iter()
            .position(|a| a == &algorithm)
            .expect("Every algorithm is listed");
        hex::decode(self.digests[position]).expect("Vectors are valid hex")
    }
}

pub const EMPTY: Vector = Vector {
    input: b"",
    digests: [
        "d41d8cd98f00b204e9800998ecf8427e",
        "00000000",
        "00000000",
        "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        "0000000000000000",
    ],
};

pub const ABC: Vector = Vector {
    input: b"abc",
    digests: [
        "900150983cd24fb0d6963f7d28e17f72",
        "352441c2",
        "364b3fb7",
        "a9993e364706816aba3e25717850c26c9cd0d89d",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        "05e5cabb3fc1faeb",
    ],
};

pub const HELLO_WORLD: Vector = Vector {
    input: b"hello world",
    digests: [
        "5eb63bbbe01eeed093cb22bb8f5acdc3",
        "0d4a1185",
        "c99465aa",
        "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed",
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
        "8d29d5c3f6ea8ebe",
    ],
};

pub const ALL: [&Vector; 3] = [&EMPTY, &ABC, &HELLO_WORLD];

/// Feeds every known vector into a fresh `H` (whole and byte by byte) and compares the digest.
pub fn check<H: Hasher>() -> Result<(), E> {
    for vector in ALL {
        let expected = vector.digest(H::ALGORITHM);
        let mut whole = H::new();
        whole.absorb(vector.input).map_err(Into::<E>::into)?;
        let mut split = H::new();
        for byte in vector.input.chunks(1) {
            split.absorb(byte).map_err(Into::<E>::into)?;
        }
        let digest = whole.hash().map_err(Into::<E>::into)?;
        assert_eq!(digest.len(), H::ALGORITHM.digest_len());
        assert_eq!(digest, expected, "{} of {:?}", H::ALGORITHM, vector.input);
        assert_eq!(split.hash().map_err(Into::<E>::into)?, expected);
        // Requesting a digest twice must not disturb the running state
        assert_eq!(whole.hash().map_err(Into::<E>::into)?, expected);
    }
    Ok(())
}
