use std::fmt::{Display, Formatter};

use crate::error::{CryptoError, Result};

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest.
///
/// Digests are opaque values compared by exact byte equality. The derived
/// `PartialEq` is not constant-time; verification code inside the crate
/// compares digests through the `ct` helpers instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_LEN]);

impl Digest {
    /// Wraps a caller-provided digest, checking its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| CryptoError::InvalidLength {
            what: "digest",
            expected: DIGEST_LEN,
            actual: bytes.len(),
        })?;

        Ok(Self(arr))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Digest(value)
    }
}

impl From<[u32; 8]> for Digest {
    /// Serializes the final SHA-256 state words in big-endian order.
    fn from(state: [u32; 8]) -> Self {
        let mut out = [0u8; DIGEST_LEN];

        out.chunks_exact_mut(4)
            .zip(state.iter())
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_be_bytes()));

        Digest(out)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Digest {
    /// Formats the digest as colon-separated upper-case hexadecimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
