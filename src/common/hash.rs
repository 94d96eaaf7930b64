use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::decode;

/// 32-byte opaque value: block and transaction hashes, state roots, storage
/// keys. Always written with all 64 hex digits.
#[derive(Clone, Copy, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    pub fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hash(0x{})", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Hash {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Hash, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let hex: String = Deserialize::deserialize(deserializer)?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex.strip_prefix("0x").unwrap_or(&hex), &mut bytes).map_err(|_| {
            D::Error::invalid_value(serde::de::Unexpected::Str(&hex), &"32-byte hex hash")
        })?;
        Ok(Hash(bytes))
    }
}

pub const fn hash(s: &str) -> Hash {
    Hash(decode(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zeros_kept() -> eyre::Result<()> {
        let key = hash("0x1");
        let json = serde_json::to_string(&key)?;
        assert_eq!(
            json,
            "\"0x0000000000000000000000000000000000000000000000000000000000000001\""
        );
        assert_eq!(serde_json::from_str::<Hash>(&json)?, key);
        Ok(())
    }

    #[test]
    fn test_rejects_short_hex() {
        assert!(serde_json::from_str::<Hash>("\"0x1\"").is_err());
        assert!(serde_json::from_str::<Hash>("\"0xab\"").is_err());
    }
}
