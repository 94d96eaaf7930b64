use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::decode;

type U256 = primitive_types::U256;

/// Unsigned 256-bit quantity: token amounts, gas prices, ABI `uint` words.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Word(U256);

impl std::fmt::Debug for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::fmt::LowerHex for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl Word {
    pub fn into_bytes(&self) -> [u8; 32] {
        self.0.to_big_endian()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn saturating_u64(&self) -> u64 {
        if self.0.bits() > 64 {
            u64::MAX
        } else {
            self.0.low_u64()
        }
    }

    pub fn zero() -> Self {
        Self(primitive_types::U256::zero())
    }

    pub fn one() -> Self {
        Self(primitive_types::U256::one())
    }

    pub fn max() -> Self {
        Self(primitive_types::U256::max_value())
    }

    pub fn from_hex(hex: &str) -> eyre::Result<Self> {
        let hex = hex.trim_start_matches("0x");
        let word = primitive_types::U256::from_str_radix(hex, 16);
        Ok(Self(
            word.map_err(|_| eyre::eyre!("Invalid U256: '{hex}'."))?,
        ))
    }

    pub fn from_dec(dec: &str) -> eyre::Result<Self> {
        let word = primitive_types::U256::from_dec_str(dec);
        Ok(Self(
            word.map_err(|_| eyre::eyre!("Invalid U256: '{dec}'."))?,
        ))
    }
}

impl std::str::FromStr for Word {
    type Err = eyre::Report;

    /// Accepts `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") {
            Self::from_hex(s)
        } else {
            Self::from_dec(s)
        }
    }
}

impl From<u8> for Word {
    fn from(value: u8) -> Self {
        Self(primitive_types::U256::from(value))
    }
}

impl From<u64> for Word {
    fn from(value: u64) -> Self {
        Self(primitive_types::U256::from(value))
    }
}

impl From<u128> for Word {
    fn from(value: u128) -> Self {
        Self(primitive_types::U256::from(value))
    }
}

impl Serialize for Word {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex = format!("{:#x}", self.0);
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D>(deserializer: D) -> Result<Word, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let hex: String = Deserialize::deserialize(deserializer)?;
        Word::from_hex(&hex).map_err(|_| {
            D::Error::invalid_value(serde::de::Unexpected::Str(&hex), &"hex quantity")
        })
    }
}

pub const fn word(s: &str) -> Word {
    let b = decode::<32>(s);
    Word(primitive_types::U256(limbs(b)))
}

const fn limbs(b: [u8; 32]) -> [u64; 4] {
    let mut ret = [0u64; 4];
    let mut i = 0;
    while i < 32 {
        ret[3 - i / 8] |= (b[i] as u64) << (8 * (7 - i % 8));
        i += 1;
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_const() {
        assert_eq!(word("0x0"), Word::zero());
        assert_eq!(word("0x800a"), Word::from(0x800au64));
        assert_eq!(
            word("0xde0b6b3a7640000"),
            Word::from(1_000_000_000_000_000_000u64)
        );
        assert_eq!(
            word("0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
            Word::max()
        );
    }

    #[test]
    fn test_word_serde() -> eyre::Result<()> {
        assert_eq!(serde_json::to_string(&Word::zero())?, "\"0x0\"");
        assert_eq!(serde_json::to_string(&Word::from(26u8))?, "\"0x1a\"");
        let w: Word = serde_json::from_str("\"0x1a\"")?;
        assert_eq!(w, Word::from(26u8));
        assert!(serde_json::from_str::<Word>("\"0xzz\"").is_err());
        Ok(())
    }

    #[test]
    fn test_word_from_str() -> eyre::Result<()> {
        assert_eq!("1000".parse::<Word>()?, Word::from(1000u64));
        assert_eq!("0x3e8".parse::<Word>()?, Word::from(1000u64));
        assert!("ten".parse::<Word>().is_err());
        Ok(())
    }

    #[test]
    fn test_saturating_u64() {
        assert_eq!(Word::from(21_000u64).saturating_u64(), 21_000);
        assert_eq!(Word::from(u64::MAX).saturating_u64(), u64::MAX);
        assert_eq!(Word::from(1u128 << 64).saturating_u64(), u64::MAX);
        assert_eq!(Word::max().saturating_u64(), u64::MAX);
    }
}
