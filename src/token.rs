use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::address::{Address, ETH_ADDRESS};

/// What a transfer or withdrawal moves: the base coin or an ERC20 token.
///
/// On the wire the base coin is spelled as the zero address, so the
/// conversions and serde impls go through [`ETH_ADDRESS`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Token {
    #[default]
    Eth,
    Erc20(Address),
}

impl Token {
    pub fn address(&self) -> Address {
        match self {
            Token::Eth => ETH_ADDRESS,
            Token::Erc20(address) => *address,
        }
    }

    pub fn is_eth(&self) -> bool {
        matches!(self, Token::Eth)
    }
}

impl From<Address> for Token {
    fn from(value: Address) -> Self {
        if value == ETH_ADDRESS {
            Token::Eth
        } else {
            Token::Erc20(value)
        }
    }
}

impl From<Token> for Address {
    fn from(value: Token) -> Self {
        value.address()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Eth => f.write_str("ETH"),
            Token::Erc20(address) => write!(f, "{address}"),
        }
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.address().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Token, D::Error>
    where
        D: Deserializer<'de>,
    {
        let address: Address = Deserialize::deserialize(deserializer)?;
        Ok(address.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::address::addr;

    #[test]
    fn test_from_address() {
        assert_eq!(Token::from(Address::zero()), Token::Eth);
        let usdc = addr("0x3355df6d4c9c3035724fd0e3914de96a5a83aaf4");
        assert_eq!(Token::from(usdc), Token::Erc20(usdc));
        assert_eq!(Token::from(usdc).address(), usdc);
        assert_eq!(Token::default().address(), ETH_ADDRESS);
    }

    #[test]
    fn test_serde() -> eyre::Result<()> {
        let token: Token = serde_json::from_str("\"0x0000000000000000000000000000000000000000\"")?;
        assert!(token.is_eth());
        assert_eq!(
            serde_json::to_string(&Token::Eth)?,
            "\"0x0000000000000000000000000000000000000000\""
        );
        Ok(())
    }
}
