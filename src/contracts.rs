use once_cell::sync::Lazy;

use crate::common::{address::Address, error::EncodingError, word::Word};

static ERC20: Lazy<Result<ethabi::Contract, EncodingError>> =
    Lazy::new(|| load(Contract::Erc20, include_str!("../etc/abi/IERC20.json")));

static ETH_TOKEN: Lazy<Result<ethabi::Contract, EncodingError>> =
    Lazy::new(|| load(Contract::EthToken, include_str!("../etc/abi/IEthToken.json")));

static L2_BRIDGE: Lazy<Result<ethabi::Contract, EncodingError>> =
    Lazy::new(|| load(Contract::L2Bridge, include_str!("../etc/abi/IL2Bridge.json")));

/// Interfaces bundled with the crate. Each one is parsed once per process.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Contract {
    Erc20,
    /// System contract at `L2_ETH_TOKEN_ADDRESS`.
    EthToken,
    L2Bridge,
}

impl Contract {
    pub fn name(&self) -> &'static str {
        match self {
            Contract::Erc20 => "erc20",
            Contract::EthToken => "eth token",
            Contract::L2Bridge => "l2 bridge",
        }
    }

    pub fn abi(&self) -> Result<&'static ethabi::Contract, EncodingError> {
        let abi = match self {
            Contract::Erc20 => &*ERC20,
            Contract::EthToken => &*ETH_TOKEN,
            Contract::L2Bridge => &*L2_BRIDGE,
        };
        abi.as_ref().map_err(Clone::clone)
    }

    /// Encodes a call to `function`: selector followed by the packed arguments.
    pub fn pack(
        &self,
        function: &'static str,
        args: &[ethabi::Token],
    ) -> Result<Vec<u8>, EncodingError> {
        let fail = |e: ethabi::Error| EncodingError::Pack {
            function,
            reason: e.to_string(),
        };
        self.abi()?
            .function(function)
            .and_then(|f| f.encode_input(args))
            .map_err(fail)
    }
}

fn load(contract: Contract, json: &str) -> Result<ethabi::Contract, EncodingError> {
    let abi = ethabi::Contract::load(json.as_bytes()).map_err(|e| EncodingError::Load {
        contract: contract.name(),
        reason: e.to_string(),
    })?;
    #[cfg(feature = "tracing")]
    tracing::trace!(contract = contract.name(), functions = abi.functions.len(), "ABI loaded");
    Ok(abi)
}

impl From<Address> for ethabi::Token {
    fn from(value: Address) -> Self {
        ethabi::Token::Address(ethabi::Address::from(value.0))
    }
}

impl From<Word> for ethabi::Token {
    fn from(value: Word) -> Self {
        ethabi::Token::Uint(ethabi::Uint::from_big_endian(&value.into_bytes()))
    }
}
