use crate::{
    builder::Builder,
    common::{
        Hex,
        address::{Address, L2_ETH_TOKEN_ADDRESS},
        call::{AccessListItem, CallMsg, Fees},
        error::EncodingError,
        word::Word,
    },
    contracts::Contract,
    token::Token,
};

/// Request to withdraw `amount` of `token` from L2 to `to` on L1.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WithdrawalCallMsg {
    /// Receiver on L1.
    pub to: Address,
    pub amount: Word,
    pub token: Token,
    /// Overrides the default L2 bridge for token withdrawals. Ignored for ETH.
    pub bridge: Option<Address>,
    pub from: Address,
    pub gas: u64,
    pub fees: Option<Fees>,
    pub access_list: Vec<AccessListItem>,
}

impl Builder for WithdrawalCallMsg {
    fn with_sender(mut self, sender: Address) -> Self {
        self.from = sender;
        self
    }

    fn with_gas(mut self, gas: u64) -> Self {
        self.gas = gas;
        self
    }

    fn with_fees(mut self, fees: Fees) -> Self {
        self.fees = Some(fees);
        self
    }

    fn with_access_list(mut self, access_list: Vec<AccessListItem>) -> Self {
        self.access_list = access_list;
        self
    }
}

impl WithdrawalCallMsg {
    pub fn new(to: Address, amount: Word) -> Self {
        Self {
            to,
            amount,
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<Token>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_bridge(mut self, bridge: Address) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// ETH goes through `withdraw(to)` on the eth token system contract with
    /// the amount attached as value. Tokens go through
    /// `withdraw(to, token, amount)` on the L2 bridge: the explicit `bridge`
    /// when set, `default_bridge` otherwise.
    pub fn to_call_msg(&self, default_bridge: Address) -> Result<CallMsg, EncodingError> {
        let (to, value, data) = match self.token {
            Token::Eth => {
                let data = Contract::EthToken.pack("withdraw", &[self.to.into()])?;
                (L2_ETH_TOKEN_ADDRESS, self.amount, data)
            }
            Token::Erc20(token) => {
                let data = Contract::L2Bridge.pack(
                    "withdraw",
                    &[self.to.into(), token.into(), self.amount.into()],
                )?;
                (self.bridge.unwrap_or(default_bridge), Word::zero(), data)
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(token = %self.token, to = %to, value = %value, "withdrawal call");

        Ok(CallMsg {
            from: self.from,
            to: Some(to),
            gas: self.gas,
            fees: self.fees,
            value,
            data: Hex::from(data),
            access_list: self.access_list.clone(),
        })
    }
}
