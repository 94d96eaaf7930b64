use crate::{
    builder::Builder,
    common::{
        Hex,
        address::Address,
        call::{AccessListItem, CallMsg, Fees},
        error::EncodingError,
        word::Word,
    },
    contracts::Contract,
    token::Token,
};

/// Request to move `amount` of `token` from `from` to `to` on L2.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransferCallMsg {
    pub to: Address,
    pub amount: Word,
    pub token: Token,
    pub from: Address,
    /// Zero leaves the limit to gas estimation.
    pub gas: u64,
    pub fees: Option<Fees>,
    pub access_list: Vec<AccessListItem>,
}

impl Builder for TransferCallMsg {
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

impl TransferCallMsg {
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

    /// Base-coin transfers become plain value transfers to the recipient.
    /// Token transfers call `transfer(to, amount)` on the token contract
    /// and carry no value.
    pub fn to_call_msg(&self) -> Result<CallMsg, EncodingError> {
        let (to, value, data) = match self.token {
            Token::Eth => (self.to, self.amount, Hex::default()),
            Token::Erc20(token) => {
                let data =
                    Contract::Erc20.pack("transfer", &[self.to.into(), self.amount.into()])?;
                (token, Word::zero(), Hex::from(data))
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(token = %self.token, to = %to, value = %value, "transfer call");

        Ok(CallMsg {
            from: self.from,
            to: Some(to),
            gas: self.gas,
            fees: self.fees,
            value,
            data,
            access_list: self.access_list.clone(),
        })
    }
}

impl TryFrom<&TransferCallMsg> for CallMsg {
    type Error = EncodingError;

    fn try_from(value: &TransferCallMsg) -> Result<Self, Self::Error> {
        value.to_call_msg()
    }
}
