use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{
    Hex,
    address::Address,
    call::{AccessListItem, CallMsg, Fees},
    error::ParseError,
    hash::Hash,
    word::Word,
};

/// Inclusive range of L2 blocks, e.g. the blocks sealed into one L1 batch.
///
/// On the wire this is a two-element array of hex quantities: `["0x10","0x20"]`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct BlockRange {
    pub beginning: BigUint,
    pub end: BigUint,
}

impl BlockRange {
    pub fn new(beginning: impl Into<BigUint>, end: impl Into<BigUint>) -> Self {
        Self {
            beginning: beginning.into(),
            end: end.into(),
        }
    }

    pub fn contains(&self, number: &BigUint) -> bool {
        &self.beginning <= number && number <= &self.end
    }

    /// Number of blocks in the range, both ends included.
    pub fn count(&self) -> BigUint {
        if self.end < self.beginning {
            BigUint::zero()
        } else {
            &self.end - &self.beginning + BigUint::one()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Self::from_items(&serde_json::from_str::<Vec<String>>(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ParseError> {
        Self::from_items(&serde_json::from_value::<Vec<String>>(value)?)
    }

    fn from_items(items: &[String]) -> Result<Self, ParseError> {
        let [beginning, end] = items else {
            return Err(ParseError::Arity(items.len()));
        };
        Ok(BlockRange {
            beginning: parse_quantity(beginning)?,
            end: parse_quantity(end)?,
        })
    }
}

impl Serialize for BlockRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut seq = serializer.serialize_tuple(2)?;
        seq.serialize_element(&format!("{:#x}", self.beginning))?;
        seq.serialize_element(&format!("{:#x}", self.end))?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for BlockRange {
    fn deserialize<D>(deserializer: D) -> Result<BlockRange, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let items: Vec<String> = Deserialize::deserialize(deserializer)?;
        BlockRange::from_items(&items).map_err(D::Error::custom)
    }
}

/// Decodes a `0x`-prefixed big-endian hex quantity of at most 256 bits.
/// Leading zero digits are rejected, except for `0x0` itself.
pub fn parse_quantity(input: &str) -> Result<BigUint, ParseError> {
    let fail = |reason| ParseError::Quantity {
        input: input.to_string(),
        reason,
    };

    if input.is_empty() {
        return Err(fail("empty hex string"));
    }
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or_else(|| fail("missing 0x prefix"))?;
    if digits.is_empty() {
        return Err(fail("no digits after 0x prefix"));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(fail("leading zero digits"));
    }
    if digits.len() > 64 {
        return Err(fail("number exceeds 256 bits"));
    }
    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| fail("invalid hex digit"))
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tx {
    pub hash: Hash,
    #[serde(rename = "blockHash", default)]
    pub block_hash: Option<Hash>,
    #[serde(rename = "blockNumber", default)]
    pub block_number: Option<Word>,
    #[serde(rename = "transactionIndex", default)]
    pub index: Option<Word>,
    #[serde(rename = "l1BatchNumber", default)]
    pub l1_batch_number: Option<Word>,
    #[serde(rename = "l1BatchTxIndex", default)]
    pub l1_batch_tx_index: Option<Word>,
    #[serde(rename = "chainId", default)]
    pub chain_id: Option<Word>,
    #[serde(rename = "type", default)]
    pub kind: Option<Word>,
    pub nonce: Word,
    pub from: Address,
    pub gas: Word,
    pub input: Hex,
    pub to: Option<Address>,
    pub value: Word,
    #[serde(flatten)]
    pub gas_info: TxGas,
    #[serde(rename = "accessList", default)]
    pub access_list: Vec<AccessListItem>,
    #[serde(default)]
    pub v: Option<Word>,
    #[serde(default)]
    pub r: Option<Word>,
    #[serde(default)]
    pub s: Option<Word>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TxGas {
    #[serde(rename = "gasPrice", default)]
    pub price: Option<Word>,
    #[serde(rename = "maxFeePerGas", default)]
    pub max_fee: Option<Word>,
    #[serde(rename = "maxPriorityFeePerGas", default)]
    pub max_priority_fee: Option<Word>,
}

impl Tx {
    /// Fee fields as carried by a call message; EIP-1559 wins when both are present.
    pub fn fees(&self) -> Option<Fees> {
        match (
            self.gas_info.max_fee,
            self.gas_info.max_priority_fee,
            self.gas_info.price,
        ) {
            (Some(max_fee), Some(max_priority_fee), _) => Some(Fees::Eip1559 {
                max_fee,
                max_priority_fee,
            }),
            (_, _, Some(gas_price)) => Some(Fees::Legacy { gas_price }),
            _ => None,
        }
    }
}

impl From<&Tx> for CallMsg {
    fn from(tx: &Tx) -> Self {
        CallMsg {
            from: tx.from,
            to: tx.to,
            gas: tx.gas.saturating_u64(),
            fees: tx.fees(),
            value: tx.value,
            data: tx.input.clone(),
            access_list: tx.access_list.clone(),
        }
    }
}

/// Either full transaction objects or only their hashes, depending on the
/// `eth_getBlockByNumber` flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transactions {
    Hashes(Vec<Hash>),
    Full(Vec<Tx>),
}

impl Default for Transactions {
    fn default() -> Self {
        Self::Hashes(vec![])
    }
}

impl Transactions {
    pub fn len(&self) -> usize {
        match self {
            Self::Hashes(hashes) => hashes.len(),
            Self::Full(txs) => txs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub header: Header,
    #[serde(default)]
    pub uncles: Vec<Hash>,
    #[serde(rename = "sealFields", default)]
    pub seal_fields: Vec<serde_json::Value>,
    #[serde(default)]
    pub transactions: Transactions,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Header {
    pub number: Word,
    pub hash: Option<Hash>,
    #[serde(default)]
    pub size: Option<Word>,
    pub timestamp: Word,
    #[serde(rename = "baseFeePerGas", default)]
    pub base_fee: Option<Word>,
    #[serde(rename = "stateRoot")]
    pub state_root: Hash,
    #[serde(rename = "transactionsRoot")]
    pub transactions_root: Hash,
    #[serde(rename = "receiptsRoot")]
    pub receipts_root: Hash,
    #[serde(rename = "sha3Uncles")]
    pub uncles_hash: Hash,
    #[serde(rename = "logsBloom")]
    pub logs_bloom: Hex,
    #[serde(rename = "mixHash", default)]
    pub mix_hash: Option<Hash>,
    #[serde(default)]
    pub nonce: Option<Hex>,
    #[serde(rename = "parentHash")]
    pub parent_hash: Hash,
    #[serde(rename = "gasLimit")]
    pub gas_limit: Word,
    #[serde(rename = "gasUsed")]
    pub gas_used: Word,
    #[serde(rename = "extraData")]
    pub extra_data: Hex,
    pub difficulty: Word,
    #[serde(rename = "totalDifficulty", default)]
    pub total_difficulty: Option<Word>,
    #[serde(default)]
    pub miner: Address,
    /// Unset while the block is not yet sealed into an L1 batch.
    #[serde(rename = "l1BatchNumber", default)]
    pub l1_batch_number: Option<Word>,
    #[serde(rename = "l1BatchTimestamp", default)]
    pub l1_batch_timestamp: Option<Word>,
}
