use serde::{Deserialize, Serialize};

use crate::common::{Hex, address::Address, hash::Hash, word::Word};

/// EIP-2930 access list entry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AccessListItem {
    pub address: Address,
    #[serde(rename = "storageKeys", default)]
    pub storage_keys: Vec<Hash>,
}

/// Gas pricing: either a legacy gas price or an EIP-1559 fee pair, never both.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fees {
    Eip1559 {
        #[serde(rename = "maxFeePerGas")]
        max_fee: Word,
        #[serde(rename = "maxPriorityFeePerGas")]
        max_priority_fee: Word,
    },
    Legacy {
        #[serde(rename = "gasPrice")]
        gas_price: Word,
    },
}

/// Unsigned, unsent contract invocation, shaped as an `eth_call` /
/// `eth_estimateGas` call object.
///
/// A zero `gas` means "not set": it is passed through untouched and picking a
/// limit is left to whoever estimates or sends the call.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CallMsg {
    pub from: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(
        default,
        skip_serializing_if = "is_zero",
        serialize_with = "ser_quantity",
        deserialize_with = "de_quantity"
    )]
    pub gas: u64,
    #[serde(flatten)]
    pub fees: Option<Fees>,
    pub value: Word,
    #[serde(default, skip_serializing_if = "Hex::is_empty")]
    pub data: Hex,
    #[serde(rename = "accessList", default, skip_serializing_if = "Vec::is_empty")]
    pub access_list: Vec<AccessListItem>,
}

impl CallMsg {
    /// Plain value transfer: no call data.
    pub fn is_transfer(&self) -> bool {
        self.data.is_empty()
    }
}

fn is_zero(gas: &u64) -> bool {
    *gas == 0
}

fn ser_quantity<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{value:#x}"))
}

fn de_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let hex: String = Deserialize::deserialize(deserializer)?;
    let digits = hex.strip_prefix("0x").unwrap_or(&hex);
    u64::from_str_radix(digits, 16).map_err(|_| {
        D::Error::invalid_value(serde::de::Unexpected::Str(&hex), &"hex uint64 quantity")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{address::addr, hash::hash};

    #[test]
    fn test_call_object_legacy() -> eyre::Result<()> {
        let msg = CallMsg {
            from: addr("0x36615cf349d7f6344891b1e7ca7c72883f5dc049"),
            to: Some(addr("0xa61464658afeaf65cccaafd3a512b69a83b77618")),
            gas: 21_000,
            fees: Some(Fees::Legacy {
                gas_price: Word::from(250_000_000u64),
            }),
            value: Word::from(7u8),
            ..Default::default()
        };
        let json = serde_json::to_value(&msg)?;
        pretty_assertions::assert_eq!(
            json,
            serde_json::json!({
                "from": "0x36615cf349d7f6344891b1e7ca7c72883f5dc049",
                "to": "0xa61464658afeaf65cccaafd3a512b69a83b77618",
                "gas": "0x5208",
                "gasPrice": "0xee6b280",
                "value": "0x7",
            })
        );
        Ok(())
    }

    #[test]
    fn test_call_object_eip1559() -> eyre::Result<()> {
        let msg = CallMsg {
            to: Some(addr("0x000000000000000000000000000000000000800a")),
            fees: Some(Fees::Eip1559 {
                max_fee: Word::from(2u8),
                max_priority_fee: Word::from(1u8),
            }),
            data: Hex::from([0x51, 0xcf, 0xf8, 0xd9]),
            access_list: vec![AccessListItem {
                address: addr("0x000000000000000000000000000000000000800a"),
                storage_keys: vec![hash("0x1")],
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&msg)?;
        pretty_assertions::assert_eq!(
            json,
            serde_json::json!({
                "from": "0x0000000000000000000000000000000000000000",
                "to": "0x000000000000000000000000000000000000800a",
                "maxFeePerGas": "0x2",
                "maxPriorityFeePerGas": "0x1",
                "value": "0x0",
                "data": "0x51cff8d9",
                "accessList": [{
                    "address": "0x000000000000000000000000000000000000800a",
                    "storageKeys": [
                        "0x0000000000000000000000000000000000000000000000000000000000000001"
                    ],
                }],
            })
        );

        let back: CallMsg = serde_json::from_value(json)?;
        assert_eq!(back, msg);
        Ok(())
    }
}
