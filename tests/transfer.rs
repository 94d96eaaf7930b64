use zksync_callmsg::{
    Builder, CallMsg, Fees, Token, TransferCallMsg, Word, addr, common::address::Address,
};

const FROM: Address = addr("0x36615cf349d7f6344891b1e7ca7c72883f5dc049");
const TO: Address = addr("0xa61464658afeaf65cccaafd3a512b69a83b77618");

fn tokens() -> Vec<Address> {
    vec![
        addr("0x3e7676937a7e96cfb7616f255b9ad9ff47363d4b"),
        addr("0x3355df6d4c9c3035724fd0e3914de96a5a83aaf4"),
        addr("0x000000000000000000000000000000000000800a"),
        addr("0xffffffffffffffffffffffffffffffffffffffff"),
    ]
}

fn amounts() -> Vec<Word> {
    vec![
        Word::zero(),
        Word::one(),
        Word::from(1_000_000_000_000_000_000u64),
        Word::max(),
    ]
}

#[test]
fn test_token_transfers_carry_data_not_value() -> eyre::Result<()> {
    for token in tokens() {
        for amount in amounts() {
            let msg = TransferCallMsg::new(TO, amount)
                .with_token(token)
                .with_sender(FROM)
                .to_call_msg()?;
            assert_eq!(msg.to, Some(token));
            assert!(msg.value.is_zero());
            assert_eq!(msg.data.len(), 4 + 32 + 32);
            assert_eq!(&msg.data.as_bytes()[4 + 32..], &amount.into_bytes());
            assert!(!msg.is_transfer());
        }
    }
    Ok(())
}

#[test]
fn test_eth_transfers_carry_value_not_data() -> eyre::Result<()> {
    for amount in amounts() {
        let msg = TransferCallMsg::new(TO, amount)
            .with_token(Token::Eth)
            .with_sender(FROM)
            .to_call_msg()?;
        assert_eq!(msg.to, Some(TO));
        assert_eq!(msg.value, amount);
        assert!(msg.is_transfer());
    }
    Ok(())
}

#[test]
fn test_repeated_calls_are_identical() -> eyre::Result<()> {
    let msg = TransferCallMsg::new(TO, Word::from(42u8))
        .with_token(tokens()[0])
        .with_sender(FROM)
        .with_gas(100_000)
        .with_fees(Fees::Legacy {
            gas_price: Word::from(250_000_000u64),
        });
    let a = msg.to_call_msg()?;
    let b = CallMsg::try_from(&msg)?;
    assert_eq!(a.data, b.data);
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_call_object_json() -> eyre::Result<()> {
    let msg = TransferCallMsg::new(TO, Word::from(1_000u64))
        .with_token(tokens()[0])
        .with_sender(FROM)
        .to_call_msg()?;
    pretty_assertions::assert_eq!(
        serde_json::to_value(&msg)?,
        serde_json::json!({
            "from": "0x36615cf349d7f6344891b1e7ca7c72883f5dc049",
            "to": "0x3e7676937a7e96cfb7616f255b9ad9ff47363d4b",
            "value": "0x0",
            "data": "0xa9059cbb000000000000000000000000a61464658afeaf65cccaafd3a512b69a83b7761800000000000000000000000000000000000000000000000000000000000003e8",
        })
    );
    Ok(())
}
