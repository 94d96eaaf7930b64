pub mod builder;
pub mod common;
pub mod contracts;
pub mod token;
pub mod transfer;
pub mod withdrawal;

pub use crate::{
    builder::Builder,
    common::{
        address::{Address, ETH_ADDRESS, L2_ETH_TOKEN_ADDRESS, addr},
        block::{Block, BlockRange},
        call::{AccessListItem, CallMsg, Fees},
        error::{EncodingError, Error, ParseError},
        hash::{Hash, hash},
        word::Word,
    },
    token::Token,
    transfer::TransferCallMsg,
    withdrawal::WithdrawalCallMsg,
};
