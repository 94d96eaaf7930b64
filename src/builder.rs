use crate::common::{
    address::Address,
    call::{AccessListItem, Fees},
};

/// Setters shared by the transfer and withdrawal requests.
pub trait Builder {
    fn with_sender(self, sender: Address) -> Self;
    fn with_gas(self, gas: u64) -> Self;
    fn with_fees(self, fees: Fees) -> Self;
    fn with_access_list(self, access_list: Vec<AccessListItem>) -> Self;
}
