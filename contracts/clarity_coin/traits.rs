use ink::prelude::{string::String, vec::Vec};
use ink::primitives::AccountId;

use crate::model::{Balance, Result};

/// SIP-010 fungible token surface.
#[ink::trait_definition]
pub trait Sip010 {
    #[ink(message)]
    fn get_name(&self) -> String;

    #[ink(message)]
    fn get_symbol(&self) -> String;

    #[ink(message)]
    fn get_decimals(&self) -> u8;

    #[ink(message)]
    fn get_token_uri(&self) -> Option<String>;

    /// Zero for accounts that never held tokens.
    #[ink(message)]
    fn get_balance(&self, owner_acc: AccountId) -> Balance;

    #[ink(message)]
    fn get_total_supply(&self) -> Balance;

    /// Moves `amount_val` from `sender_acc` to `recipient_acc`. Only `sender_acc`
    /// itself may call this. `memo` is handed to observers untouched and never stored.
    #[ink(message)]
    fn transfer(
        &mut self,
        amount_val: Balance,
        sender_acc: AccountId,
        recipient_acc: AccountId,
        memo: Option<Vec<u8>>,
    ) -> Result<bool>;
}
