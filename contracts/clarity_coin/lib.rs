#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod ledger;
pub mod model;
pub mod traits;

pub use ledger::LedgerStore;
pub use model::{Error, Minted, Result, Transferred};
pub use traits::Sip010;

#[ink::contract]
mod clarity_coin {
    use ink::prelude::{string::String, vec::Vec};
    use ink::storage::Mapping;

    use crate::ledger::LedgerStore;
    use crate::model::{Error, Minted, Result, Transferred, DECIMALS, DEFAULT_NAME, DEFAULT_SYMBOL};
    use crate::traits::Sip010;

    #[ink(storage)]
    pub struct ClarityCoin {
        // governance
        owner_acc: AccountId,

        // metadata, fixed at instantiation
        name: String,
        symbol: String,
        token_uri: Option<String>,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
    }

    impl ClarityCoin {
        // -------- constructors --------

        /// The instantiating account becomes the owner and sole minter.
        #[ink(constructor)]
        pub fn new(name: String, symbol: String, token_uri: Option<String>) -> Self {
            Self {
                owner_acc: Self::env().caller(),
                name,
                symbol,
                token_uri,
                total_supply: 0,
                balances: Mapping::default(),
            }
        }

        #[allow(clippy::should_implement_trait)]
        #[ink(constructor)]
        pub fn default() -> Self {
            Self::new(String::from(DEFAULT_NAME), String::from(DEFAULT_SYMBOL), None)
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self, caller_acc: AccountId) -> Result<()> {
            if caller_acc != self.owner_acc {
                return Err(Error::OwnerOnly)
            }
            Ok(())
        }

        fn only_self(caller_acc: AccountId, sender_acc: AccountId) -> Result<()> {
            if caller_acc != sender_acc {
                return Err(Error::NotTokenOwner)
            }
            Ok(())
        }

        // -------- read API --------

        #[ink(message)]
        pub fn get_owner(&self) -> AccountId {
            self.owner_acc
        }

        // -------- write API --------

        /// Issues `amount_val` new tokens to `recipient_acc`. Owner only.
        #[ink(message)]
        pub fn mint(&mut self, amount_val: Balance, recipient_acc: AccountId) -> Result<bool> {
            let caller_acc = self.env().caller();
            self.mint_as(caller_acc, amount_val, recipient_acc)
        }

        // ---- internals ----

        /// Mint on behalf of an already-authenticated caller.
        pub(crate) fn mint_as(
            &mut self,
            caller_acc: AccountId,
            amount_val: Balance,
            recipient_acc: AccountId,
        ) -> Result<bool> {
            self.only_owner(caller_acc)?;
            self.credit(&recipient_acc, amount_val)?;

            self.env().emit_event(Minted { recipient_acc, amount_val });
            Ok(true)
        }

        /// Transfer on behalf of an already-authenticated caller.
        pub(crate) fn transfer_as(
            &mut self,
            caller_acc: AccountId,
            amount_val: Balance,
            sender_acc: AccountId,
            recipient_acc: AccountId,
            memo: Option<Vec<u8>>,
        ) -> Result<bool> {
            Self::only_self(caller_acc, sender_acc)?;
            self.move_balance(&sender_acc, &recipient_acc, amount_val)?;

            self.env().emit_event(Transferred {
                sender_acc,
                recipient_acc,
                amount_val,
                memo,
            });
            Ok(true)
        }
    }

    impl Sip010 for ClarityCoin {
        #[ink(message)]
        fn get_name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        fn get_symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        fn get_decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        fn get_token_uri(&self) -> Option<String> {
            self.token_uri.clone()
        }

        #[ink(message)]
        fn get_balance(&self, owner_acc: AccountId) -> Balance {
            self.balance_of(&owner_acc)
        }

        #[ink(message)]
        fn get_total_supply(&self) -> Balance {
            LedgerStore::total_supply(self)
        }

        #[ink(message)]
        fn transfer(
            &mut self,
            amount_val: Balance,
            sender_acc: AccountId,
            recipient_acc: AccountId,
            memo: Option<Vec<u8>>,
        ) -> Result<bool> {
            let caller_acc = self.env().caller();
            self.transfer_as(caller_acc, amount_val, sender_acc, recipient_acc, memo)
        }
    }

    impl LedgerStore for ClarityCoin {
        fn read_balance(&self, owner_acc: &AccountId) -> Option<Balance> {
            self.balances.get(owner_acc)
        }

        fn write_balance(&mut self, owner_acc: &AccountId, value: Balance) {
            self.balances.insert(owner_acc, &value);
        }

        fn read_supply(&self) -> Balance {
            self.total_supply
        }

        fn write_supply(&mut self, value: Balance) {
            self.total_supply = value;
        }
    }


    #[cfg(all(test, feature = "e2e-tests"))]
    mod e2e_tests {
        use super::*;
        use ink_e2e::ContractsBackend;

        type E2EResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

        #[ink_e2e::test]
        async fn mint_and_transfer_e2e<Client: E2EBackend>(mut client: Client) -> E2EResult<()> {
            let mut constructor = ClarityCoinRef::default();
            let contract = client
                .instantiate("clarity_coin", &ink_e2e::alice(), &mut constructor)
                .submit()
                .await
                .expect("instantiate failed");
            let mut call_builder = contract.call_builder::<ClarityCoin>();

            let bob_acc = ink_e2e::account_id(ink_e2e::AccountKeyring::Bob);
            let charlie_acc = ink_e2e::account_id(ink_e2e::AccountKeyring::Charlie);

            let mint = call_builder.mint(1000, bob_acc);
            client
                .call(&ink_e2e::alice(), &mint)
                .submit()
                .await
                .expect("mint failed");

            let transfer = call_builder.transfer(300, bob_acc, charlie_acc, None);
            client
                .call(&ink_e2e::bob(), &transfer)
                .submit()
                .await
                .expect("transfer failed");

            let get_bob = call_builder.get_balance(bob_acc);
            let bob_bal = client.call(&ink_e2e::bob(), &get_bob).dry_run().await?;
            assert_eq!(bob_bal.return_value(), 700);

            let get_supply = call_builder.get_total_supply();
            let supply = client.call(&ink_e2e::bob(), &get_supply).dry_run().await?;
            assert_eq!(supply.return_value(), 1000);
            Ok(())
        }

        #[ink_e2e::test]
        async fn non_owner_mint_e2e<Client: E2EBackend>(mut client: Client) -> E2EResult<()> {
            let mut constructor = ClarityCoinRef::default();
            let contract = client
                .instantiate("clarity_coin", &ink_e2e::alice(), &mut constructor)
                .submit()
                .await
                .expect("instantiate failed");
            let mut call_builder = contract.call_builder::<ClarityCoin>();

            let bob_acc = ink_e2e::account_id(ink_e2e::AccountKeyring::Bob);
            let mint = call_builder.mint(1000, bob_acc);
            let result = client.call(&ink_e2e::bob(), &mint).dry_run().await?;
            assert_eq!(result.return_value(), Err(Error::OwnerOnly));
            Ok(())
        }
    }
}
