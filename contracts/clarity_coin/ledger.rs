use ink::primitives::AccountId;

use crate::model::{Balance, Error, Result};

/// Balance table plus total supply.
///
/// Implementors only provide raw reads and writes; the provided operations
/// do all arithmetic up front and write only once every check has passed,
/// so a failed call leaves the store untouched. No authorization happens
/// at this layer.
pub trait LedgerStore {
    fn read_balance(&self, owner_acc: &AccountId) -> Option<Balance>;
    fn write_balance(&mut self, owner_acc: &AccountId, value: Balance);
    fn read_supply(&self) -> Balance;
    fn write_supply(&mut self, value: Balance);

    /// Absent accounts hold zero.
    fn balance_of(&self, owner_acc: &AccountId) -> Balance {
        self.read_balance(owner_acc).unwrap_or(0)
    }

    fn total_supply(&self) -> Balance {
        self.read_supply()
    }

    /// Adds `amount_val` to both the account and the total supply.
    fn credit(&mut self, to_acc: &AccountId, amount_val: Balance) -> Result<()> {
        let new_total = self
            .read_supply()
            .checked_add(amount_val)
            .ok_or(Error::Overflow)?;
        let new_to = self
            .balance_of(to_acc)
            .checked_add(amount_val)
            .ok_or(Error::Overflow)?;

        self.write_supply(new_total);
        self.write_balance(to_acc, new_to);
        Ok(())
    }

    /// Takes `amount_val` out of an account. Supply is unchanged.
    fn debit(&mut self, from_acc: &AccountId, amount_val: Balance) -> Result<()> {
        let new_from = self
            .balance_of(from_acc)
            .checked_sub(amount_val)
            .ok_or(Error::InsufficientBalance)?;
        self.write_balance(from_acc, new_from);
        Ok(())
    }

    /// Debit then credit as one unit: both sides land or neither does.
    fn move_balance(
        &mut self,
        from_acc: &AccountId,
        to_acc: &AccountId,
        amount_val: Balance,
    ) -> Result<()> {
        let new_from = self
            .balance_of(from_acc)
            .checked_sub(amount_val)
            .ok_or(Error::InsufficientBalance)?;

        // debit and credit of one account cancel out
        if from_acc == to_acc {
            return Ok(())
        }

        let new_to = self
            .balance_of(to_acc)
            .checked_add(amount_val)
            .ok_or(Error::Overflow)?;

        self.write_balance(from_acc, new_from);
        self.write_balance(to_acc, new_to);
        Ok(())
    }
}
