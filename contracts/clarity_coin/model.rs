use ink::prelude::vec::Vec;
use ink::primitives::AccountId;

/// Smallest indivisible token unit.
pub type Balance = u128;

pub type Result<T> = core::result::Result<T, Error>;

/// Token metadata is informational only; balances carry no implied scaling.
pub const DECIMALS: u8 = 0;
pub const DEFAULT_NAME: &str = "Clarity Coin";
pub const DEFAULT_SYMBOL: &str = "CC";

/// The encoded variant index is the code callers see on the wire.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
#[repr(u8)]
pub enum Error {
    InsufficientBalance = 1,
    /// Caller is not the contract owner.
    OwnerOnly = 100,
    /// Caller tried to move funds out of an account it does not control.
    NotTokenOwner = 101,
    /// Supply or a balance would exceed `Balance::MAX`.
    Overflow = 255,
}

impl Error {
    /// Numeric code reported to callers, `None` for fatal faults.
    pub fn code(&self) -> Option<u32> {
        if self.is_fatal() {
            return None
        }
        Some(*self as u8 as u32)
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Overflow)
    }
}

#[ink::event]
pub struct Minted {
    #[ink(topic)]
    pub recipient_acc: AccountId,
    pub amount_val: Balance,
}

/// The memo only ever lives here; the ledger never stores it.
#[ink::event]
pub struct Transferred {
    #[ink(topic)]
    pub sender_acc: AccountId,
    #[ink(topic)]
    pub recipient_acc: AccountId,
    pub amount_val: Balance,
    pub memo: Option<Vec<u8>>,
}
