#![no_std]

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

/// `keccak256("ERC3156FlashBorrower.onFlashLoan")`, the value a borrower
/// returns to accept a flash loan.
pub const CALLBACK_SUCCESS: [u8; 32] = [
    0x43, 0x91, 0x48, 0xf0, 0xbb, 0xc6, 0x82, 0xca, 0x07, 0x9e, 0x46, 0xd6, 0xe2, 0xc2, 0xf0, 0xc1,
    0xe3, 0xb8, 0x20, 0xf1, 0xa2, 0x91, 0xb0, 0x69, 0xd8, 0x88, 0x2a, 0xbf, 0x8c, 0xf1, 0x8d, 0xd9,
];

pub fn callback_success(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &CALLBACK_SUCCESS)
}

/// Flash Borrower Interface.
/// Contracts receiving flash-minted tokens must implement this trait.
/// The token invokes `on_flash_loan` right after minting `amount` to the
/// borrower and expects [`CALLBACK_SUCCESS`] back.
/// The token cannot be re-entered from inside the callback, so the borrower
/// approves the token contract for `amount + fee` before the loan starts; the
/// token spends that allowance and burns the amount on settlement.
#[contractclient(name = "FlashBorrowerClient")]
pub trait FlashBorrower {
    fn on_flash_loan(
        env: Env,
        initiator: Address,
        token: Address,
        amount: i128,
        fee: i128,
        data: Bytes,
    ) -> BytesN<32>;
}
