#![no_std]

use frex_flash_borrower_interface::{callback_success, FlashBorrower};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token::TokenClient, Address, Bytes,
    BytesN, Env,
};

/// Ledgers the refund allowance stays valid for.
const REFUND_ALLOWANCE_LEDGERS: u32 = 100;

#[contracttype]
enum DataKey {
    ReturnSentinel,
}

#[contract]
pub struct MockFlashBorrower;

#[contractimpl]
impl MockFlashBorrower {
    /// With `return_sentinel = false` every callback answers with zeroes
    /// instead of the success value.
    pub fn init(env: Env, return_sentinel: bool) {
        env.storage().instance().set(&DataKey::ReturnSentinel, &return_sentinel);
    }

    /// Approves `token` to pull `amount` back from this contract at settlement.
    pub fn approve_refund(env: Env, token: Address, amount: i128) {
        let me = env.current_contract_address();
        let expiration_ledger = env.ledger().sequence() + REFUND_ALLOWANCE_LEDGERS;
        TokenClient::new(&env, &token).approve(&me, &token, &amount, &expiration_ledger);
    }
}

#[contractimpl]
impl FlashBorrower for MockFlashBorrower {
    fn on_flash_loan(
        env: Env,
        initiator: Address,
        token: Address,
        amount: i128,
        fee: i128,
        data: Bytes,
    ) -> BytesN<32> {
        let reenter_bytes = Bytes::from_slice(&env, b"reenter");

        if data == reenter_bytes {
            // Tries to move part of the loan away through the token itself.
            // The host refuses the nested call and the loan aborts.
            let me = env.current_contract_address();
            TokenClient::new(&env, &token).transfer(&me, &initiator, &1);
        }

        env.events()
            .publish((symbol_short!("borrowed"), token), (initiator, amount, fee));

        let return_sentinel = env
            .storage()
            .instance()
            .get(&DataKey::ReturnSentinel)
            .unwrap_or(true);

        if return_sentinel {
            callback_success(&env)
        } else {
            BytesN::from_array(&env, &[0u8; 32])
        }
    }
}
