#![cfg(test)]

// ---------------------------------------------------------------------------
// Safe wrapper tests
//
// Each target below answers `transfer`, `transfer_from` and `approve` in a
// different way. `SafeCaller` is a thin contract around the library so the
// wrapper runs with a real current-contract address and real rollback.
// ---------------------------------------------------------------------------


use soroban_sdk::{testutils::Address as _, Address, Env};

use caller::{SafeCaller, SafeCallerClient};

pub(crate) const EXPIRATION: u32 = 1_000;

mod caller {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    use crate::{
        safe_approve, safe_decrease_allowance, safe_increase_allowance, safe_transfer,
        safe_transfer_from, SafeTokenError,
    };

    #[contract]
    pub struct SafeCaller;

    #[contractimpl]
    impl SafeCaller {
        pub fn transfer(
            env: Env,
            token: Address,
            to: Address,
            amount: i128,
        ) -> Result<(), SafeTokenError> {
            safe_transfer(&env, &token, &to, amount)
        }

        pub fn transfer_from(
            env: Env,
            token: Address,
            from: Address,
            to: Address,
            amount: i128,
        ) -> Result<(), SafeTokenError> {
            safe_transfer_from(&env, &token, &from, &to, amount)
        }

        pub fn approve(
            env: Env,
            token: Address,
            spender: Address,
            amount: i128,
            expiration_ledger: u32,
        ) -> Result<(), SafeTokenError> {
            safe_approve(&env, &token, &spender, amount, expiration_ledger)
        }

        pub fn increase(
            env: Env,
            token: Address,
            spender: Address,
            added: i128,
            expiration_ledger: u32,
        ) -> Result<(), SafeTokenError> {
            safe_increase_allowance(&env, &token, &spender, added, expiration_ledger)
        }

        pub fn decrease(
            env: Env,
            token: Address,
            spender: Address,
            subtracted: i128,
            expiration_ledger: u32,
        ) -> Result<(), SafeTokenError> {
            safe_decrease_allowance(&env, &token, &spender, subtracted, expiration_ledger)
        }
    }
}

/// Answers `true` and records every call.
pub(crate) mod true_token {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    pub enum DataKey {
        Allowance(Address, Address),
        LastTransfer,
    }

    #[contract]
    pub struct TrueToken;

    #[contractimpl]
    impl TrueToken {
        pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> bool {
            env.storage().instance().set(&DataKey::LastTransfer, &(from, to, amount));
            true
        }

        pub fn transfer_from(
            env: Env,
            _spender: Address,
            from: Address,
            to: Address,
            amount: i128,
        ) -> bool {
            env.storage().instance().set(&DataKey::LastTransfer, &(from, to, amount));
            true
        }

        pub fn approve(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
            _expiration_ledger: u32,
        ) -> bool {
            env.storage().instance().set(&DataKey::Allowance(from, spender), &amount);
            true
        }

        pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
            env.storage().instance().get(&DataKey::Allowance(from, spender)).unwrap_or(0)
        }

        pub fn last_transfer(env: Env) -> Option<(Address, Address, i128)> {
            env.storage().instance().get(&DataKey::LastTransfer)
        }
    }
}

/// Returns nothing from mutating calls.
pub(crate) mod void_token {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    pub enum DataKey {
        Allowance(Address, Address),
        Transfers,
    }

    #[contract]
    pub struct VoidToken;

    #[contractimpl]
    impl VoidToken {
        pub fn transfer(env: Env, _from: Address, _to: Address, _amount: i128) {
            let count: u32 = env.storage().instance().get(&DataKey::Transfers).unwrap_or(0);
            env.storage().instance().set(&DataKey::Transfers, &(count + 1));
        }

        pub fn transfer_from(env: Env, _spender: Address, _from: Address, _to: Address, _amount: i128) {
            let count: u32 = env.storage().instance().get(&DataKey::Transfers).unwrap_or(0);
            env.storage().instance().set(&DataKey::Transfers, &(count + 1));
        }

        pub fn approve(
            env: Env,
            from: Address,
            spender: Address,
            amount: i128,
            _expiration_ledger: u32,
        ) {
            env.storage().instance().set(&DataKey::Allowance(from, spender), &amount);
        }

        pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
            env.storage().instance().get(&DataKey::Allowance(from, spender)).unwrap_or(0)
        }

        pub fn transfers(env: Env) -> u32 {
            env.storage().instance().get(&DataKey::Transfers).unwrap_or(0)
        }
    }
}

/// Reports failure by answering `false`.
pub(crate) mod false_token {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    #[contract]
    pub struct FalseToken;

    #[contractimpl]
    impl FalseToken {
        pub fn transfer(_env: Env, _from: Address, _to: Address, _amount: i128) -> bool {
            false
        }

        pub fn transfer_from(
            _env: Env,
            _spender: Address,
            _from: Address,
            _to: Address,
            _amount: i128,
        ) -> bool {
            false
        }

        pub fn approve(
            _env: Env,
            _from: Address,
            _spender: Address,
            _amount: i128,
            _expiration_ledger: u32,
        ) -> bool {
            false
        }

        pub fn allowance(_env: Env, _from: Address, _spender: Address) -> i128 {
            0
        }
    }
}

/// Answers with a number instead of a flag.
pub(crate) mod odd_token {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    #[contract]
    pub struct OddToken;

    #[contractimpl]
    impl OddToken {
        pub fn transfer(_env: Env, _from: Address, _to: Address, _amount: i128) -> u32 {
            1
        }

        pub fn approve(
            _env: Env,
            _from: Address,
            _spender: Address,
            _amount: i128,
            _expiration_ledger: u32,
        ) -> u32 {
            1
        }
    }
}

/// Aborts every mutating call with its own error code.
pub(crate) mod reverting_token {
    use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    #[repr(u32)]
    pub enum RevertError {
        Rejected = 1,
    }

    #[contract]
    pub struct RevertingToken;

    #[contractimpl]
    impl RevertingToken {
        pub fn transfer(
            _env: Env,
            _from: Address,
            _to: Address,
            _amount: i128,
        ) -> Result<(), RevertError> {
            Err(RevertError::Rejected)
        }

        pub fn transfer_from(
            _env: Env,
            _spender: Address,
            _from: Address,
            _to: Address,
            _amount: i128,
        ) -> Result<(), RevertError> {
            Err(RevertError::Rejected)
        }

        pub fn approve(
            _env: Env,
            _from: Address,
            _spender: Address,
            _amount: i128,
            _expiration_ledger: u32,
        ) -> Result<(), RevertError> {
            Err(RevertError::Rejected)
        }

        pub fn allowance(_env: Env, _from: Address, _spender: Address) -> i128 {
            0
        }
    }
}

pub(crate) struct Setup<'a> {
    pub env: Env,
    pub caller: Address,
    pub client: SafeCallerClient<'a>,
    pub other: Address,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let caller = env.register_contract(None, SafeCaller);
        let client = SafeCallerClient::new(&env, &caller);
        let other = Address::generate(&env);

        Setup { env, caller, client, other }
    }
}
