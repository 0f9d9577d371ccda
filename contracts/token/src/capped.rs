use soroban_sdk::Env;

use crate::{
    errors::TokenError,
    storage::{read_cap, write_cap},
};

/// Upper bound on total supply when no cap is configured.
pub const MAX_SUPPLY: i128 = i128::MAX;

/// Stores the cap chosen at initialization. `None` leaves the token uncapped.
pub fn init_cap(env: &Env, cap: Option<i128>) -> Result<(), TokenError> {
    if let Some(cap) = cap {
        if cap <= 0 {
            return Err(TokenError::InvalidCap);
        }
        write_cap(env, cap);
    }
    Ok(())
}

pub fn cap(env: &Env) -> Option<i128> {
    read_cap(env)
}

/// Highest total supply a mint may reach.
pub fn supply_limit(env: &Env) -> i128 {
    read_cap(env).unwrap_or(MAX_SUPPLY)
}

/// Rejects a mint of `amount` on top of `supply` that would pass the cap.
///
/// Compared as `amount > cap - supply` so the capped path never overflows;
/// uncapped tokens are left to the raw addition in `ledger::mint`.
pub fn check_cap(env: &Env, supply: i128, amount: i128) -> Result<(), TokenError> {
    if let Some(cap) = read_cap(env) {
        if amount > cap - supply {
            return Err(TokenError::CapExceeded);
        }
    }
    Ok(())
}
