//! Guarded calls into arbitrary token-like contracts.
//!
//! Tokens disagree on what a successful `transfer` or `approve` returns: some
//! answer `true`, some answer `false` instead of failing, some return nothing.
//! Every function here runs from inside the calling contract, normalizes
//! those answers and turns each failure into a [`SafeTokenError`].

#![no_std]

mod call;
mod errors;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::SafeTokenError;

use soroban_sdk::{log, Address, Env, IntoVal, Val, Vec};

fn check_nonnegative_amount(amount: i128) -> Result<(), SafeTokenError> {
    if amount < 0 {
        return Err(SafeTokenError::NegativeAmount);
    }
    Ok(())
}

/// Moves `amount` of `token` from the current contract to `to`.
pub fn safe_transfer(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), SafeTokenError> {
    check_nonnegative_amount(amount)?;
    let args: Vec<Val> = (env.current_contract_address(), to.clone(), amount).into_val(env);
    call::invoke_checked(env, token, "transfer", args)
}

/// Moves `amount` of `token` from `from` to `to`, spending the allowance
/// `from` granted the current contract.
pub fn safe_transfer_from(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), SafeTokenError> {
    check_nonnegative_amount(amount)?;
    let args: Vec<Val> =
        (env.current_contract_address(), from.clone(), to.clone(), amount).into_val(env);
    call::invoke_checked(env, token, "transfer_from", args)
}

fn approve_unchecked(
    env: &Env,
    token: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), SafeTokenError> {
    let args: Vec<Val> =
        (env.current_contract_address(), spender.clone(), amount, expiration_ledger).into_val(env);
    call::invoke_checked(env, token, "approve", args)
}

/// Sets the current contract's allowance to `spender`.
///
/// Moving one non-zero allowance straight to another lets `spender` front-run
/// the change and spend both, so a non-zero `amount` is only accepted while
/// the current allowance is zero. Resetting to zero is always allowed and does
/// not read the allowance.
pub fn safe_approve(
    env: &Env,
    token: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), SafeTokenError> {
    check_nonnegative_amount(amount)?;
    if amount != 0 {
        let current =
            call::read_allowance(env, token, &env.current_contract_address(), spender)?;
        if current != 0 {
            log!(env, "approval race refused", spender.clone(), current, amount);
            return Err(SafeTokenError::UnsafeApprovalRace);
        }
    }
    approve_unchecked(env, token, spender, amount, expiration_ledger)
}

pub fn safe_increase_allowance(
    env: &Env,
    token: &Address,
    spender: &Address,
    added: i128,
    expiration_ledger: u32,
) -> Result<(), SafeTokenError> {
    check_nonnegative_amount(added)?;
    let current = call::read_allowance(env, token, &env.current_contract_address(), spender)?;
    approve_unchecked(env, token, spender, current + added, expiration_ledger)
}

pub fn safe_decrease_allowance(
    env: &Env,
    token: &Address,
    spender: &Address,
    subtracted: i128,
    expiration_ledger: u32,
) -> Result<(), SafeTokenError> {
    check_nonnegative_amount(subtracted)?;
    let current = call::read_allowance(env, token, &env.current_contract_address(), spender)?;
    if subtracted > current {
        return Err(SafeTokenError::AllowanceUnderflow);
    }
    approve_unchecked(env, token, spender, current - subtracted, expiration_ledger)
}
