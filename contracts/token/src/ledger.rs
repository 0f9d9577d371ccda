//! Balance, allowance and supply bookkeeping.
//!
//! Every function here validates its whole input before the first storage
//! write, so a failing call leaves no partial effects even when it runs
//! outside a host-level rollback (e.g. from `env.as_contract` in tests).

use soroban_sdk::{Address, Env};

use crate::{
    capped,
    errors::TokenError,
    events::TokenEvents,
    pausable,
    storage::{
        read_allowance, read_balance, read_total_supply, write_allowance, write_balance,
        write_total_supply, AllowanceEntry,
    },
};

pub fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

/// The token's own address stands in for the null recipient: nothing sent
/// there can ever be moved again.
fn check_recipient(env: &Env, to: &Address) -> Result<(), TokenError> {
    if *to == env.current_contract_address() {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

/// Returns the current balance of `id` if it covers `amount`.
fn covered_balance(env: &Env, id: &Address, amount: i128) -> Result<i128, TokenError> {
    let balance = read_balance(env, id);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(balance)
}

/// Returns the live allowance `from -> spender` if it covers `amount`.
fn covered_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<AllowanceEntry, TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(allowance)
}

fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    entry: AllowanceEntry,
    amount: i128,
) -> Result<(), TokenError> {
    if amount == 0 {
        return Ok(());
    }
    write_allowance(env, from, spender, entry.amount - amount, entry.expiration_ledger)
}

fn receive_balance(env: &Env, id: &Address, amount: i128) {
    // Bounded by total supply, which is itself at most i128::MAX.
    let balance = read_balance(env, id);
    write_balance(env, id, balance + amount);
}

fn move_balance(env: &Env, from: &Address, from_balance: i128, to: &Address, amount: i128) {
    write_balance(env, from, from_balance - amount);
    receive_balance(env, to, amount);
    TokenEvents::transfer(env, Some(from.clone()), Some(to.clone()), amount);
}

fn destroy(env: &Env, from: &Address, from_balance: i128, amount: i128) {
    write_balance(env, from, from_balance - amount);
    write_total_supply(env, read_total_supply(env) - amount);
    TokenEvents::transfer(env, Some(from.clone()), None, amount);
}

pub fn balance(env: &Env, id: &Address) -> i128 {
    read_balance(env, id)
}

pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    read_allowance(env, from, spender).amount
}

pub fn total_supply(env: &Env) -> i128 {
    read_total_supply(env)
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    write_allowance(env, from, spender, amount, expiration_ledger)?;
    TokenEvents::approve(env, from, spender, amount, expiration_ledger);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    pausable::when_not_paused(env)?;
    check_recipient(env, to)?;
    let from_balance = covered_balance(env, from, amount)?;

    move_balance(env, from, from_balance, to, amount);
    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    pausable::when_not_paused(env)?;
    check_recipient(env, to)?;
    let allowance = covered_allowance(env, from, spender, amount)?;
    let from_balance = covered_balance(env, from, amount)?;

    spend_allowance(env, from, spender, allowance, amount)?;
    move_balance(env, from, from_balance, to, amount);
    Ok(())
}

/// Credits `amount` of new supply to `to`.
///
/// The capped path is checked; past that, `supply + amount` is a plain `i128`
/// addition and overflowing it traps without an error code.
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    pausable::when_not_paused(env)?;
    check_recipient(env, to)?;
    let supply = read_total_supply(env);
    capped::check_cap(env, supply, amount)?;

    let new_supply = supply + amount;

    write_total_supply(env, new_supply);
    receive_balance(env, to, amount);
    TokenEvents::transfer(env, None, Some(to.clone()), amount);
    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    pausable::when_not_paused(env)?;
    let from_balance = covered_balance(env, from, amount)?;

    destroy(env, from, from_balance, amount);
    Ok(())
}

pub fn burn_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    pausable::when_not_paused(env)?;
    let allowance = covered_allowance(env, from, spender, amount)?;
    let from_balance = covered_balance(env, from, amount)?;

    spend_allowance(env, from, spender, allowance, amount)?;
    destroy(env, from, from_balance, amount);
    Ok(())
}
