#![cfg_attr(not(test), no_std)]

mod capped;
mod errors;
mod events;
mod flash_mint;
mod ledger;
mod pausable;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

pub use errors::TokenError;

use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

fn require_admin(env: &Env) -> Result<Address, TokenError> {
    let admin = storage::read_admin(env).ok_or(TokenError::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

/// Metadata is written together with the admin, so the admin doubles as the
/// initialization marker.
fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    if !storage::has_admin(env) {
        return Err(TokenError::NotInitialized);
    }
    Ok(TokenUtils::new(env).metadata().get_metadata())
}

#[contract]
pub struct FrexToken;

#[contractimpl]
impl FrexToken {
    /// Sets metadata and admin, fixes the optional supply cap and credits
    /// `initial_supply` to `initial_holder`.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        initial_holder: Address,
        initial_supply: i128,
        cap: Option<i128>,
    ) -> Result<(), TokenError> {
        if storage::has_admin(&env) {
            return Err(TokenError::AlreadyInitialized);
        }

        capped::init_cap(&env, cap)?;
        storage::write_admin(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata { decimal, name, symbol });

        if initial_supply != 0 {
            ledger::mint(&env, &initial_holder, initial_supply)?;
        }

        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        storage::read_admin(&env).ok_or(TokenError::NotInitialized)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        ledger::allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::transfer_from(&env, &spender, &from, &to, amount)
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        require_admin(&env)?;
        storage::extend_instance_ttl(&env);
        ledger::mint(&env, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::burn(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::burn_from(&env, &spender, &from, amount)
    }

    pub fn total_supply(env: Env) -> i128 {
        ledger::total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.symbol)
    }

    pub fn pause(env: Env) -> Result<(), TokenError> {
        require_admin(&env)?;
        storage::extend_instance_ttl(&env);
        pausable::pause(&env);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), TokenError> {
        require_admin(&env)?;
        storage::extend_instance_ttl(&env);
        pausable::unpause(&env);
        Ok(())
    }

    pub fn paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    pub fn cap(env: Env) -> Option<i128> {
        capped::cap(&env)
    }

    pub fn max_flash_loan(env: Env, token: Address) -> i128 {
        flash_mint::max_flash_loan(&env, &token)
    }

    pub fn flash_fee(env: Env, token: Address, amount: i128) -> Result<i128, TokenError> {
        flash_mint::flash_fee(&env, &token, amount)
    }

    pub fn set_flash_fee(env: Env, fee: i128) -> Result<(), TokenError> {
        require_admin(&env)?;
        storage::extend_instance_ttl(&env);
        flash_mint::set_flash_fee(&env, fee)
    }

    /// Flash-mints `amount` of this token to `receiver`, who must hand it back
    /// plus the fee before the invocation ends. See
    /// [`flash_mint::execute_flash_loan`] for the full flow.
    pub fn flash_loan(
        env: Env,
        initiator: Address,
        receiver: Address,
        token: Address,
        amount: i128,
        data: Bytes,
    ) -> Result<(), TokenError> {
        initiator.require_auth();
        storage::extend_instance_ttl(&env);
        log!(&env, "flash loan requested", receiver.clone(), amount);
        flash_mint::execute_flash_loan(&env, &initiator, &receiver, &token, amount, &data)
    }
}
