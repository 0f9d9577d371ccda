use soroban_sdk::{contracttype, Address, Env};

use crate::errors::TokenError;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 17280;
const BALANCE_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FlashLock {
    pub locked: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Admin,
    TotalSupply,
    Paused,
    Cap,
    FlashFee,
    FlashLock,
    Balance(Address),
    Allowance(Address, Address),
}

/// Extend instance storage TTL to keep the token alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn read_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn write_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn read_cap(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::Cap)
}

pub fn write_cap(env: &Env, cap: i128) {
    env.storage().instance().set(&DataKey::Cap, &cap);
}

pub fn read_flash_fee(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::FlashFee).unwrap_or(0)
}

pub fn write_flash_fee(env: &Env, fee: i128) {
    env.storage().instance().set(&DataKey::FlashFee, &fee);
}

pub fn read_flash_lock(env: &Env) -> FlashLock {
    env.storage()
        .instance()
        .get(&DataKey::FlashLock)
        .unwrap_or(FlashLock { locked: false })
}

pub fn write_flash_lock(env: &Env, lock: &FlashLock) {
    env.storage().instance().set(&DataKey::FlashLock, lock);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Reads an allowance. Entries past their expiration ledger read as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceEntry {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceEntry>(&key) {
        Some(entry) if entry.expiration_ledger < env.ledger().sequence() => AllowanceEntry {
            amount: 0,
            expiration_ledger: entry.expiration_ledger,
        },
        Some(entry) => entry,
        None => AllowanceEntry { amount: 0, expiration_ledger: 0 },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        return Err(TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage()
        .temporary()
        .set(&key, &AllowanceEntry { amount, expiration_ledger });

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}
