use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub struct TokenEvents;

impl TokenEvents {
    /// Emits a `transfer` event for every balance movement.
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `amount`
    ///
    /// Mints carry `from = None`, burns carry `to = None`, so indexers can
    /// rebuild supply from this single stream.
    pub fn transfer(env: &Env, from: Option<Address>, to: Option<Address>, amount: i128) {
        env.events().publish((symbol_short!("transfer"), from, to), amount);
    }

    pub fn approve(
        env: &Env,
        from: &Address,
        spender: &Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        env.events().publish(
            (symbol_short!("approve"), from.clone(), spender.clone()),
            (amount, expiration_ledger),
        );
    }

    pub fn paused(env: &Env) {
        env.events().publish((symbol_short!("paused"),), ());
    }

    pub fn unpaused(env: &Env) {
        env.events().publish((symbol_short!("unpaused"),), ());
    }

    /// Emits a `flash_loan` event after a settled flash loan.
    ///
    /// Topics: `("flash_loan", receiver)`
    /// Data:   `(initiator, amount, fee)`
    ///
    /// "flash_loan" = 10 chars, over the 9-char symbol_short! limit.
    pub fn flash_loan(env: &Env, receiver: &Address, initiator: &Address, amount: i128, fee: i128) {
        env.events().publish(
            (Symbol::new(env, "flash_loan"), receiver.clone()),
            (initiator.clone(), amount, fee),
        );
    }
}
