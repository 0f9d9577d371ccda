#![cfg(test)]

// ---------------------------------------------------------------------------
// Token test suite
//
// ledger:     transfer / approve / transfer_from / mint / burn bookkeeping
// burnable:   burn and burn_from
// pausable:   every gated entry point, paused and after unpause
// capped:     cap validation and enforcement
// flash_mint: full flash-loan lifecycle against real borrower contracts,
//             plus the open-loan flag
// events:     event payloads
// ---------------------------------------------------------------------------


use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events as _},
    Address, Env, IntoVal, String, TryFromVal, Val, Vec,
};

use crate::{FrexToken, FrexTokenClient};

pub(crate) const NAME: &str = "Freedom";
pub(crate) const SYMBOL: &str = "FREX";
pub(crate) const DECIMALS: u32 = 7;

pub(crate) struct Setup<'a> {
    pub env: Env,
    pub admin: Address,
    pub holder: Address,
    pub token: Address,
    pub client: FrexTokenClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new(initial_supply: i128) -> Self {
        Self::with_cap(initial_supply, None)
    }

    pub fn with_cap(initial_supply: i128, cap: Option<i128>) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let holder = Address::generate(&env);
        let token = env.register_contract(None, FrexToken);
        let client = FrexTokenClient::new(&env, &token);

        client.initialize(
            &admin,
            &DECIMALS,
            &String::from_str(&env, NAME),
            &String::from_str(&env, SYMBOL),
            &holder,
            &initial_supply,
            &cap,
        );

        Setup { env, admin, holder, token, client }
    }

    /// An allowance expiration comfortably in the future.
    pub fn expiration(&self) -> u32 {
        self.env.ledger().sequence() + 1_000
    }
}

/// True if `token` published `("transfer", from, to) -> amount`.
pub(crate) fn has_transfer_event(
    env: &Env,
    token: &Address,
    from: Option<Address>,
    to: Option<Address>,
    amount: i128,
) -> bool {
    let topics: Vec<Val> = (symbol_short!("transfer"), from, to).into_val(env);
    env.events().all().iter().any(|(contract, event_topics, data)| {
        contract == *token
            && event_topics == topics
            && matches!(i128::try_from_val(env, &data), Ok(value) if value == amount)
    })
}
