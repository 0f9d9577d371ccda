use soroban_sdk::{log, Env};

use crate::{
    errors::TokenError,
    events::TokenEvents,
    storage::{read_paused, write_paused},
};

pub fn is_paused(env: &Env) -> bool {
    read_paused(env)
}

/// Gate consulted by every balance-mutating entry point before it touches
/// storage.
pub fn when_not_paused(env: &Env) -> Result<(), TokenError> {
    if read_paused(env) {
        return Err(TokenError::TokenPaused);
    }
    Ok(())
}

pub fn pause(env: &Env) {
    write_paused(env, true);
    TokenEvents::paused(env);
    log!(env, "token paused");
}

pub fn unpause(env: &Env) {
    write_paused(env, false);
    TokenEvents::unpaused(env);
    log!(env, "token unpaused");
}
