use soroban_sdk::{log, Address, Bytes, Env};

use frex_flash_borrower_interface::{callback_success, FlashBorrowerClient};

use crate::{
    capped,
    errors::TokenError,
    events::TokenEvents,
    ledger, pausable,
    storage::{
        read_allowance, read_flash_fee, read_flash_lock, read_total_supply, write_flash_fee,
        write_flash_lock, FlashLock,
    },
};

/// Marks a loan as open. The host already refuses a borrower that calls back
/// into this contract, so the flag only trips when code running as this
/// contract starts a second loan before the first has settled.
pub(crate) fn lock_loan(env: &Env) -> Result<(), TokenError> {
    if read_flash_lock(env).locked {
        return Err(TokenError::FlashLoanInProgress);
    }
    write_flash_lock(env, &FlashLock { locked: true });
    Ok(())
}

/// A failed loan rolls the flag back with everything else, so only the
/// settled path clears it.
pub(crate) fn unlock_loan(env: &Env) {
    write_flash_lock(env, &FlashLock { locked: false });
}

/// Largest amount `token` can be flash-minted right now.
///
/// Only this contract's own token is lendable; any other address yields 0.
/// On a capped token the headroom is measured against the cap, since the
/// mint that opens the loan is subject to it.
pub fn max_flash_loan(env: &Env, token: &Address) -> i128 {
    if *token != env.current_contract_address() {
        return 0;
    }
    capped::supply_limit(env) - read_total_supply(env)
}

/// Fee charged on a loan of `token`. Flat, admin-configured, 0 by default.
pub fn flash_fee(env: &Env, token: &Address, _amount: i128) -> Result<i128, TokenError> {
    if *token != env.current_contract_address() {
        return Err(TokenError::UnsupportedToken);
    }
    Ok(read_flash_fee(env))
}

pub fn set_flash_fee(env: &Env, fee: i128) -> Result<(), TokenError> {
    ledger::check_nonnegative_amount(fee)?;
    write_flash_fee(env, fee);
    log!(env, "flash fee updated", fee);
    Ok(())
}

/// Flash-mints `amount` to `receiver` and burns it back, plus the fee, within
/// the same invocation.
///
/// # Flow
/// 1. **Pre-flight checks**: amount sign, pause gate, token identity, fee.
/// 2. **Lock**: acquired before any balance movement.
/// 3. **Mint**: `amount` to `receiver`, under the cap and raw-overflow rules
///    of `ledger::mint`.
/// 4. **Callback**: `receiver.on_flash_loan(...)` must answer with the
///    borrower success value.
/// 5. **Refund check**: `allowance[receiver][token] >= amount + fee`.
/// 6. **Settle**: spend that allowance and burn `amount + fee`.
/// 7. **Release lock + emit**.
///
/// # Errors
/// | Error                 | Condition                                            |
/// |-----------------------|------------------------------------------------------|
/// | `NegativeAmount`      | `amount < 0`                                         |
/// | `TokenPaused`         | the pause gate is closed                             |
/// | `UnsupportedToken`    | `token` is not this contract                         |
/// | `FlashLoanInProgress` | another loan holds the lock                          |
/// | `CapExceeded`         | the opening mint would pass the cap                  |
/// | `CallbackFailed`      | callback aborted, returned nothing or the wrong value |
/// | `RefundNotApproved`   | allowance to the token is below `amount + fee`       |
/// | `InsufficientBalance` | receiver no longer holds `amount + fee`              |
///
/// An uncapped loan above `max_flash_loan` overflows the supply and traps
/// with no error code. Every `Err` rolls back the opening mint with the rest
/// of the invocation.
pub fn execute_flash_loan(
    env: &Env,
    initiator: &Address,
    receiver: &Address,
    token: &Address,
    amount: i128,
    data: &Bytes,
) -> Result<(), TokenError> {
    ledger::check_nonnegative_amount(amount)?;
    pausable::when_not_paused(env)?;
    let fee = flash_fee(env, token, amount)?;

    lock_loan(env)?;

    ledger::mint(env, receiver, amount)?;

    let returned = FlashBorrowerClient::new(env, receiver)
        .try_on_flash_loan(initiator, token, &amount, &fee, data);
    match returned {
        Ok(Ok(value)) if value == callback_success(env) => {}
        _ => return Err(TokenError::CallbackFailed),
    }

    let contract = env.current_contract_address();
    let repayment = amount + fee;
    if read_allowance(env, receiver, &contract).amount < repayment {
        return Err(TokenError::RefundNotApproved);
    }
    ledger::burn_from(env, &contract, receiver, repayment)?;

    unlock_loan(env);

    TokenEvents::flash_loan(env, receiver, initiator, amount, fee);
    log!(env, "flash loan settled", receiver.clone(), amount, fee);

    Ok(())
}
