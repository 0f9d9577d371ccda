//! Raw invocation of token-like contracts and normalization of what they hand
//! back.
//!
//! | Outcome of the call                 | Result              |
//! |-------------------------------------|---------------------|
//! | returns `true`                      | `Ok(())`            |
//! | returns nothing                     | `Ok(())`            |
//! | returns `false` or any other value  | `OperationFailed`   |
//! | aborts                              | `OperationFailed`   |
//! | no contract instance at the address | `CallToNonContract` |

use soroban_sdk::{
    xdr::{ScErrorCode, ScErrorType},
    Address, Env, Error, IntoVal, InvokeError, Symbol, TryFromVal, Val, Vec,
};

use crate::errors::SafeTokenError;

/// The host refuses to enter an address that holds no contract instance with
/// `Error(Context, InvalidAction)`. A target that traps reports `WasmVm`, and
/// one that fails with its own error code reports `Contract`.
fn is_missing_contract(error: &Error) -> bool {
    *error == Error::from_type_and_code(ScErrorType::Context, ScErrorCode::InvalidAction)
}

fn classify_failure(failure: Result<Error, InvokeError>) -> SafeTokenError {
    match failure {
        Ok(error) if is_missing_contract(&error) => SafeTokenError::CallToNonContract,
        _ => SafeTokenError::OperationFailed,
    }
}

/// Calls `func` on `token` and accepts only a `true` or void answer.
pub(crate) fn invoke_checked(
    env: &Env,
    token: &Address,
    func: &str,
    args: Vec<Val>,
) -> Result<(), SafeTokenError> {
    let returned =
        env.try_invoke_contract::<Val, Error>(token, &Symbol::new(env, func), args);

    match returned {
        Ok(Ok(value)) => {
            if value.is_void() || matches!(bool::try_from_val(env, &value), Ok(true)) {
                Ok(())
            } else {
                Err(SafeTokenError::OperationFailed)
            }
        }
        Ok(Err(_)) => Err(SafeTokenError::OperationFailed),
        Err(failure) => Err(classify_failure(failure)),
    }
}

/// Reads `allowance(owner, spender)` from `token`.
pub(crate) fn read_allowance(
    env: &Env,
    token: &Address,
    owner: &Address,
    spender: &Address,
) -> Result<i128, SafeTokenError> {
    let args: Vec<Val> = (owner.clone(), spender.clone()).into_val(env);
    let returned =
        env.try_invoke_contract::<i128, Error>(token, &Symbol::new(env, "allowance"), args);

    match returned {
        Ok(Ok(amount)) => Ok(amount),
        Ok(Err(_)) => Err(SafeTokenError::OperationFailed),
        Err(failure) => Err(classify_failure(failure)),
    }
}
