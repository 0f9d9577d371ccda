use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    NegativeAmount = 402,
    InsufficientBalance = 403,
    InsufficientAllowance = 404,
    InvalidRecipient = 405,
    InvalidExpiration = 406,
    TokenPaused = 407,
    InvalidCap = 408,
    CapExceeded = 409,
    UnsupportedToken = 410,
    CallbackFailed = 411,
    RefundNotApproved = 412,
    FlashLoanInProgress = 413,
}
