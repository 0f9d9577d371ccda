use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SafeTokenError {
    CallToNonContract = 500,
    OperationFailed = 501,
    UnsafeApprovalRace = 502,
    AllowanceUnderflow = 503,
    NegativeAmount = 504,
}
