use soroban_sdk::contracterror;

/// Every way a campaign or registry call can be rejected.
///
/// All variants are precondition failures: a call that returns one of
/// these leaves contract storage untouched.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    /// `initialize` called on a contract that already has a config
    AlreadyInitialized = 1,
    /// Contract has no config yet
    NotInitialized = 2,
    /// Caller lacks the manager or approver role
    Unauthorized = 3,
    /// Non-positive request value, or negative minimum contribution
    InvalidAmount = 4,
    /// Contribution below the campaign minimum
    InsufficientContribution = 5,
    /// Request index out of range
    NotFound = 6,
    /// Approver already approved this request
    AlreadyApproved = 7,
    /// Request has already been finalized
    RequestClosed = 8,
    /// Approvals do not form a strict majority of the approver set
    QuorumNotMet = 9,
    /// Campaign balance cannot cover the request value
    InsufficientFunds = 10,
    /// Request recipient is the campaign contract itself
    InvalidRecipient = 11,
}
