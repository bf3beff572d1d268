use soroban_sdk::{contracttype, Address, String};

/// Request lifecycle. One-way: `Proposed -> Complete`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestStatus {
    /// Awaiting approvals and finalization
    Proposed,
    /// Paid out; no further approvals or finalization
    Complete,
}

/// A spending request proposed by the campaign manager
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub description: String,
    /// Payout amount, always positive
    pub value: i128,
    pub recipient: Address,
    pub status: RequestStatus,
    /// Distinct approvers who approved this request
    pub approval_count: u32,
}

impl Request {
    pub fn new(description: String, value: i128, recipient: Address) -> Self {
        Self {
            description,
            value,
            recipient,
            status: RequestStatus::Proposed,
            approval_count: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self.status {
            RequestStatus::Proposed => false,
            RequestStatus::Complete => true,
        }
    }
}
