#![no_std]

mod campaign;
mod error;
mod request;

pub use campaign::*;
pub use error::*;
pub use request::*;

/// Largest page returned by paginated registry reads.
/// Keeps a single call under Soroban's 100 read-entry budget.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Strict-majority quorum check.
///
/// A request passes when more than half of the current approver set has
/// approved it: `approval_count * 2 > approvers_count`. Widened to u64 so
/// the doubling cannot overflow.
pub fn quorum_reached(approval_count: u32, approvers_count: u32) -> bool {
    (approval_count as u64) * 2 > approvers_count as u64
}
