// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Pure predicates over campaign state. They are checked by the unit tests
// below and by the Certora rules in `certora_specs`.
//
// INVARIANT CATEGORIES:
//
// 1. ACCOUNTING INVARIANTS
//    - Balance never goes negative
//    - Balance equals contributions minus payouts
//
// 2. APPROVAL INVARIANTS
//    - A request never has more approvals than there are approvers
//    - Approval flags are write-once
//
// 3. LIFECYCLE INVARIANTS
//    - Request status only moves Proposed -> Complete
//    - Request list only grows
//    - A finalize debits exactly the request value
//
// ============================================================================

use campaign_types::{CampaignState, Request, RequestStatus};

// ============================================================================
// ACCOUNTING INVARIANTS
// ============================================================================

/// Invariant: balance is non-negative
///
/// Property:
///   balance >= 0
pub fn balance_non_negative(state: &CampaignState) -> bool {
    state.balance >= 0
}

/// Invariant: funds are conserved
///
/// Property:
///   balance == total_contributed - total_paid_out
pub fn balance_conserved(
    state: &CampaignState,
    total_contributed: i128,
    total_paid_out: i128,
) -> bool {
    match total_contributed.checked_sub(total_paid_out) {
        Some(expected) => state.balance == expected,
        None => false,
    }
}

/// Invariant: a successful finalize debits exactly the request value
///
/// Property:
///   balance_before - balance_after == value
pub fn finalize_debit_exact(balance_before: i128, balance_after: i128, value: i128) -> bool {
    balance_before.checked_sub(balance_after) == Some(value)
}

// ============================================================================
// APPROVAL INVARIANTS
// ============================================================================

/// Invariant: approvals bounded by approver set
///
/// Property:
///   request.approval_count <= approvers_count
pub fn approvals_bounded(request: &Request, state: &CampaignState) -> bool {
    request.approval_count <= state.approvers_count
}

/// Invariant: approval flags never revert
///
/// Property:
///   approved_before => approved_after
pub fn approval_write_once(approved_before: bool, approved_after: bool) -> bool {
    !approved_before || approved_after
}

// ============================================================================
// LIFECYCLE INVARIANTS
// ============================================================================

/// Invariant: status transitions are one-way
///
/// Property:
///   Complete never returns to Proposed
pub fn status_transition_valid(before: RequestStatus, after: RequestStatus) -> bool {
    match (before, after) {
        (RequestStatus::Proposed, _) => true,
        (RequestStatus::Complete, RequestStatus::Complete) => true,
        (RequestStatus::Complete, RequestStatus::Proposed) => false,
    }
}

/// Invariant: request list only grows
///
/// Property:
///   request_count_after >= request_count_before
pub fn request_count_monotonic(before: &CampaignState, after: &CampaignState) -> bool {
    after.request_count >= before.request_count
}

/// Invariant: approver set only grows
///
/// Property:
///   approvers_count_after >= approvers_count_before
pub fn approvers_count_monotonic(before: &CampaignState, after: &CampaignState) -> bool {
    after.approvers_count >= before.approvers_count
}

// ============================================================================
// TESTS
// ============================================================================
