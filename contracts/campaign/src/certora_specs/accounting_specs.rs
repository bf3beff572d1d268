// ============================================================================
// ACCOUNTING SPECIFICATIONS
// ============================================================================
//
// Quorum arithmetic and balance bookkeeping.
//
// ============================================================================

use campaign_types::quorum_reached;
use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;

use crate::invariants;

/// RULE: Quorum is never reached without at least one approval
#[rule]
pub fn quorum_requires_an_approval(approval_count: u32, approvers_count: u32) {
    cvlr_assume!(quorum_reached(approval_count, approvers_count));
    cvlr_assert!(approval_count > 0);
}

/// RULE: Quorum is monotone in approvals
#[rule]
pub fn quorum_monotone_in_approvals(approval_count: u32, approvers_count: u32) {
    cvlr_assume!(approval_count < u32::MAX);
    cvlr_assume!(quorum_reached(approval_count, approvers_count));
    cvlr_assert!(quorum_reached(approval_count + 1, approvers_count));
}

/// RULE: A payout covered by the balance keeps the balance non-negative
#[rule]
pub fn covered_payout_keeps_balance_non_negative(balance: i128, value: i128) {
    cvlr_assume!(value > 0);
    cvlr_assume!(balance >= value);

    let after = balance - value;
    cvlr_assert!(after >= 0);
    cvlr_assert!(invariants::finalize_debit_exact(balance, after, value));
}
