// ============================================================================
// REQUEST LIFECYCLE SPECIFICATIONS
// ============================================================================
//
// Rules over create_request and approve_request, called through the
// contract entry points.
//
// ============================================================================

use soroban_sdk::{Address, Env, String};

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;

use super::model::{self, CampaignSnapshot, RequestSnapshot};
use crate::invariants;
use crate::Campaign;

/// RULE: Only the manager can append requests
#[rule]
pub fn non_manager_cannot_create_request(
    env: Env,
    factory: Address,
    manager: Address,
    token: Address,
    caller: Address,
    description: String,
    value: i128,
    recipient: Address,
) {
    cvlr_assume!(caller != manager);
    cvlr_assume!(Campaign::initialize(env.clone(), factory, manager, token, 0).is_ok());

    let before = CampaignSnapshot::capture(&env);
    let result = Campaign::create_request(env.clone(), caller, description, value, recipient);
    let after = CampaignSnapshot::capture(&env);

    cvlr_assert!(result.is_err());
    cvlr_assert!(after.request_count == before.request_count);
}

/// RULE: A created request lands at the previous request count
#[rule]
pub fn create_request_appends(
    env: Env,
    factory: Address,
    manager: Address,
    token: Address,
    description: String,
    value: i128,
    recipient: Address,
) {
    cvlr_assume!(value > 0);
    cvlr_assume!(Campaign::initialize(env.clone(), factory, manager.clone(), token, 0).is_ok());

    let before = CampaignSnapshot::capture(&env);
    let result = Campaign::create_request(env.clone(), manager, description, value, recipient);
    let after = CampaignSnapshot::capture(&env);

    cvlr_assert!(result == Ok(before.request_count));
    cvlr_assert!(after.request_count == before.request_count + 1);
}

/// RULE: Approving never decreases the tally, and raises it by at most one
#[rule]
pub fn approval_counted_once(env: Env, approver: Address) {
    model::init();
    let index = model::skolem_request_index();

    let before = RequestSnapshot::capture(&env, index, &approver);
    cvlr_assume!(before.is_some());
    let _ = Campaign::approve_request(env.clone(), approver.clone(), index);
    let after = RequestSnapshot::capture(&env, index, &approver);

    if let (Some(before), Some(after)) = (before, after) {
        cvlr_assert!(invariants::approval_write_once(before.approved, after.approved));
        cvlr_assert!(after.approval_count >= before.approval_count);
        cvlr_assert!(after.approval_count <= before.approval_count + 1);
        if before.approved {
            cvlr_assert!(after.approval_count == before.approval_count);
        }
        cvlr_assert!(invariants::status_transition_valid(before.status, after.status));
    }
    cvlr_satisfy!(true);
}
