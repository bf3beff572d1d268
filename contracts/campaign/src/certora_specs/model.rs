// ============================================================================
// SKOLEM VARIABLES AND STATE SNAPSHOTS
// ============================================================================

use campaign_types::RequestStatus;
use soroban_sdk::{Address, Env};

use crate::Campaign;

/// Skolem variable for request index - proves properties for all requests
/// by proving them for an arbitrary one
static mut SKOLEM_REQUEST_INDEX: u32 = 0;

pub fn skolem_request_index() -> u32 {
    unsafe { SKOLEM_REQUEST_INDEX }
}

/// Initialize Skolem variables with nondeterministic values
pub fn init() {
    use cvlr::nondet::nondet;

    unsafe {
        SKOLEM_REQUEST_INDEX = nondet();
    }
}

/// Captures campaign accounting for before/after comparisons
#[derive(Clone)]
pub struct CampaignSnapshot {
    pub balance: i128,
    pub approvers_count: u32,
    pub request_count: u32,
}

impl CampaignSnapshot {
    pub fn capture(env: &Env) -> Self {
        let state = Campaign::get_state(env.clone()).unwrap_or_default();
        Self {
            balance: state.balance,
            approvers_count: state.approvers_count,
            request_count: state.request_count,
        }
    }
}

/// Captures one request and one approver's flag for before/after comparisons
#[derive(Clone)]
pub struct RequestSnapshot {
    pub status: RequestStatus,
    pub approval_count: u32,
    pub approved: bool,
}

impl RequestSnapshot {
    pub fn capture(env: &Env, index: u32, approver: &Address) -> Option<Self> {
        let request = Campaign::get_request(env.clone(), index).ok()?;
        Some(Self {
            status: request.status,
            approval_count: request.approval_count,
            approved: Campaign::has_approved(env.clone(), index, approver.clone()),
        })
    }
}
