use campaign_types::{CampaignConfig, CampaignError, CampaignState, Request};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints on campaign storage:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Config and accounting state live in Instance storage (small, hot)
// - Each request is a separate Persistent entry keyed by index, so the
//   request list never becomes a single unbounded entry
// - Approver membership and per-request approvals are one entry per
//   (address) and (index, address) respectively; entries are never removed
//
// Per-operation footprint:
// - contribute: config + state + 1 approver entry + token balances
// - approve_request: 1 request + 1 approver + 1 approval entry
// - finalize_request: config + state + 1 request + token balances
// ============================================================================

/// Storage keys for the campaign contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Campaign configuration (Instance storage)
    Config,
    /// Balance and counters (Instance storage)
    State,
    /// Request data: index -> Request (Persistent storage)
    Request(u32),
    /// Approver membership: contributor -> bool (Persistent storage)
    Approver(Address),
    /// Approval record: (index, approver) -> bool (Persistent storage)
    Approval(u32, Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<CampaignConfig, CampaignError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(CampaignError::NotInitialized)
}

pub fn set_config(env: &Env, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> Result<CampaignState, CampaignError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(CampaignError::NotInitialized)
}

pub fn set_state(env: &Env, state: &CampaignState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Requests ===

pub fn get_request(env: &Env, index: u32) -> Result<Request, CampaignError> {
    let key = DataKey::Request(index);
    let request = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(CampaignError::NotFound)?;
    extend_persistent_ttl(env, &key);
    Ok(request)
}

pub fn set_request(env: &Env, index: u32, request: &Request) {
    let key = DataKey::Request(index);
    env.storage().persistent().set(&key, request);
    extend_persistent_ttl(env, &key);
}

// === Approvers ===

pub fn is_approver(env: &Env, account: &Address) -> bool {
    let key = DataKey::Approver(account.clone());
    let approver = env.storage().persistent().get(&key).unwrap_or(false);
    if approver {
        extend_persistent_ttl(env, &key);
    }
    approver
}

pub fn add_approver(env: &Env, account: &Address) {
    let key = DataKey::Approver(account.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

// === Approvals ===

pub fn has_approved(env: &Env, index: u32, approver: &Address) -> bool {
    let key = DataKey::Approval(index, approver.clone());
    let approved = env.storage().persistent().get(&key).unwrap_or(false);
    if approved {
        extend_persistent_ttl(env, &key);
    }
    approved
}

pub fn set_approved(env: &Env, index: u32, approver: &Address) {
    let key = DataKey::Approval(index, approver.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}
