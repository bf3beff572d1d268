#![no_std]

use campaign_types::{CampaignError, MAX_PAGE_SIZE};
use soroban_sdk::{
    contract, contractimpl, contracttype, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

#[contract]
pub struct CampaignFactory;

/// Storage keys for Factory contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Campaign WASM hash for deployment
    CampaignWasmHash,
    /// Token every campaign from this factory is denominated in
    Token,
    /// Total number of campaigns created (counter for indexed storage)
    CampaignCount,
    /// Campaign address at index (indexed storage to avoid unbounded Vec)
    CampaignAt(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub index: u32,
    pub campaign: Address,
    pub manager: Address,
    pub minimum_contribution: i128,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

// ============================================================================
// Registry layout:
// - The campaign list uses indexed storage (CampaignCount + CampaignAt)
//   instead of a Vec so no single ledger entry grows without bound
// - Entries are append-only; an index, once assigned, never changes
// - Paginated reads are capped at MAX_PAGE_SIZE entries per call
// ============================================================================

#[contractimpl]
impl CampaignFactory {
    /// Initialize factory with admin, campaign WASM hash and token
    pub fn initialize(
        env: Env,
        admin: Address,
        campaign_wasm_hash: BytesN<32>,
        token: Address,
    ) -> Result<(), CampaignError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(CampaignError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::CampaignWasmHash, &campaign_wasm_hash);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::CampaignCount, &0u32);

        extend_instance_ttl(&env);
        Ok(())
    }

    /// Deploy a new campaign managed by `creator`
    /// Returns the campaign contract address
    pub fn create_campaign(
        env: Env,
        creator: Address,
        minimum_contribution: i128,
    ) -> Result<Address, CampaignError> {
        creator.require_auth();

        if minimum_contribution < 0 {
            return Err(CampaignError::InvalidAmount);
        }

        let campaign_wasm_hash: BytesN<32> = env
            .storage()
            .instance()
            .get(&DataKey::CampaignWasmHash)
            .ok_or(CampaignError::NotInitialized)?;
        let token: Address = env
            .storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)?;

        let campaign_count = Self::get_campaign_count(env.clone());

        // Deterministic salt from the campaign index
        let mut salt_bytes = [0u8; 32];
        salt_bytes[0..4].copy_from_slice(&campaign_count.to_be_bytes());
        let salt = BytesN::from_array(&env, &salt_bytes);

        let campaign_address = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(campaign_wasm_hash, ());

        install_campaign(
            &env,
            &campaign_address,
            &creator,
            &token,
            minimum_contribution,
        );

        Ok(campaign_address)
    }

    /// Replace the WASM used for future campaigns. Existing campaigns are untouched.
    pub fn set_campaign_wasm_hash(
        env: Env,
        campaign_wasm_hash: BytesN<32>,
    ) -> Result<(), CampaignError> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();

        env.storage()
            .instance()
            .set(&DataKey::CampaignWasmHash, &campaign_wasm_hash);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Get total number of campaigns created
    pub fn get_campaign_count(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::CampaignCount)
            .unwrap_or(0)
    }

    /// Get campaign address at specific index
    pub fn get_campaign_at(env: Env, index: u32) -> Option<Address> {
        let campaign_at_key = DataKey::CampaignAt(index);
        env.storage().persistent().get(&campaign_at_key)
    }

    /// Get campaigns with pagination
    /// Returns up to `limit` campaigns starting from `start_index`
    /// `limit` is capped at MAX_PAGE_SIZE to stay within read entry limits
    pub fn get_campaigns_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Address> {
        let safe_limit = limit.min(MAX_PAGE_SIZE);
        let campaign_count = Self::get_campaign_count(env.clone());
        let end_index = start_index.saturating_add(safe_limit).min(campaign_count);

        collect_range(&env, start_index, end_index)
    }

    /// Get every deployed campaign in creation order
    /// WARNING: Reads one entry per campaign and will hit read limits on
    /// large registries. Use get_campaigns_paginated there.
    pub fn get_deployed_campaigns(env: Env) -> Vec<Address> {
        let campaign_count = Self::get_campaign_count(env.clone());
        collect_range(&env, 0, campaign_count)
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, CampaignError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(CampaignError::NotInitialized)
    }

    /// Get campaign token address
    pub fn get_token(env: Env) -> Result<Address, CampaignError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CampaignError::NotInitialized)
    }

    /// Get campaign WASM hash
    pub fn get_campaign_wasm_hash(env: Env) -> Result<BytesN<32>, CampaignError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::CampaignWasmHash)
            .ok_or(CampaignError::NotInitialized)
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

/// Append a campaign to the registry (O(1), indexed storage)
fn record_campaign(env: &Env, campaign: &Address) -> u32 {
    let index: u32 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);

    let campaign_at_key = DataKey::CampaignAt(index);
    env.storage().persistent().set(&campaign_at_key, campaign);
    extend_persistent_ttl(env, &campaign_at_key);

    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(index + 1));
    extend_instance_ttl(env);

    index
}

fn collect_range(env: &Env, start_index: u32, end_index: u32) -> Vec<Address> {
    let mut campaigns: Vec<Address> = Vec::new(env);
    for i in start_index..end_index {
        if let Some(campaign) = env.storage().persistent().get(&DataKey::CampaignAt(i)) {
            campaigns.push_back(campaign);
        }
    }
    campaigns
}

/// Initialize a freshly deployed campaign, append it to the registry and
/// publish `campaign_created`. Returns the registry index.
fn install_campaign(
    env: &Env,
    campaign_address: &Address,
    manager: &Address,
    token: &Address,
    minimum_contribution: i128,
) -> u32 {
    init_campaign(
        env,
        campaign_address,
        &env.current_contract_address(),
        manager,
        token,
        minimum_contribution,
    );

    let index = record_campaign(env, campaign_address);

    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        CampaignCreatedEvent {
            index,
            campaign: campaign_address.clone(),
            manager: manager.clone(),
            minimum_contribution,
        },
    );

    index
}

// Campaign initialization via invoke
fn init_campaign(
    env: &Env,
    campaign_address: &Address,
    factory: &Address,
    manager: &Address,
    token: &Address,
    minimum_contribution: i128,
) {
    env.invoke_contract::<()>(
        campaign_address,
        &Symbol::new(env, "initialize"),
        (factory, manager, token, minimum_contribution).into_val(env),
    );
}
