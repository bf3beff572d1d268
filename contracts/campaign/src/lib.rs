#![no_std]

mod events;
mod invariants;
mod ledger;
mod requests;
mod storage;

#[cfg(feature = "certora")]
pub mod certora_specs;

use campaign_types::{CampaignConfig, CampaignError, CampaignState, CampaignSummary, Request};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use storage::{get_config, get_request, get_state, has_config, set_config, set_state};

#[contract]
pub struct Campaign;

#[contractimpl]
impl Campaign {
    /// Initialize a new campaign
    ///
    /// Called once by the factory right after deployment. `manager` becomes
    /// the only address allowed to create and finalize requests.
    pub fn initialize(
        env: Env,
        factory: Address,
        manager: Address,
        token: Address,
        minimum_contribution: i128,
    ) -> Result<(), CampaignError> {
        if has_config(&env) {
            return Err(CampaignError::AlreadyInitialized);
        }
        if minimum_contribution < 0 {
            return Err(CampaignError::InvalidAmount);
        }

        let config = CampaignConfig {
            factory,
            manager,
            token,
            minimum_contribution,
        };
        set_config(&env, &config);
        set_state(&env, &CampaignState::new());

        Ok(())
    }

    /// Contribute `amount` of the campaign token
    ///
    /// Transfers funds from `contributor` into campaign custody and admits
    /// the contributor to the approver set on first contribution.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), CampaignError> {
        contributor.require_auth();
        ledger::contribute(&env, contributor, amount)
    }

    /// Propose a payment of `value` to `recipient`
    ///
    /// # Returns
    /// Index of the new request
    pub fn create_request(
        env: Env,
        caller: Address,
        description: String,
        value: i128,
        recipient: Address,
    ) -> Result<u32, CampaignError> {
        caller.require_auth();
        requests::create(&env, caller, description, value, recipient)
    }

    /// Approve request `request_index` as a past contributor
    pub fn approve_request(
        env: Env,
        approver: Address,
        request_index: u32,
    ) -> Result<(), CampaignError> {
        approver.require_auth();
        requests::approve(&env, approver, request_index)
    }

    /// Pay out an approved request and mark it complete
    ///
    /// Requires a strict majority of the current approver set and enough
    /// balance to cover the request value.
    pub fn finalize_request(
        env: Env,
        caller: Address,
        request_index: u32,
    ) -> Result<(), CampaignError> {
        caller.require_auth();
        requests::finalize(&env, caller, request_index)
    }

    // === View Functions ===

    /// Get campaign configuration
    pub fn get_config(env: Env) -> Result<CampaignConfig, CampaignError> {
        get_config(&env)
    }

    /// Get balance and counters
    pub fn get_state(env: Env) -> Result<CampaignState, CampaignError> {
        get_state(&env)
    }

    /// Get a front-end summary of the campaign
    pub fn get_summary(env: Env) -> Result<CampaignSummary, CampaignError> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        Ok(CampaignSummary::from_parts(&config, &state))
    }

    /// Get request by index
    pub fn get_request(env: Env, request_index: u32) -> Result<Request, CampaignError> {
        get_request(&env, request_index)
    }

    /// Get number of requests ever created
    pub fn get_request_count(env: Env) -> Result<u32, CampaignError> {
        Ok(get_state(&env)?.request_count)
    }

    /// Get current balance held for the campaign
    pub fn balance(env: Env) -> Result<i128, CampaignError> {
        Ok(get_state(&env)?.balance)
    }

    /// Get number of distinct contributors
    pub fn approvers_count(env: Env) -> Result<u32, CampaignError> {
        Ok(get_state(&env)?.approvers_count)
    }

    /// Get minimum contribution
    pub fn minimum_contribution(env: Env) -> Result<i128, CampaignError> {
        Ok(get_config(&env)?.minimum_contribution)
    }

    /// Get manager address
    pub fn manager(env: Env) -> Result<Address, CampaignError> {
        Ok(get_config(&env)?.manager)
    }

    /// Get token address
    pub fn token(env: Env) -> Result<Address, CampaignError> {
        Ok(get_config(&env)?.token)
    }

    /// Get factory address
    pub fn factory(env: Env) -> Result<Address, CampaignError> {
        Ok(get_config(&env)?.factory)
    }

    /// Check whether `account` has ever contributed
    pub fn is_approver(env: Env, account: Address) -> bool {
        storage::is_approver(&env, &account)
    }

    /// Check whether `approver` has approved request `request_index`
    pub fn has_approved(env: Env, request_index: u32, approver: Address) -> bool {
        storage::has_approved(&env, request_index, &approver)
    }
}
