use crate::events::{self, ContributionEvent};
use crate::storage::{add_approver, get_config, get_state, is_approver, set_state};
use campaign_types::CampaignError;
use soroban_sdk::{token, Address, Env};

/// Accept a contribution into campaign custody.
///
/// The first contribution from an address also admits it to the approver
/// set; later contributions only grow the balance.
pub fn contribute(env: &Env, contributor: Address, amount: i128) -> Result<(), CampaignError> {
    let config = get_config(env)?;
    if amount < config.minimum_contribution {
        return Err(CampaignError::InsufficientContribution);
    }

    let mut state = get_state(env)?;

    state.balance += amount;

    let new_approver = !is_approver(env, &contributor);
    if new_approver {
        add_approver(env, &contributor);
        state.approvers_count += 1;
    }
    set_state(env, &state);

    // Pull funds from contributor; a failed transfer aborts the invocation
    // and the accounting above is rolled back with it
    if amount > 0 {
        let token_client = token::Client::new(env, &config.token);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);
    }

    events::contribution(
        env,
        ContributionEvent {
            contributor,
            amount,
            new_approver,
            balance: state.balance,
        },
    );

    Ok(())
}
