//! Governance gate: an authority-controlled switch in front of proposal submission.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::{events, storage, DataKey, Error};

/// A submitted proposal. Resubmitting the same `id` replaces it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceProposal {
    pub id: u64,
    pub proposer: Address,
    pub text: String,
    pub submitted_at: u64,
}

pub fn set_enabled(e: &Env, enabled: bool) {
    e.storage()
        .instance()
        .set(&DataKey::GovernanceEnabled, &enabled);
    events::governance_set(e, enabled);
}

pub fn is_enabled(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::GovernanceEnabled)
        .unwrap_or(false)
}

pub fn submit(e: &Env, proposer: &Address, id: u64, text: String) -> Result<(), Error> {
    if !is_enabled(e) {
        return Err(Error::GovernanceDisabled);
    }

    let proposal = GovernanceProposal {
        id,
        proposer: proposer.clone(),
        text,
        submitted_at: e.ledger().timestamp(),
    };
    storage::set(e, &DataKey::Proposal(id), &proposal);

    events::proposal_submitted(e, id, proposer, &proposal.text);
    Ok(())
}

pub fn get_proposal(e: &Env, id: u64) -> Option<GovernanceProposal> {
    storage::get(e, &DataKey::Proposal(id))
}
