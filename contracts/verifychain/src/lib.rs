//! # VerifyChain Identity Registry
//!
//! On-ledger identity registry. Principals register a self-asserted identity,
//! the registry authority verifies or revokes it with a trust tier, verified
//! principals vouch for each other with attestations and file disputes, and a
//! governance channel accepts proposals while the authority keeps it enabled.
//!
//! The authority and registry settings are fixed at deployment through the
//! contract constructor.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};

pub mod attestation;
pub mod config;
pub mod dispute;
mod events;
pub mod governance;
pub mod identity;
mod storage;

pub use attestation::Attestation;
pub use config::{RegistryConfig, DEFAULT_VERIFICATION_PERIOD};
pub use dispute::{Dispute, DisputeStatus};
pub use governance::GovernanceProposal;
pub use identity::{Identity, TIER_BASIC, TIER_NONE};

/// Caller-facing failure codes. Values are part of the public contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    NotOwner = 100,
    AlreadyRegistered = 101,
    NotRegistered = 102,
    AlreadyVerified = 103,
    NotVerified = 104,
    AttestationNotFound = 105,
    DisputeNotFound = 106,
    DisputeNotOpen = 107,
    GovernanceDisabled = 108,
    DisputeAlreadyOpen = 109,
    SelfAttestation = 110,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    IdentityCount,
    GovernanceEnabled,
    Identity(Address),
    /// (owner, attribute name) -> attribute value.
    Attribute(Address, String),
    /// (attester, subject) -> attestation.
    Attestation(Address, Address),
    /// (filer, respondent) -> dispute.
    Dispute(Address, Address),
    Proposal(u64),
}

#[contract]
pub struct VerifyChain;

#[contractimpl]
impl VerifyChain {
    /// Deploy the registry with its authority and settings.
    pub fn __constructor(e: Env, admin: Address, config: RegistryConfig) {
        storage::extend_instance(&e);
        config::initialize(&e, &admin, &config);
    }

    pub fn get_admin(e: Env) -> Address {
        storage::extend_instance(&e);
        config::admin(&e)
    }

    pub fn get_config(e: Env) -> RegistryConfig {
        storage::extend_instance(&e);
        config::get(&e)
    }

    // ── identity registry ────────────────────────────────────────────────

    /// Register the caller's identity. Each principal may register once.
    pub fn register_identity(
        e: Env,
        caller: Address,
        name: String,
        email: String,
    ) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        identity::register(&e, &caller, name, email)
    }

    /// Verify `target` at `tier` (basic tier when omitted). Authority only.
    pub fn verify_identity(
        e: Env,
        caller: Address,
        target: Address,
        tier: Option<u32>,
    ) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        config::require_admin(&e, &caller)?;
        identity::verify(&e, &target, tier.unwrap_or(TIER_BASIC))
    }

    /// Clear the verified flag of `target`. Authority only.
    pub fn revoke_identity(e: Env, caller: Address, target: Address) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        config::require_admin(&e, &caller)?;
        identity::revoke(&e, &target)
    }

    /// Restart the caller's verification validity window.
    pub fn renew_verification(e: Env, caller: Address) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        identity::renew(&e, &caller)
    }

    pub fn update_email(e: Env, caller: Address, email: String) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        identity::update_email(&e, &caller, email)
    }

    /// Set a free-form attribute on the caller's own identity.
    pub fn set_identity_attribute(
        e: Env,
        caller: Address,
        key: String,
        value: String,
    ) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        identity::set_attribute(&e, &caller, key, value)
    }

    pub fn get_identity_attribute(e: Env, principal: Address, key: String) -> Option<String> {
        storage::extend_instance(&e);
        identity::get_attribute(&e, &principal, key)
    }

    /// Apply a signed reputation change to `target`, clamped at zero. Authority only.
    pub fn update_reputation(
        e: Env,
        caller: Address,
        target: Address,
        delta: i64,
    ) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        config::require_admin(&e, &caller)?;
        identity::update_reputation(&e, &target, delta)
    }

    pub fn get_identity(e: Env, principal: Address) -> Option<Identity> {
        storage::extend_instance(&e);
        identity::get(&e, &principal)
    }

    /// True while `principal` is verified and inside its validity window.
    pub fn is_verified(e: Env, principal: Address) -> bool {
        storage::extend_instance(&e);
        identity::is_verified(&e, &principal)
    }

    pub fn get_identity_count(e: Env) -> u64 {
        storage::extend_instance(&e);
        identity::count(&e)
    }

    pub fn get_reputation(e: Env, principal: Address) -> u64 {
        storage::extend_instance(&e);
        identity::reputation(&e, &principal)
    }

    // ── attestations ─────────────────────────────────────────────────────

    /// Vouch for `subject`. The caller must be verified.
    pub fn make_attestation(e: Env, caller: Address, subject: Address) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        attestation::make(&e, &caller, &subject)
    }

    /// Withdraw the caller's valid attestation for `subject`.
    pub fn revoke_attestation(e: Env, caller: Address, subject: Address) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        attestation::revoke(&e, &caller, &subject)
    }

    pub fn is_attestation_valid(e: Env, attester: Address, subject: Address) -> bool {
        storage::extend_instance(&e);
        attestation::is_valid(&e, &attester, &subject)
    }

    pub fn get_attestation(e: Env, attester: Address, subject: Address) -> Option<Attestation> {
        storage::extend_instance(&e);
        attestation::get(&e, &attester, &subject)
    }

    // ── disputes ─────────────────────────────────────────────────────────

    /// Open a dispute against `respondent`. The caller must be verified.
    pub fn file_dispute(
        e: Env,
        caller: Address,
        respondent: Address,
        reason: String,
    ) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        dispute::file(&e, &caller, &respondent, reason)
    }

    /// Close the open dispute filed by `filer` against `respondent`. Authority only.
    pub fn resolve_dispute(
        e: Env,
        caller: Address,
        filer: Address,
        respondent: Address,
    ) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        config::require_admin(&e, &caller)?;
        dispute::resolve(&e, &filer, &respondent)
    }

    pub fn get_dispute(e: Env, filer: Address, respondent: Address) -> Option<Dispute> {
        storage::extend_instance(&e);
        dispute::get(&e, &filer, &respondent)
    }

    // ── governance ───────────────────────────────────────────────────────

    /// Turn proposal submission on or off. Authority only.
    pub fn set_governance(e: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        config::require_admin(&e, &caller)?;
        governance::set_enabled(&e, enabled);
        Ok(())
    }

    pub fn is_governance_enabled(e: Env) -> bool {
        storage::extend_instance(&e);
        governance::is_enabled(&e)
    }

    /// Store proposal `id`, replacing any earlier text under the same id.
    pub fn submit_governance_proposal(
        e: Env,
        caller: Address,
        id: u64,
        text: String,
    ) -> Result<(), Error> {
        storage::extend_instance(&e);
        caller.require_auth();
        governance::submit(&e, &caller, id, text)
    }

    pub fn get_governance_proposal(e: Env, id: u64) -> Option<GovernanceProposal> {
        storage::extend_instance(&e);
        governance::get_proposal(&e, id)
    }
}






#[cfg(test)]
mod test_governance;



#[cfg(test)]
mod test_storage;
