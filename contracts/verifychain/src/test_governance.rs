#![cfg(test)]

use crate::test_helpers::{self, register};
use crate::Error;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, String};

#[test]
fn test_submit_fails_while_disabled_by_default() {
    let (e, client, _admin) = test_helpers::setup();
    let user = Address::generate(&e);

    assert_eq!(
        client.try_submit_governance_proposal(&user, &1, &String::from_str(&e, "Test proposal")),
        Err(Ok(Error::GovernanceDisabled))
    );
    assert_eq!(client.get_governance_proposal(&1), None);
}

#[test]
fn test_enable_and_submit() {
    let (e, client, admin) = test_helpers::setup();
    let user = register(&e, &client, "Alice");
    let text = String::from_str(&e, "Test proposal");

    client.set_governance(&admin, &true);
    assert!(client.is_governance_enabled());
    client.submit_governance_proposal(&user, &1, &text);

    let proposal = client.get_governance_proposal(&1).unwrap();
    assert_eq!(proposal.id, 1);
    assert_eq!(proposal.proposer, user);
    assert_eq!(proposal.text, text);
}

#[test]
fn test_submit_overwrites_same_id() {
    let (e, client, admin) = test_helpers::setup();
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    client.set_governance(&admin, &true);

    client.submit_governance_proposal(&alice, &7, &String::from_str(&e, "first"));
    client.submit_governance_proposal(&bob, &7, &String::from_str(&e, "second"));

    let proposal = client.get_governance_proposal(&7).unwrap();
    assert_eq!(proposal.proposer, bob);
    assert_eq!(proposal.text, String::from_str(&e, "second"));
}

#[test]
fn test_disable_blocks_submission_without_partial_write() {
    let (e, client, admin) = test_helpers::setup();
    let user = Address::generate(&e);
    client.set_governance(&admin, &true);
    client.submit_governance_proposal(&user, &1, &String::from_str(&e, "Test proposal"));

    client.set_governance(&admin, &false);

    assert_eq!(
        client.try_submit_governance_proposal(&user, &2, &String::from_str(&e, "Test proposal")),
        Err(Ok(Error::GovernanceDisabled))
    );
    assert_eq!(
        client.try_submit_governance_proposal(&user, &1, &String::from_str(&e, "rewrite")),
        Err(Ok(Error::GovernanceDisabled))
    );
    assert_eq!(client.get_governance_proposal(&2), None);
    assert_eq!(
        client.get_governance_proposal(&1).unwrap().text,
        String::from_str(&e, "Test proposal")
    );
}

#[test]
fn test_set_governance_by_non_owner_fails() {
    let (e, client, _admin) = test_helpers::setup();
    let user = Address::generate(&e);

    assert_eq!(
        client.try_set_governance(&user, &true),
        Err(Ok(Error::NotOwner))
    );
    assert!(!client.is_governance_enabled());
}
