//! Storage lifetime: records and the contract instance must outlive the
//! default entry TTL while the registry is in use.

#![cfg(test)]

use crate::storage::DAY_IN_LEDGERS;
use crate::test_helpers::{self, advance_ledgers, advance_time, register_verified};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, String};

#[test]
fn test_records_survive_past_minimum_ttl() {
    let (e, client, admin) = test_helpers::setup();
    let user = register_verified(&e, &client, &admin, "Alice");
    let subject = Address::generate(&e);
    let key = String::from_str(&e, "github");
    client.set_identity_attribute(&user, &key, &String::from_str(&e, "alice"));
    client.make_attestation(&user, &subject);
    client.file_dispute(&user, &subject, &String::from_str(&e, "spam"));
    client.set_governance(&admin, &true);
    client.submit_governance_proposal(&user, &1, &String::from_str(&e, "Test proposal"));

    let min_ttl = e.ledger().get().min_persistent_entry_ttl;
    advance_ledgers(&e, min_ttl + 1);
    advance_time(&e, 3_600);

    assert!(client.is_verified(&user));
    assert_eq!(client.get_identity_count(), 1);
    assert_eq!(
        client.get_identity_attribute(&user, &key),
        Some(String::from_str(&e, "alice"))
    );
    assert!(client.is_attestation_valid(&user, &subject));
    assert!(client.get_dispute(&user, &subject).is_some());
    assert!(client.get_governance_proposal(&1).is_some());
    assert!(client.is_governance_enabled());
}

#[test]
fn test_reads_keep_records_alive() {
    let (e, client, admin) = test_helpers::setup();
    let user = register_verified(&e, &client, &admin, "Alice");

    advance_ledgers(&e, 20 * DAY_IN_LEDGERS);
    assert!(client.is_verified(&user));

    advance_ledgers(&e, 20 * DAY_IN_LEDGERS);
    assert!(client.is_verified(&user));
    client.renew_verification(&user);
    assert_eq!(client.get_identity(&user).unwrap().name, String::from_str(&e, "Alice"));
}
