// Shared setup for the integration tests: seeded stores, a test server, and the
// Storer contract checks that every adapter has to pass.

#![allow(dead_code)]

use axum_test::TestServer;
use rust_decimal::Decimal;
use wallet_api::{create_router, AppState, InMemoryStore, StoreError, Storer, Wallet};

pub fn sample_wallets() -> Vec<Wallet> {
    vec![
        Wallet::new("u1", "Savings", Decimal::new(10000, 2)).with_id("w1"),
        Wallet::new("u1", "Crypto Wallet", Decimal::new(1234, 3)).with_id("w2"),
        Wallet::new("u2", "Savings", Decimal::new(-5000, 2)).with_id("w3"),
        Wallet::new("u3", "Credit Card", Decimal::ZERO).with_id("w4"),
    ]
}

pub fn seeded_store() -> InMemoryStore {
    InMemoryStore::with_wallets(sample_wallets())
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("Failed to start test server")
}

pub fn seeded_server() -> TestServer {
    test_server(AppState::new(seeded_store()))
}

/// Exercises the Storer contract against a store that starts out empty.
pub async fn check_storer_contract(store: &dyn Storer) {
    let prefix = uuid::Uuid::new_v4().to_string();
    let user_a = format!("{}-a", prefix);
    let user_b = format!("{}-b", prefix);
    let savings = format!("{}-Savings", prefix);
    let crypto = format!("{}-Crypto Wallet", prefix);
    let nobody = format!("{}-nobody", prefix);

    // Create: id assigned, listed afterwards
    let mut created = Vec::new();
    for (user, kind, cents) in [
        (&user_a, &savings, 10_000),
        (&user_a, &crypto, 5_050),
        (&user_b, &savings, -1_999),
    ] {
        let wallet = store
            .create(Wallet::new(user.as_str(), kind.as_str(), Decimal::new(cents, 2)))
            .await
            .expect("create should succeed");
        assert!(!wallet.id.is_empty(), "store must assign an id");
        assert_eq!(wallet.balance, Decimal::new(cents, 2));
        created.push(wallet);
    }

    let all = store.list_all().await.expect("list_all should succeed");
    for wallet in &created {
        assert!(all.contains(wallet), "created wallet {} must be listed", wallet.id);
    }
    let again = store.list_all().await.expect("list_all should succeed");
    assert_eq!(all, again, "listing order must be stable");

    // Filters are exact subsets of list_all
    for user in [&user_a, &user_b, &nobody] {
        let by_user = store.list_by_user(user).await.expect("list_by_user should succeed");
        let expected: Vec<Wallet> = all.iter().filter(|w| &w.user_id == user).cloned().collect();
        assert_eq!(by_user, expected);
    }
    for kind in [&savings, &crypto] {
        let by_type = store.list_by_type(kind).await.expect("list_by_type should succeed");
        let expected: Vec<Wallet> =
            all.iter().filter(|w| &w.wallet_type == kind).cloned().collect();
        assert_eq!(by_type, expected);
    }
    let empty_type = store.list_by_type("").await.expect("list_by_type should succeed");
    assert!(empty_type.iter().all(|w| w.wallet_type.is_empty()));

    // Update replaces every field
    let replacement = Wallet::new(user_b.as_str(), crypto.as_str(), Decimal::new(42, 1))
        .with_id(created[0].id.clone());
    let updated = store
        .update_by_id(replacement.clone())
        .await
        .expect("update should succeed");
    assert_eq!(updated, replacement);
    let by_user_b = store.list_by_user(&user_b).await.expect("list_by_user should succeed");
    assert!(by_user_b.contains(&replacement));
    let by_user_a = store.list_by_user(&user_a).await.expect("list_by_user should succeed");
    assert!(by_user_a.iter().all(|w| w.id != replacement.id));

    // Update of an unknown id fails
    let missing = Wallet::new(user_a.as_str(), savings.as_str(), Decimal::ONE)
        .with_id(format!("{}-missing", prefix));
    assert!(matches!(
        store.update_by_id(missing).await,
        Err(StoreError::NotFound(_))
    ));

    // Delete removes, second delete fails
    let target = created[1].id.clone();
    let deleted = store.delete_by_id(&target).await.expect("delete should succeed");
    assert_eq!(deleted, target);
    let all = store.list_all().await.expect("list_all should succeed");
    assert!(all.iter().all(|w| w.id != target));
    assert!(matches!(
        store.delete_by_id(&target).await,
        Err(StoreError::NotFound(_))
    ));

    for wallet in [&created[0], &created[2]] {
        store.delete_by_id(&wallet.id).await.expect("cleanup delete should succeed");
    }
}
