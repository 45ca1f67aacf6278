// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `BlockCypherClient`
//!
//! These tests use wiremock to stand in for the upstream API and exercise
//! the client's URL routing, decoding, and error classification end to end.

use std::time::Duration;

use blockcypher::{BlockCypherClient, BlockCypherConfig, ClientError, FetchFailure};
use chain_types::Currency;
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use fixtures::*;

const EATER_ADDRESS: &str = "1BitcoinEaterAddressDontSendf59kuE";
const TX_HASH: &str = "f854aebae95150b379cc1187d848d58225f3c4157fe992bcd166f58bd5063449";

/// Create a test config pointed at the mock server
fn create_test_config(base_url: String) -> BlockCypherConfig {
    BlockCypherConfig {
        base_url,
        timeout_seconds: 10,
        wallet_tx_limit: 50,
    }
}

#[tokio::test]
async fn fetch_wallet_success() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json(EATER_ADDRESS)))
        .mount(&mock_server)
        .await;

    let wallet = client
        .fetch_wallet(EATER_ADDRESS, Currency::Bitcoin)
        .await
        .unwrap();

    assert_eq!(wallet.address, EATER_ADDRESS);
    assert_eq!(wallet.balance, 4_433_416);
    assert_eq!(wallet.n_tx, 2);
    assert_eq!(wallet.txs.len(), 2);
    assert_eq!(wallet.txs[0].hash, TX_HASH);
    assert_eq!(
        wallet.txs[0].confirmed,
        Utc.with_ymd_and_hms(2014, 3, 29, 1, 29, 19).unwrap()
    );
    assert_eq!(wallet.txs[0].received, "2014-03-29T01:29:19Z");
}

#[tokio::test]
async fn fetch_wallet_not_found_on_404() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin).await;

    match result.unwrap_err() {
        ClientError::WalletNotFound {
            address,
            currency,
            source,
        } => {
            assert_eq!(address, EATER_ADDRESS);
            assert_eq!(currency, Currency::Bitcoin);
            assert!(matches!(source, FetchFailure::Status { status: 404 }));
        }
        other => panic!("Expected WalletNotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_wallet_server_error_preserves_status() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin).await;

    match result.unwrap_err() {
        ClientError::WalletNotFound { source, .. } => {
            assert!(matches!(source, FetchFailure::Status { status: 500 }));
        }
        other => panic!("Expected WalletNotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_wallet_decode_failure_on_malformed_body() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let result = client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin).await;

    match result.unwrap_err() {
        ClientError::WalletNotFound { source, .. } => {
            assert!(matches!(source, FetchFailure::Decode(_)));
        }
        other => panic!("Expected WalletNotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_wallet_decode_failure_on_missing_required_field() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    let mut body = wallet_json(EATER_ADDRESS);
    body["txs"][0].as_object_mut().unwrap().remove("hash");

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let result = client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin).await;

    match result.unwrap_err() {
        ClientError::WalletNotFound { source, .. } => {
            assert!(matches!(source, FetchFailure::Decode(_)));
        }
        other => panic!("Expected WalletNotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_wallet_decode_failure_on_loose_confirmed_format() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    let mut body = wallet_json(EATER_ADDRESS);
    body["txs"][0]["confirmed"] = json!("2014-03-29T01:29:19Z");

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let result = client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin).await;

    match result.unwrap_err() {
        ClientError::WalletNotFound { source, .. } => {
            assert!(matches!(source, FetchFailure::Decode(_)));
        }
        other => panic!("Expected WalletNotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_wallet_with_no_transactions_is_success() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_wallet_json(EATER_ADDRESS)))
        .mount(&mock_server)
        .await;

    let wallet = client
        .fetch_wallet(EATER_ADDRESS, Currency::Bitcoin)
        .await
        .unwrap();

    assert_eq!(wallet.address, EATER_ADDRESS);
    assert!(wallet.txs.is_empty());
}

#[tokio::test]
async fn fetch_wallet_is_idempotent_for_identical_bytes() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json(EATER_ADDRESS)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let first = client
        .fetch_wallet(EATER_ADDRESS, Currency::Bitcoin)
        .await
        .unwrap();
    let second = client
        .fetch_wallet(EATER_ADDRESS, Currency::Bitcoin)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_wallet_honors_configured_limit() {
    let mock_server = MockServer::start().await;
    let mut config = create_test_config(mock_server.uri());
    config.wallet_tx_limit = 10;
    let client = BlockCypherClient::new(config).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_wallet_json(EATER_ADDRESS)))
        .mount(&mock_server)
        .await;

    let result = client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn fetch_wallet_routes_by_currency() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    // Only the dogecoin path is mounted
    Mock::given(method("GET"))
        .and(path("/v1/doge/main/addrs/DDogepartyxxxxxxxxxxxxxxxxxxw1dfzr/full"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(empty_wallet_json("DDogepartyxxxxxxxxxxxxxxxxxxw1dfzr")),
        )
        .mount(&mock_server)
        .await;

    let wallet = client
        .fetch_wallet(
            "DDogepartyxxxxxxxxxxxxxxxxxxw1dfzr",
            Currency::Dogecoin,
        )
        .await
        .unwrap();
    assert_eq!(wallet.address, "DDogepartyxxxxxxxxxxxxxxxxxxw1dfzr");

    // The same address on another chain misses the mock and folds to not-found
    let result = client
        .fetch_wallet("DDogepartyxxxxxxxxxxxxxxxxxxw1dfzr", Currency::Bitcoin)
        .await;
    assert!(matches!(result, Err(ClientError::WalletNotFound { .. })));
}

#[tokio::test]
async fn fetch_wallet_times_out_against_stalled_server() {
    let mock_server = MockServer::start().await;
    let mut config = create_test_config(mock_server.uri());
    config.timeout_seconds = 1;
    let client = BlockCypherClient::new(config).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wallet_json(EATER_ADDRESS))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let result = client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin).await;

    match result.unwrap_err() {
        ClientError::WalletNotFound { source, .. } => {
            // The pooled client's own timeout may fire before the outer deadline
            assert!(matches!(
                source,
                FetchFailure::Timeout { .. } | FetchFailure::Transport(_)
            ));
        }
        other => panic!("Expected WalletNotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_fetches_complete_independently() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{EATER_ADDRESS}/full")))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json(EATER_ADDRESS)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let (first, second) = tokio::join!(
        client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin),
        client.fetch_wallet(EATER_ADDRESS, Currency::Bitcoin),
    );

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_transaction_success() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/txs/{TX_HASH}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(transaction_json(TX_HASH)))
        .mount(&mock_server)
        .await;

    let transaction = client
        .fetch_transaction(TX_HASH, Currency::Bitcoin)
        .await
        .unwrap();

    assert_eq!(transaction.hash, TX_HASH);
    assert_eq!(transaction.block_height, 293_000);
    assert_eq!(transaction.inputs.len(), 1);
    assert_eq!(transaction.outputs.len(), 1);
    assert_eq!(
        transaction.inputs[0].addresses,
        vec!["1GbMfYui17L5m6sAy3L3WXAtf1P32bxJXq"]
    );
    assert_eq!(transaction.outputs[0].value, 70_320_221_545);
    assert!(transaction.has_consistent_io_counts());
    assert!(transaction.is_confirmed());
}

#[tokio::test]
async fn fetch_transaction_not_found_on_404() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/txs/{TX_HASH}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = client.fetch_transaction(TX_HASH, Currency::Bitcoin).await;

    match result.unwrap_err() {
        ClientError::TransactionNotFound {
            hash,
            currency,
            source,
        } => {
            assert_eq!(hash, TX_HASH);
            assert_eq!(currency, Currency::Bitcoin);
            assert!(matches!(source, FetchFailure::Status { status: 404 }));
        }
        other => panic!("Expected TransactionNotFound error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_transaction_tolerates_io_count_mismatch() {
    let mock_server = MockServer::start().await;
    let client = BlockCypherClient::new(create_test_config(mock_server.uri())).unwrap();

    let mut body = transaction_json(TX_HASH);
    body["vin_sz"] = json!(4);

    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/txs/{TX_HASH}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let transaction = client
        .fetch_transaction(TX_HASH, Currency::Bitcoin)
        .await
        .unwrap();

    assert_eq!(transaction.vin_sz, 4);
    assert_eq!(transaction.inputs.len(), 1);
    assert!(!transaction.has_consistent_io_counts());
}
