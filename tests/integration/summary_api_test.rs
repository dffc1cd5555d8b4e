// Integration tests: cliente HTTP da API de resumo de vendas
//
// Fala com uma API falsa em porta efêmera; nenhuma chamada sai da máquina.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

use helpers::*;
use painel_vendas::{
    common::{date_utils::DateRange, error::AppError},
    config::SummaryApiConfig,
    data::{HttpSummaryApiRepository, SummaryApiRepository},
    services::aggregation::map_remote_to_summary,
};

fn january() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
}

fn repo_for(url: &str) -> HttpSummaryApiRepository {
    HttpSummaryApiRepository::new(&SummaryApiConfig {
        url: url.to_string(),
        user_guid: TEST_USER_GUID.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn sends_guid_and_iso_dates() {
    let api = spawn_fake_summary_api(FakeReply::Rows(json!([]))).await;

    repo_for(&api.url).fetch_summary(&january()).await.unwrap();

    let received = api.received();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0],
        json!({
            "guididusuario": TEST_USER_GUID,
            "datainicial": "2024-01-01",
            "datafinal": "2024-01-31"
        })
    );
}

#[tokio::test]
async fn parses_rows_and_maps_consolidated_and_per_store() {
    let api = spawn_fake_summary_api(FakeReply::Rows(sample_rows())).await;

    let rows = repo_for(&api.url).fetch_summary(&january()).await.unwrap();
    assert_eq!(rows.len(), 7);

    let consolidated = map_remote_to_summary(&rows, "");
    assert_eq!(consolidated.total_notas, dec!(300));
    assert_eq!(consolidated.total_cancelados, dec!(15.5));
    assert_eq!(consolidated.total_liquido, dec!(281.5));
    assert_eq!(consolidated.total_liquidobl, dec!(38));

    let loja_003 = map_remote_to_summary(&rows, "003");
    assert_eq!(loja_003.total_notas, dec!(200));
    assert_eq!(loja_003.total_cancelados, dec!(5.5));
    // null e "abc" viram zero
    assert_eq!(loja_003.total_vendabl, dec!(0));
    assert_eq!(loja_003.total_liquidobl, dec!(0));

    // loja que não aparece em nenhuma linha
    assert_eq!(map_remote_to_summary(&rows, "007"), Default::default());
}

#[tokio::test]
async fn non_success_status_is_a_remote_error() {
    let api = spawn_fake_summary_api(FakeReply::Status(500)).await;

    let err = repo_for(&api.url).fetch_summary(&january()).await.unwrap_err();

    assert!(matches!(err, AppError::RemoteStatus(500)));
    assert!(err.is_remote_fetch());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let api = spawn_fake_summary_api(FakeReply::Malformed).await;

    let err = repo_for(&api.url).fetch_summary(&january()).await.unwrap_err();

    assert!(matches!(err, AppError::RemoteDecode(_)));
    assert!(err.is_remote_fetch());
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let url = closed_port_url().await;

    let err = repo_for(&url).fetch_summary(&january()).await.unwrap_err();

    assert!(matches!(err, AppError::RemoteTransport(_)));
    assert!(err.is_remote_fetch());
}
