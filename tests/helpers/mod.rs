// Test Server Helpers
//
// Sobe a API externa de resumo falsa e o próprio painel em portas efêmeras.

#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use painel_vendas::{
    config::{AppConfig, AppState, SummaryApiConfig},
    routes::create_router,
};

pub const TEST_USER_GUID: &str = "00000000-0000-0000-0000-000000000000";

/// O que a API falsa responde.
#[derive(Clone)]
pub enum FakeReply {
    Rows(Value),
    Status(u16),
    Malformed,
}

#[derive(Clone)]
struct FakeState {
    reply: FakeReply,
    received: Arc<Mutex<Vec<Value>>>,
}

/// API de resumo falsa rodando em 127.0.0.1.
pub struct FakeSummaryApi {
    pub url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl FakeSummaryApi {
    /// Corpos JSON recebidos, na ordem de chegada.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn fake_handler(State(state): State<FakeState>, Json(body): Json<Value>) -> impl IntoResponse {
    state.received.lock().unwrap().push(body);

    match state.reply {
        FakeReply::Rows(rows) => (StatusCode::OK, rows.to_string()).into_response(),
        FakeReply::Status(code) => (
            StatusCode::from_u16(code).unwrap(),
            "upstream indisponível".to_string(),
        )
            .into_response(),
        FakeReply::Malformed => (StatusCode::OK, "{ isto não é json".to_string()).into_response(),
    }
}

pub async fn spawn_fake_summary_api(reply: FakeReply) -> FakeSummaryApi {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState { reply, received: received.clone() };

    let app = Router::new()
        .route("/sec/resumoVendasPeriodo", post(fake_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeSummaryApi {
        url: format!("http://{}/sec/resumoVendasPeriodo", addr),
        received,
    }
}

/// URL em uma porta onde ninguém escuta.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/sec/resumoVendasPeriodo", addr)
}

pub fn test_config(summary_url: &str) -> AppConfig {
    AppConfig {
        server_addr: "127.0.0.1:0".to_string(),
        summary_api: SummaryApiConfig {
            url: summary_url.to_string(),
            user_guid: TEST_USER_GUID.to_string(),
            timeout: Duration::from_secs(5),
        },
        default_locale: "pt".to_string(),
        max_range_days: 366,
    }
}

/// Sobe o painel apontando para `summary_url` e devolve a URL base.
pub async fn spawn_app(summary_url: &str) -> String {
    let state = AppState::new(test_config(summary_url)).unwrap();
    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Duas lojas com valores, no formato da API real.
pub fn sample_rows() -> Value {
    json!([
        { "titulo": "Total Notas",      "002": 100,    "003": 200,    "total_operacao": 300 },
        { "titulo": "Total Cancelados", "002": 10,     "003": "5.5",  "total_operacao": 15.5 },
        { "titulo": "Total Devolvido",  "002": 1,      "003": 2,      "total_operacao": 3 },
        { "titulo": "Total Líquido",    "002": 89,     "003": 192.5,  "total_operacao": 281.5 },
        { "titulo": "Total Venda BL",   "002": 40,     "003": null,   "total_operacao": 40 },
        { "titulo": "Total Líquido BL", "002": 38,     "003": "abc",  "total_operacao": 38 },
        { "titulo": "Linha Desconhecida", "002": 999,  "total_operacao": 999 }
    ])
}
