// src/data/summary_api_repo.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::{
    common::{date_utils::{to_iso, DateRange}, error::AppError},
    config::SummaryApiConfig,
    models::sales::ApiSalesMetric,
};

/// Fonte do resumo de vendas por período (uma chamada, sem estado).
#[async_trait]
pub trait SummaryApiRepository: Send + Sync {
    async fn fetch_summary(&self, range: &DateRange) -> Result<Vec<ApiSalesMetric>, AppError>;
}

// Corpo esperado pelo endpoint resumoVendasPeriodo
#[derive(Debug, Serialize)]
struct ResumoVendasRequest<'a> {
    guididusuario: &'a str,
    datainicial: String,
    datafinal: String,
}

/// Cliente HTTP da API externa de resumo.
#[derive(Clone)]
pub struct HttpSummaryApiRepository {
    client: Client,
    endpoint: String,
    user_guid: String,
}

impl HttpSummaryApiRepository {
    pub fn new(config: &SummaryApiConfig) -> Result<Self, AppError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
            user_guid: config.user_guid.clone(),
        })
    }
}

#[async_trait]
impl SummaryApiRepository for HttpSummaryApiRepository {
    async fn fetch_summary(&self, range: &DateRange) -> Result<Vec<ApiSalesMetric>, AppError> {
        let body = ResumoVendasRequest {
            guididusuario: &self.user_guid,
            datainicial: to_iso(range.inicio),
            datafinal: to_iso(range.fim),
        };

        tracing::debug!(
            "Buscando resumo de vendas de {} a {} em {}",
            body.datainicial,
            body.datafinal,
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::RemoteStatus(status.as_u16()));
        }

        let rows: Vec<ApiSalesMetric> = response
            .json()
            .await
            .map_err(|e| AppError::RemoteDecode(e.to_string()))?;

        tracing::debug!("API de resumo retornou {} linhas", rows.len());
        Ok(rows)
    }
}
