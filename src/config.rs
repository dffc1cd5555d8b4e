// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    common::i18n::{I18nStore, FALLBACK_LANG},
    data::{HttpSummaryApiRepository, MockSalesRepository, StoreCatalog, SummaryApiRepository},
    services::DashboardService,
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SUMMARY_API_URL: &str =
    "https://serv-api.ce.br.saveincloud.net.br/sec/resumoVendasPeriodo";
const DEFAULT_SUMMARY_API_USER_GUID: &str = "2F913CCB-58FF-49B1-9794-C0984F909DEB";
const DEFAULT_SUMMARY_API_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_RANGE_DAYS: usize = 366;

/// Acesso à API externa de resumo de vendas.
#[derive(Debug, Clone)]
pub struct SummaryApiConfig {
    pub url: String,
    pub user_guid: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub summary_api: SummaryApiConfig,
    pub default_locale: String,
    /// Maior período aceito nas consultas, em dias
    pub max_range_days: usize,
}

impl AppConfig {
    /// Lê as variáveis de ambiente (e o `.env`, se existir).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let timeout_secs = match env::var("SUMMARY_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SUMMARY_API_TIMEOUT_SECS inválido: '{}'", raw))?,
            Err(_) => DEFAULT_SUMMARY_API_TIMEOUT_SECS,
        };

        let max_range_days = match env::var("MAX_RANGE_DAYS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|days| *days > 0)
                .with_context(|| format!("MAX_RANGE_DAYS inválido: '{}'", raw))?,
            Err(_) => DEFAULT_MAX_RANGE_DAYS,
        };

        let url = env_or("SUMMARY_API_URL", DEFAULT_SUMMARY_API_URL);
        reqwest::Url::parse(&url).with_context(|| format!("SUMMARY_API_URL inválida: '{}'", url))?;

        Ok(Self {
            server_addr: env_or("SERVER_ADDR", DEFAULT_SERVER_ADDR),
            summary_api: SummaryApiConfig {
                url,
                user_guid: env_or("SUMMARY_API_USER_GUID", DEFAULT_SUMMARY_API_USER_GUID),
                timeout: Duration::from_secs(timeout_secs),
            },
            default_locale: env_or("DEFAULT_LOCALE", FALLBACK_LANG),
            max_range_days,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dashboard_service: DashboardService,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let summary_repo = HttpSummaryApiRepository::new(&config.summary_api)
            .context("Falha ao criar o cliente da API de resumo")?;

        tracing::info!("✅ API de resumo configurada em {}", config.summary_api.url);

        Ok(Self::with_summary_repository(config, Arc::new(summary_repo)))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_summary_repository(
        config: AppConfig,
        summary_repo: Arc<dyn SummaryApiRepository>,
    ) -> Self {
        let catalog = Arc::new(StoreCatalog::default());
        let sales_repo = MockSalesRepository::new(catalog.clone());
        let dashboard_service = DashboardService::new(summary_repo, sales_repo, catalog);
        let i18n_store = Arc::new(I18nStore::new(&config.default_locale));

        Self {
            config: Arc::new(config),
            dashboard_service,
            i18n_store,
        }
    }
}
