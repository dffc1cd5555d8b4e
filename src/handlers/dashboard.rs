// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::{
        date_utils::{self, DateRange, QuickRange},
        error::{ApiError, AppError},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::{
        dashboard::{
            ComparisonResponse, MetricOption, PanelSnapshot, QuickRangeOption, SummaryCard,
            SummaryResponse, TimeSeriesResponse, TimeSeriesRow,
        },
        sales::{MetricKey, SalesSummary, SeriesColumn, SortDirection},
    },
    services::summary_panel::SummaryFilters,
};

// Loja usada na análise detalhada quando nenhuma é informada
const DEFAULT_SERIES_STORE: &str = "002";

// ---
// Query: Resumo (cards)
// ---
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// AAAA-MM-DD (padrão: hoje)
    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_inicial: Option<String>,

    /// AAAA-MM-DD (padrão: hoje)
    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_final: Option<String>,

    /// Código da loja; vazio = todas
    #[validate(length(max = 3, message = "Código de loja inválido."))]
    pub loja: Option<String>,
}

// Períodos acima de MAX_RANGE_DAYS são recusados antes de gerar qualquer dado
fn within_limit(periodo: DateRange, app_state: &AppState) -> Result<DateRange, AppError> {
    periodo.ensure_max_days(app_state.config.max_range_days)?;
    Ok(periodo)
}

// "" e espaços contam como "todas as lojas"
fn normalize_store(loja: Option<String>) -> Option<String> {
    loja.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Cards de resumo do período (zerados, com `erro`, se a API externa falhar)", body = SummaryResponse),
        (status = 400, description = "Data ou loja inválida, ou período longo demais")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, ApiError> {

    query.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let periodo = DateRange::from_params(
        query.data_inicial.as_deref(),
        query.data_final.as_deref(),
        DateRange::single_day(date_utils::today()),
    )
    .and_then(|periodo| within_limit(periodo, &app_state))
    .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let loja = normalize_store(query.loja);

    let escopo = match &loja {
        Some(id) => app_state.dashboard_service
            .find_store(id)
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?
            .name
            .clone(),
        None => app_state.i18n_store.translate(&locale.0, "consolidated_view"),
    };

    let outcome = app_state.dashboard_service
        .get_summary(SummaryFilters { periodo, loja: loja.clone() })
        .await;

    let erro = outcome
        .is_error()
        .then(|| app_state.i18n_store.translate(&locale.0, "remote_fetch_failed"));

    Ok((StatusCode::OK, Json(SummaryResponse {
        periodo,
        loja,
        escopo,
        cards: SummaryCard::cards_for(&outcome.resumo),
        resumo: outcome.resumo,
        erro,
    })))
}

// GET /api/dashboard/summary/current
#[utoipa::path(
    get,
    path = "/api/dashboard/summary/current",
    tag = "Dashboard",
    responses(
        (status = 200, description = "O que o painel de resumo está exibindo (última busca aplicada)", body = PanelSnapshot)
    )
)]
pub async fn get_current_summary(
    State(app_state): State<AppState>,
    locale: Locale,
) -> impl IntoResponse {

    let state = app_state.dashboard_service.current_panel().await;

    let carregando = state.is_loading();
    let resumo = state
        .outcome
        .as_ref()
        .map(|o| o.resumo.clone())
        .unwrap_or_else(SalesSummary::zeroed);
    let erro = state.outcome.as_ref().is_some_and(|o| o.is_error());

    let snapshot = PanelSnapshot {
        geracao: state.applied_generation,
        carregando,
        periodo: state.filters.as_ref().map(|f| f.periodo),
        loja: state.filters.and_then(|f| f.loja),
        cards: SummaryCard::cards_for(&resumo),
        resumo,
        erro,
        mensagem_erro: erro.then(|| app_state.i18n_store.translate(&locale.0, "remote_fetch_failed")),
    };

    (StatusCode::OK, Json(snapshot))
}

// ---
// Query: Comparativo entre lojas
// ---
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ComparisonQuery {
    /// total_notas (padrão), total_cancelados, total_devolvido, total_liquido, total_vendabl, total_liquidobl
    #[validate(length(max = 32, message = "Métrica inválida."))]
    pub metrica: Option<String>,

    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_inicial: Option<String>,

    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_final: Option<String>,
}

// GET /api/dashboard/comparison
#[utoipa::path(
    get,
    path = "/api/dashboard/comparison",
    tag = "Dashboard",
    params(ComparisonQuery),
    responses(
        (status = 200, description = "Ranking de participação das lojas na métrica escolhida", body = ComparisonResponse),
        (status = 400, description = "Métrica ou data inválida, ou período longo demais")
    )
)]
pub async fn get_comparison(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ComparisonQuery>,
) -> Result<impl IntoResponse, ApiError> {

    query.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let metric = match query.metrica.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        Some(key) => MetricKey::from_key(key).ok_or_else(|| {
            AppError::UnknownMetric(key.to_string()).to_api_error(&locale, &app_state.i18n_store)
        })?,
        None => MetricKey::TotalNotas,
    };

    let periodo = DateRange::from_params(
        query.data_inicial.as_deref(),
        query.data_final.as_deref(),
        DateRange::single_day(date_utils::today()),
    )
    .and_then(|periodo| within_limit(periodo, &app_state))
    .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let entries = app_state.dashboard_service.get_comparison(metric, &periodo);

    Ok((StatusCode::OK, Json(ComparisonResponse::new(metric, periodo, entries))))
}

// ---
// Query: Análise detalhada por loja
// ---
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TimeSeriesQuery {
    /// Código da loja (padrão: 002)
    #[validate(length(max = 3, message = "Código de loja inválido."))]
    pub loja: Option<String>,

    /// AAAA-MM-DD (padrão: primeiro dia do mês)
    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_inicial: Option<String>,

    /// AAAA-MM-DD (padrão: hoje)
    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_final: Option<String>,

    /// "data" ou uma das métricas
    #[validate(length(max = 32, message = "Coluna inválida."))]
    pub ordenar_por: Option<String>,

    /// asc | desc
    #[validate(length(max = 4, message = "Use asc ou desc."))]
    pub direcao: Option<String>,
}

impl TimeSeriesQuery {
    fn sort(&self) -> Result<Option<(SeriesColumn, SortDirection)>, AppError> {
        let Some(column_key) = self.ordenar_por.as_deref().map(str::trim).filter(|c| !c.is_empty()) else {
            return Ok(None);
        };

        let column = SeriesColumn::from_key(column_key)
            .ok_or_else(|| AppError::UnknownSortColumn(column_key.to_string()))?;

        let direction = match self.direcao.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => SortDirection::from_key(d)
                .ok_or_else(|| AppError::UnknownSortDirection(d.to_string()))?,
            None => SortDirection::default(),
        };

        Ok(Some((column, direction)))
    }
}

// GET /api/dashboard/time-series
#[utoipa::path(
    get,
    path = "/api/dashboard/time-series",
    tag = "Dashboard",
    params(TimeSeriesQuery),
    responses(
        (status = 200, description = "Evolução diária de uma loja com a linha de totais", body = TimeSeriesResponse),
        (status = 400, description = "Loja, data ou ordenação inválida, ou período longo demais")
    )
)]
pub async fn get_time_series(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<TimeSeriesQuery>,
) -> Result<impl IntoResponse, ApiError> {

    query.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let sort = query.sort()
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let hoje = date_utils::today();
    let periodo = DateRange::from_params(
        query.data_inicial.as_deref(),
        query.data_final.as_deref(),
        QuickRange::Mes.resolve(hoje),
    )
    .and_then(|periodo| within_limit(periodo, &app_state))
    .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let loja = normalize_store(query.loja).unwrap_or_else(|| DEFAULT_SERIES_STORE.to_string());

    let series = app_state.dashboard_service
        .get_store_series(&loja, &periodo, sort)
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let aviso = series
        .linhas
        .is_empty()
        .then(|| app_state.i18n_store.translate(&locale.0, "no_data"));

    Ok((StatusCode::OK, Json(TimeSeriesResponse {
        loja: series.loja.id,
        nome_loja: series.loja.name,
        periodo,
        linhas: series.linhas.into_iter().map(TimeSeriesRow::from).collect(),
        totais_formatados: SummaryCard::cards_for(&series.totais),
        totais: series.totais,
        aviso,
    })))
}

// GET /api/dashboard/metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Métricas disponíveis para o comparativo", body = Vec<MetricOption>)
    )
)]
pub async fn list_metrics() -> impl IntoResponse {
    let options: Vec<MetricOption> = MetricKey::ALL.into_iter().map(MetricOption::from).collect();
    (StatusCode::OK, Json(options))
}

// ---
// Query: Atalhos de período
// ---
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct QuickRangesQuery {
    /// Intervalo selecionado hoje no seletor (para marcar o atalho ativo)
    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_inicial: Option<String>,

    #[validate(length(max = 10, message = "Use o formato AAAA-MM-DD."))]
    pub data_final: Option<String>,

    /// Esconde o atalho "Hoje" (usado na análise detalhada)
    #[serde(default)]
    pub hide_today: bool,
}

// GET /api/dashboard/quick-ranges
#[utoipa::path(
    get,
    path = "/api/dashboard/quick-ranges",
    tag = "Dashboard",
    params(QuickRangesQuery),
    responses(
        (status = 200, description = "Atalhos Hoje / Semana / Mês", body = Vec<QuickRangeOption>),
        (status = 400, description = "Data inválida")
    )
)]
pub async fn get_quick_ranges(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<QuickRangesQuery>,
) -> Result<impl IntoResponse, ApiError> {

    query.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let hoje = date_utils::today();

    let current = match (query.data_inicial.as_deref(), query.data_final.as_deref()) {
        (None, None) => None,
        (inicio, fim) => Some(
            DateRange::from_params(inicio, fim, DateRange::single_day(hoje))
                .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?,
        ),
    };

    let options: Vec<QuickRangeOption> = QuickRange::ALL
        .into_iter()
        .filter(|r| !(query.hide_today && *r == QuickRange::Hoje))
        .map(|r| QuickRangeOption {
            atalho: r,
            rotulo: r.label().to_string(),
            periodo: r.resolve(hoje),
            ativo: current.is_some_and(|c| r.is_active(&c, hoje, query.hide_today)),
        })
        .collect();

    Ok((StatusCode::OK, Json(options)))
}
