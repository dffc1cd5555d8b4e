// src/docs.rs

use utoipa::OpenApi;
use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Painel de Vendas",
        description = "Resumo, comparativo entre lojas e análise diária de vendas"
    ),
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_current_summary,
        handlers::dashboard::get_comparison,
        handlers::dashboard::get_time_series,
        handlers::dashboard::list_metrics,
        handlers::dashboard::get_quick_ranges,

        // --- Stores ---
        handlers::stores::list_stores,
    ),
    components(
        schemas(
            // --- Datas ---
            common::date_utils::DateRange,
            common::date_utils::QuickRange,

            // --- Vendas ---
            models::sales::DailySalesRecord,
            models::sales::SalesSummary,
            models::sales::StoreOption,
            models::sales::MetricKey,

            // --- DASHBOARD ---
            models::dashboard::SummaryCard,
            models::dashboard::SummaryResponse,
            models::dashboard::PanelSnapshot,
            models::dashboard::ComparisonEntry,
            models::dashboard::ComparisonRow,
            models::dashboard::ComparisonResponse,
            models::dashboard::TimeSeriesRow,
            models::dashboard::TimeSeriesResponse,
            models::dashboard::MetricOption,
            models::dashboard::QuickRangeOption,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Stores", description = "Catálogo de Lojas")
    )
)]
pub struct ApiDoc;
