// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    common::{date_utils::DateRange, error::AppError},
    data::{MockSalesRepository, StoreCatalog, SummaryApiRepository},
    models::{
        dashboard::ComparisonEntry,
        sales::{DailySalesRecord, MetricKey, SalesSummary, SeriesColumn, SortDirection, StoreOption},
    },
    services::{
        aggregation,
        summary_panel::{PanelState, SummaryFilters, SummaryOutcome, SummaryPanel},
    },
};

/// Série diária de uma loja com a linha de totais.
#[derive(Debug, Clone)]
pub struct StoreSeries {
    pub loja: StoreOption,
    pub linhas: Vec<DailySalesRecord>,
    pub totais: SalesSummary,
}

#[derive(Clone)]
pub struct DashboardService {
    summary_repo: Arc<dyn SummaryApiRepository>,
    sales_repo: MockSalesRepository,
    catalog: Arc<StoreCatalog>,
    panel: Arc<SummaryPanel>,
}

impl DashboardService {
    pub fn new(
        summary_repo: Arc<dyn SummaryApiRepository>,
        sales_repo: MockSalesRepository,
        catalog: Arc<StoreCatalog>,
    ) -> Self {
        Self {
            summary_repo,
            sales_repo,
            catalog,
            panel: Arc::new(SummaryPanel::new()),
        }
    }

    pub fn stores(&self) -> &[StoreOption] {
        self.catalog.all()
    }

    pub fn find_store(&self, id: &str) -> Result<&StoreOption, AppError> {
        self.catalog
            .find(id)
            .ok_or_else(|| AppError::UnknownStore(id.to_string()))
    }

    /// Resumo dos cards. Nunca falha: se a API externa cair, devolve tudo
    /// zerado com a falha anotada. O painel só guarda a busca mais recente.
    /// Período invertido dá resumo zerado sem consultar a API.
    pub async fn get_summary(&self, filters: SummaryFilters) -> SummaryOutcome {
        let pending = self.panel.start(filters.clone()).await;

        let outcome = if filters.periodo.is_inverted() {
            tracing::debug!("Período invertido, resumo zerado sem consulta remota");
            SummaryOutcome::loaded(SalesSummary::zeroed())
        } else {
            match self.summary_repo.fetch_summary(&filters.periodo).await {
                Ok(rows) => {
                    SummaryOutcome::loaded(aggregation::map_remote_to_summary(&rows, filters.store_filter()))
                }
                Err(e) => {
                    tracing::warn!("⚠️ Falha ao buscar resumo de vendas: {}", e);
                    SummaryOutcome::failed(e.to_string())
                }
            }
        };

        if !pending.finish(outcome.clone()).await {
            tracing::debug!("Resposta de resumo obsoleta, painel não atualizado");
        }

        outcome
    }

    pub async fn current_panel(&self) -> PanelState {
        self.panel.snapshot().await
    }

    /// Comparativo entre lojas para uma métrica, do maior para o menor.
    pub fn get_comparison(&self, metric: MetricKey, periodo: &DateRange) -> Vec<ComparisonEntry> {
        let records = self.sales_repo.generate(periodo);
        aggregation::rank_comparison(&records, metric, &self.catalog)
    }

    /// Dados diários de uma loja, opcionalmente reordenados.
    pub fn get_store_series(
        &self,
        store_id: &str,
        periodo: &DateRange,
        sort: Option<(SeriesColumn, SortDirection)>,
    ) -> Result<StoreSeries, AppError> {
        let loja = self.find_store(store_id)?.clone();

        let records = self.sales_repo.generate(periodo);
        let mut linhas = aggregation::filter_store_series(records, &loja.id);
        if let Some((column, direction)) = sort {
            aggregation::sort_series(&mut linhas, column, direction);
        }
        let totais = aggregation::summarize(&linhas);

        Ok(StoreSeries { loja, linhas, totais })
    }
}
