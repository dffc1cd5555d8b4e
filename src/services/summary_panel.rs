// src/services/summary_panel.rs

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    common::date_utils::DateRange,
    models::sales::SalesSummary,
};

/// Filtros globais do painel (período + loja; `None` = todas).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFilters {
    pub periodo: DateRange,
    pub loja: Option<String>,
}

impl SummaryFilters {
    /// "" para a visão consolidada, como a API de resumo espera.
    pub fn store_filter(&self) -> &str {
        self.loja.as_deref().unwrap_or("")
    }
}

/// Resultado de uma busca de resumo já tratado: em caso de falha,
/// `resumo` vem zerado e `falha` traz o diagnóstico.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub resumo: SalesSummary,
    pub falha: Option<String>,
}

impl SummaryOutcome {
    pub fn loaded(resumo: SalesSummary) -> Self {
        Self { resumo, falha: None }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            resumo: SalesSummary::zeroed(),
            falha: Some(detail.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.falha.is_some()
    }
}

/// Comprovante de uma busca em andamento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub filters: SummaryFilters,
}

#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub latest_generation: u64,
    pub applied_generation: u64,
    pub filters: Option<SummaryFilters>,
    pub outcome: Option<SummaryOutcome>,
}

impl PanelState {
    // Carregando enquanto a busca mais recente não voltou
    pub fn is_loading(&self) -> bool {
        self.latest_generation != self.applied_generation
    }
}

/// Estado exibido pelo painel de resumo. Cada busca recebe uma geração
/// crescente; só o resultado da geração mais recente é aplicado.
#[derive(Debug, Default)]
pub struct SummaryPanel {
    state: RwLock<PanelState>,
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self, filters: SummaryFilters) -> FetchTicket {
        let mut state = self.state.write().await;
        state.latest_generation += 1;

        FetchTicket {
            generation: state.latest_generation,
            filters,
        }
    }

    /// Aplica o resultado se `ticket` ainda for o mais recente.
    /// Retorna `false` quando a resposta chegou atrasada e foi descartada.
    pub async fn complete(&self, ticket: FetchTicket, outcome: SummaryOutcome) -> bool {
        let mut state = self.state.write().await;

        if ticket.generation != state.latest_generation {
            tracing::debug!(
                "Descartando resumo da geração {} (atual: {})",
                ticket.generation,
                state.latest_generation
            );
            return false;
        }

        state.applied_generation = ticket.generation;
        state.filters = Some(ticket.filters);
        state.outcome = Some(outcome);
        true
    }

    pub async fn snapshot(&self) -> PanelState {
        self.state.read().await.clone()
    }

    /// `begin` com o ticket protegido contra cancelamento (ver `PendingFetch`).
    pub async fn start(self: &Arc<Self>, filters: SummaryFilters) -> PendingFetch {
        let ticket = self.begin(filters).await;
        PendingFetch {
            panel: Arc::clone(self),
            ticket: Some(ticket),
        }
    }
}

const ABANDONED_FETCH: &str = "busca cancelada antes de terminar";

/// Busca em andamento no painel. Se for descartada sem `finish` (o cliente
/// desconectou no meio da chamada), o ticket é fechado como falha.
pub struct PendingFetch {
    panel: Arc<SummaryPanel>,
    ticket: Option<FetchTicket>,
}

impl PendingFetch {
    pub async fn finish(mut self, outcome: SummaryOutcome) -> bool {
        let Some(ticket) = self.ticket.clone() else {
            return false;
        };
        let applied = self.panel.complete(ticket, outcome).await;
        self.ticket = None;
        applied
    }
}

impl Drop for PendingFetch {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };

        tracing::debug!("Busca de resumo da geração {} abandonada", ticket.generation);

        let panel = Arc::clone(&self.panel);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    panel.complete(ticket, SummaryOutcome::failed(ABANDONED_FETCH)).await;
                });
            }
            Err(_) => tracing::warn!("Sem runtime para fechar a geração {}", ticket.generation),
        }
    }
}
