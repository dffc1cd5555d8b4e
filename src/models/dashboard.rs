// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::date_utils::{DateRange, QuickRange};
use crate::common::format_utils::{format_currency, format_date_br, format_percent};
use crate::models::sales::{DailySalesRecord, MetricKey, SalesSummary};

// 1. Cards do topo
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub metrica: MetricKey,
    #[schema(example = "Total Notas")]
    pub titulo: String,
    #[schema(value_type = f64)]
    pub valor: Decimal,
    #[schema(example = "R$ 1.234,56")]
    pub valor_formatado: String,
    #[schema(example = "#2563eb")]
    pub cor: String,
}

impl SummaryCard {
    pub fn cards_for(summary: &SalesSummary) -> Vec<SummaryCard> {
        MetricKey::ALL
            .into_iter()
            .map(|metric| {
                let valor = summary.get(metric);
                SummaryCard {
                    metrica: metric,
                    titulo: metric.label().to_string(),
                    valor,
                    valor_formatado: format_currency(valor),
                    cor: metric.card_color().to_string(),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub periodo: DateRange,
    #[schema(example = "")]
    pub loja: Option<String>,
    /// "Visão Consolidada" ou o nome da loja filtrada
    #[schema(example = "Visão Consolidada")]
    pub escopo: String,
    pub resumo: SalesSummary,
    pub cards: Vec<SummaryCard>,
    /// Mensagem traduzida quando a API externa falhou (os valores vêm zerados)
    pub erro: Option<String>,
}

/// O que o painel está exibindo agora.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot {
    pub geracao: u64,
    pub carregando: bool,
    pub periodo: Option<DateRange>,
    pub loja: Option<String>,
    pub resumo: SalesSummary,
    pub cards: Vec<SummaryCard>,
    pub erro: bool,
    pub mensagem_erro: Option<String>,
}

// 2. Comparativo entre lojas (gráfico de pizza + ranking)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    #[schema(example = "Loja Centro")]
    pub name: String,
    #[schema(value_type = f64)]
    pub value: Decimal,
    /// 0..100
    #[schema(value_type = f64, example = 18.25)]
    pub percentual: Decimal,
    #[schema(example = "#3b82f6")]
    pub cor: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    #[serde(flatten)]
    pub entry: ComparisonEntry,
    pub valor_formatado: String,
    pub percentual_formatado: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub metrica: MetricKey,
    #[schema(example = "Total Notas")]
    pub rotulo_metrica: String,
    pub periodo: DateRange,
    pub ranking: Vec<ComparisonRow>,
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub total_formatado: String,
}

impl ComparisonResponse {
    pub fn new(metric: MetricKey, periodo: DateRange, entries: Vec<ComparisonEntry>) -> Self {
        let total: Decimal = entries.iter().map(|e| e.value).sum();
        let ranking = entries
            .into_iter()
            .map(|entry| ComparisonRow {
                valor_formatado: format_currency(entry.value),
                percentual_formatado: format_percent(entry.percentual),
                entry,
            })
            .collect();

        Self {
            metrica: metric,
            rotulo_metrica: metric.label().to_string(),
            periodo,
            ranking,
            total,
            total_formatado: format_currency(total),
        }
    }
}

// 3. Análise detalhada por loja (gráfico de área + tabela diária)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesRow {
    #[serde(flatten)]
    pub registro: DailySalesRecord,
    #[schema(example = "31/01/2024")]
    pub data_formatada: String,
}

impl From<DailySalesRecord> for TimeSeriesRow {
    fn from(registro: DailySalesRecord) -> Self {
        Self {
            data_formatada: format_date_br(registro.data),
            registro,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResponse {
    #[schema(example = "002")]
    pub loja: String,
    #[schema(example = "Loja Centro")]
    pub nome_loja: String,
    pub periodo: DateRange,
    pub linhas: Vec<TimeSeriesRow>,
    /// Linha "Total Geral" da tabela
    pub totais: SalesSummary,
    pub totais_formatados: Vec<SummaryCard>,
    /// Preenchido quando não há linhas ("Nenhum dado encontrado.")
    pub aviso: Option<String>,
}

// 4. Opções dos seletores
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricOption {
    pub key: MetricKey,
    pub label: String,
}

impl From<MetricKey> for MetricOption {
    fn from(metric: MetricKey) -> Self {
        Self {
            key: metric,
            label: metric.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuickRangeOption {
    pub atalho: QuickRange,
    #[schema(example = "Semana")]
    pub rotulo: String,
    pub periodo: DateRange,
    pub ativo: bool,
}
