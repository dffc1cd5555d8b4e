// src/services/aggregation.rs
//
// Regras de consolidação dos três painéis. Tudo aqui é puro: recebe os
// registros/linhas e devolve a visão derivada.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    data::StoreCatalog,
    models::{
        dashboard::ComparisonEntry,
        sales::{ApiSalesMetric, DailySalesRecord, MetricKey, SalesSummary, SeriesColumn, SortDirection},
    },
};

/// Cores da legenda do gráfico, pela posição no ranking.
pub const LEGEND_COLORS: [&str; 6] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899"];

/// Converte as linhas da API de resumo nos seis totais.
///
/// Com `store_filter` vazio usa `total_operacao` (consolidado); com uma loja
/// usa o campo daquela loja (ausente = 0). Títulos desconhecidos são ignorados.
pub fn map_remote_to_summary(rows: &[ApiSalesMetric], store_filter: &str) -> SalesSummary {
    let store = store_filter.trim();
    let mut summary = SalesSummary::zeroed();

    for row in rows {
        let Some(metric) = MetricKey::from_remote_title(&row.titulo) else {
            continue;
        };

        let value = if store.is_empty() {
            row.total_operacao
        } else {
            row.store_value(store)
        };
        summary.set(metric, value);
    }

    summary
}

/// Soma simples de todas as colunas (linha "Total Geral").
pub fn summarize(records: &[DailySalesRecord]) -> SalesSummary {
    records.iter().fold(SalesSummary::zeroed(), |mut acc, r| {
        acc.add_record(r);
        acc
    })
}

/// Ranking do comparativo: soma a métrica por loja (pelo nome de exibição)
/// e ordena do maior para o menor. Empates mantêm a ordem de chegada.
pub fn rank_comparison(
    records: &[DailySalesRecord],
    metric: MetricKey,
    catalog: &StoreCatalog,
) -> Vec<ComparisonEntry> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for record in records {
        let name = catalog.display_name(&record.loja);
        let idx = *position.entry(name.to_string()).or_insert_with(|| {
            totals.push((name.to_string(), Decimal::ZERO));
            totals.len() - 1
        });
        totals[idx].1 += metric.value_of(record);
    }

    // sort_by é estável
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    let grand_total: Decimal = totals.iter().map(|(_, v)| *v).sum();

    totals
        .into_iter()
        .enumerate()
        .map(|(rank, (name, value))| ComparisonEntry {
            name,
            value,
            percentual: percentage(value, grand_total),
            cor: LEGEND_COLORS[rank % LEGEND_COLORS.len()].to_string(),
        })
        .collect()
}

/// value / total × 100, com 4 casas. Total zero dá 0%.
pub fn percentage(value: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (value * Decimal::ONE_HUNDRED / total).round_dp(4)
}

/// Só as linhas de uma loja, mantendo a ordem por data.
pub fn filter_store_series(records: Vec<DailySalesRecord>, store_id: &str) -> Vec<DailySalesRecord> {
    records.into_iter().filter(|r| r.loja == store_id).collect()
}

/// Ordenação da tabela diária (estável).
pub fn sort_series(rows: &mut [DailySalesRecord], column: SeriesColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = match column {
            SeriesColumn::Data => a.data.cmp(&b.data),
            SeriesColumn::Metric(metric) => metric.value_of(a).cmp(&metric.value_of(b)),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}
