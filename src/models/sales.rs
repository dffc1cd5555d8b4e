// src/models/sales.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::common::deserializers::{self, de};

// 1. Registro diário por loja (dados sintéticos)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailySalesRecord {
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub data: NaiveDate,
    #[schema(example = "002")]
    pub loja: String,
    #[schema(value_type = f64, example = 35210.45)]
    pub total_notas: Decimal,
    #[schema(value_type = f64)]
    pub total_cancelados: Decimal,
    #[schema(value_type = f64)]
    pub total_devolvido: Decimal,
    #[schema(value_type = f64)]
    pub total_liquido: Decimal, // notas - cancelados - devolvido
    #[schema(value_type = f64)]
    pub total_vendabl: Decimal, // canal online/balcão
    #[schema(value_type = f64)]
    pub total_canceladosbl: Decimal,
    #[schema(value_type = f64)]
    pub total_liquidobl: Decimal, // vendabl - canceladosbl
}

// 2. Resumo (os seis cards do topo)
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SalesSummary {
    #[schema(value_type = f64)]
    pub total_notas: Decimal,
    #[schema(value_type = f64)]
    pub total_cancelados: Decimal,
    #[schema(value_type = f64)]
    pub total_devolvido: Decimal,
    #[schema(value_type = f64)]
    pub total_liquido: Decimal,
    #[schema(value_type = f64)]
    pub total_vendabl: Decimal,
    #[schema(value_type = f64)]
    pub total_liquidobl: Decimal,
}

impl SalesSummary {
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: MetricKey) -> Decimal {
        match metric {
            MetricKey::TotalNotas => self.total_notas,
            MetricKey::TotalCancelados => self.total_cancelados,
            MetricKey::TotalDevolvido => self.total_devolvido,
            MetricKey::TotalLiquido => self.total_liquido,
            MetricKey::TotalVendabl => self.total_vendabl,
            MetricKey::TotalLiquidobl => self.total_liquidobl,
        }
    }

    pub fn set(&mut self, metric: MetricKey, value: Decimal) {
        let slot = match metric {
            MetricKey::TotalNotas => &mut self.total_notas,
            MetricKey::TotalCancelados => &mut self.total_cancelados,
            MetricKey::TotalDevolvido => &mut self.total_devolvido,
            MetricKey::TotalLiquido => &mut self.total_liquido,
            MetricKey::TotalVendabl => &mut self.total_vendabl,
            MetricKey::TotalLiquidobl => &mut self.total_liquidobl,
        };
        *slot = value;
    }

    pub fn add_record(&mut self, record: &DailySalesRecord) {
        self.total_notas += record.total_notas;
        self.total_cancelados += record.total_cancelados;
        self.total_devolvido += record.total_devolvido;
        self.total_liquido += record.total_liquido;
        self.total_vendabl += record.total_vendabl;
        self.total_liquidobl += record.total_liquidobl;
    }
}

// 3. Catálogo de lojas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoreOption {
    #[schema(example = "002")]
    pub id: String,
    #[schema(example = "Loja Centro")]
    pub name: String,
}

/// As métricas comparáveis entre lojas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    TotalNotas,
    TotalCancelados,
    TotalDevolvido,
    TotalLiquido,
    TotalVendabl,
    TotalLiquidobl,
}

impl MetricKey {
    pub const ALL: [MetricKey; 6] = [
        MetricKey::TotalNotas,
        MetricKey::TotalCancelados,
        MetricKey::TotalDevolvido,
        MetricKey::TotalLiquido,
        MetricKey::TotalVendabl,
        MetricKey::TotalLiquidobl,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MetricKey::TotalNotas => "total_notas",
            MetricKey::TotalCancelados => "total_cancelados",
            MetricKey::TotalDevolvido => "total_devolvido",
            MetricKey::TotalLiquido => "total_liquido",
            MetricKey::TotalVendabl => "total_vendabl",
            MetricKey::TotalLiquidobl => "total_liquidobl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::TotalNotas => "Total Notas",
            MetricKey::TotalCancelados => "Total Cancelados",
            MetricKey::TotalDevolvido => "Total Devolvido",
            MetricKey::TotalLiquido => "Total Líquido",
            MetricKey::TotalVendabl => "Venda Online (BL)",
            MetricKey::TotalLiquidobl => "Líquido Online (BL)",
        }
    }

    /// Título usado pela API de resumo (`titulo`).
    pub fn remote_title(&self) -> &'static str {
        match self {
            MetricKey::TotalNotas => "Total Notas",
            MetricKey::TotalCancelados => "Total Cancelados",
            MetricKey::TotalDevolvido => "Total Devolvido",
            MetricKey::TotalLiquido => "Total Líquido",
            MetricKey::TotalVendabl => "Total Venda BL",
            MetricKey::TotalLiquidobl => "Total Líquido BL",
        }
    }

    // Cor do card no painel
    pub fn card_color(&self) -> &'static str {
        match self {
            MetricKey::TotalNotas => "#2563eb",
            MetricKey::TotalCancelados => "#ef4444",
            MetricKey::TotalDevolvido => "#f97316",
            MetricKey::TotalLiquido => "#059669",
            MetricKey::TotalVendabl => "#6366f1",
            MetricKey::TotalLiquidobl => "#9333ea",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key.trim())
    }

    pub fn from_remote_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.remote_title() == title)
    }

    pub fn value_of(&self, record: &DailySalesRecord) -> Decimal {
        match self {
            MetricKey::TotalNotas => record.total_notas,
            MetricKey::TotalCancelados => record.total_cancelados,
            MetricKey::TotalDevolvido => record.total_devolvido,
            MetricKey::TotalLiquido => record.total_liquido,
            MetricKey::TotalVendabl => record.total_vendabl,
            MetricKey::TotalLiquidobl => record.total_liquidobl,
        }
    }
}

/// Colunas pelas quais a tabela diária pode ser ordenada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColumn {
    Data,
    Metric(MetricKey),
}

impl SeriesColumn {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "data" => Some(SeriesColumn::Data),
            other => MetricKey::from_key(other).map(SeriesColumn::Metric),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

// 4. Linha da API externa de resumo:
// { "titulo": "Total Notas", "002": 100, "003": 200, ..., "total_operacao": 300 }
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSalesMetric {
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub titulo: String,

    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub total_operacao: Decimal,

    // Os valores por loja chegam como campos soltos, chaveados pelo código da loja
    #[serde(flatten)]
    pub lojas: BTreeMap<String, Value>,
}

impl ApiSalesMetric {
    /// Valor de uma loja; ausente ou inválido vale zero.
    pub fn store_value(&self, store_id: &str) -> Decimal {
        self.lojas
            .get(store_id)
            .map(deserializers::value_to_decimal)
            .unwrap_or_default()
    }
}
