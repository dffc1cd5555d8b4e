// src/data/mock_sales_repo.rs

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    common::date_utils::DateRange,
    data::StoreCatalog,
    models::sales::DailySalesRecord,
};

/// Gera os dados diários por loja. Não há banco: os valores são recalculados
/// a cada consulta e são sempre os mesmos para o mesmo (dia, loja).
#[derive(Clone)]
pub struct MockSalesRepository {
    catalog: Arc<StoreCatalog>,
}

impl MockSalesRepository {
    pub fn new(catalog: Arc<StoreCatalog>) -> Self {
        Self { catalog }
    }

    /// Um registro por dia × loja, na ordem do catálogo dentro de cada dia.
    pub fn generate(&self, range: &DateRange) -> Vec<DailySalesRecord> {
        let stores = self.catalog.all();
        let mut data = Vec::with_capacity(range.len_days() * stores.len());

        for date in range.days() {
            for (index, store) in stores.iter().enumerate() {
                data.push(build_record(date, &store.id, index));
            }
        }

        data
    }
}

/// frac(sin(seed) * 10000), sempre em [0, 1).
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

// Semente = ano + mês + dia + posição da loja no catálogo
fn seed_for(date: NaiveDate, store_index: usize) -> f64 {
    (date.year() + date.month() as i32 + date.day() as i32 + store_index as i32) as f64
}

// Fração em [0, 1) com 6 casas, sem passar f64 direto para Decimal
fn fraction(seed: f64) -> Decimal {
    let scaled = (seeded_random(seed) * 1_000_000.0).floor() as i64;
    Decimal::new(scaled.clamp(0, 999_999), 6)
}

fn cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::ToZero)
}

fn build_record(date: NaiveDate, store_id: &str, store_index: usize) -> DailySalesRecord {
    let seed = seed_for(date, store_index);

    // 10k a 60k
    let total_notas = cents(Decimal::from(10_000) + fraction(seed) * Decimal::from(50_000));
    // 2% a 7%
    let total_cancelados =
        cents(total_notas * (Decimal::new(2, 2) + fraction(seed + 1.0) * Decimal::new(5, 2)));
    // 1% a 4%
    let total_devolvido =
        cents(total_notas * (Decimal::new(1, 2) + fraction(seed + 2.0) * Decimal::new(3, 2)));
    let total_liquido = total_notas - total_cancelados - total_devolvido;

    // BL: 30% a 50% do total
    let total_vendabl =
        cents(total_notas * (Decimal::new(3, 1) + fraction(seed + 3.0) * Decimal::new(2, 1)));
    let total_canceladosbl = cents(total_vendabl * Decimal::new(3, 2));
    let total_liquidobl = total_vendabl - total_canceladosbl;

    DailySalesRecord {
        data: date,
        loja: store_id.to_string(),
        total_notas,
        total_cancelados,
        total_devolvido,
        total_liquido,
        total_vendabl,
        total_canceladosbl,
        total_liquidobl,
    }
}
