// src/common/date_utils.rs

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::error::AppError;

pub const ISO_DATE_FMT: &str = "%Y-%m-%d";

/// Intervalo de datas fechado (`inicio` e `fim` inclusos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub inicio: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2024-01-31")]
    pub fim: NaiveDate,
}

impl DateRange {
    pub fn new(inicio: NaiveDate, fim: NaiveDate) -> Self {
        Self { inicio, fim }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { inicio: day, fim: day }
    }

    pub fn is_inverted(&self) -> bool {
        self.inicio > self.fim
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        dates_in_range(self.inicio, self.fim)
    }

    pub fn len_days(&self) -> usize {
        if self.is_inverted() {
            0
        } else {
            (self.fim - self.inicio).num_days() as usize + 1
        }
    }

    /// Monta o intervalo a partir dos parâmetros da query; o que faltar vem de `default`.
    pub fn from_params(
        inicio: Option<&str>,
        fim: Option<&str>,
        default: DateRange,
    ) -> Result<Self, AppError> {
        let inicio = match inicio.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => parse_iso_date(s)?,
            None => default.inicio,
        };
        let fim = match fim.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => parse_iso_date(s)?,
            None => default.fim,
        };
        Ok(Self { inicio, fim })
    }

    /// Recusa intervalos com mais de `max_days` dias. Invertido conta como zero.
    pub fn ensure_max_days(&self, max_days: usize) -> Result<(), AppError> {
        let days = self.len_days();
        if days > max_days {
            return Err(AppError::RangeTooLong(days, max_days));
        }
        Ok(())
    }
}

/// Dias de `start` até `end`, inclusive, em ordem crescente.
/// Intervalo invertido não produz nada.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let first = (start <= end).then_some(start);
    first
        .into_iter()
        .flat_map(|s| s.iter_days())
        .take_while(move |day| *day <= end)
}

/// Versão materializada, em strings AAAA-MM-DD.
pub fn enumerate_dates(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    dates_in_range(start, end).map(to_iso).collect()
}

/// AAAA-MM-DD com ano de quatro dígitos (sem sinal, sem ano negativo).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, AppError> {
    let trimmed = value.trim();
    if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(AppError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FMT)
        .map_err(|_| AppError::InvalidDate(value.to_string()))
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FMT).to_string()
}

/// Data civil no fuso do próprio `DateTime`, sem passar por UTC.
pub fn local_date<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
    moment.date_naive()
}

pub fn today() -> NaiveDate {
    local_date(&Local::now())
}

// Semana começa na segunda; domingo é o 7º dia da semana anterior
pub fn start_of_week(today: NaiveDate) -> NaiveDate {
    let offset = today.weekday().num_days_from_monday() as u64;
    today.checked_sub_days(Days::new(offset)).unwrap_or(today)
}

pub fn start_of_month(today: NaiveDate) -> NaiveDate {
    today.with_day(1).unwrap_or(today)
}

/// Atalhos do seletor de período.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuickRange {
    Hoje,
    Semana,
    Mes,
}

impl QuickRange {
    pub const ALL: [QuickRange; 3] = [QuickRange::Hoje, QuickRange::Semana, QuickRange::Mes];

    pub fn label(&self) -> &'static str {
        match self {
            QuickRange::Hoje => "Hoje",
            QuickRange::Semana => "Semana",
            QuickRange::Mes => "Mês",
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let inicio = match self {
            QuickRange::Hoje => today,
            QuickRange::Semana => start_of_week(today),
            QuickRange::Mes => start_of_month(today),
        };
        DateRange::new(inicio, today)
    }

    /// O botão fica "ativo" quando o intervalo atual é exatamente o do atalho.
    pub fn is_active(&self, current: &DateRange, today: NaiveDate, hide_today: bool) -> bool {
        if hide_today && *self == QuickRange::Hoje {
            return false;
        }
        self.resolve(today) == *current
    }
}
