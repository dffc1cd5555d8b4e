// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Extrator de idioma a partir do Accept-Language.
// Vazio = sem preferência; o I18nStore cai no idioma padrão configurado.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale(pub String);

impl Locale {
    /// "pt-BR,pt;q=0.9,en;q=0.8" -> "pt"
    pub fn from_header(header_str: &str) -> Option<Self> {
        accept_language::parse(header_str)
            .first()
            .map(|tag| tag.split('-').next().unwrap_or(tag).to_lowercase())
            .filter(|lang| !lang.is_empty())
            .map(Locale)
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(Locale::from_header)
            .unwrap_or_default();

        Ok(locale)
    }
}
