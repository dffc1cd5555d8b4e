use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::i18n::I18nStore;
use crate::middleware::i18n::Locale;

// Nosso tipo de erro de domínio. As mensagens aqui são para o log;
// o que vai para o cliente passa pelo `I18nStore`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Data inválida: {0}")]
    InvalidDate(String),

    #[error("Loja desconhecida: {0}")]
    UnknownStore(String),

    #[error("Métrica desconhecida: {0}")]
    UnknownMetric(String),

    #[error("Coluna de ordenação desconhecida: {0}")]
    UnknownSortColumn(String),

    #[error("Direção de ordenação desconhecida: {0}")]
    UnknownSortDirection(String),

    #[error("Período de {0} dias acima do limite de {1}")]
    RangeTooLong(usize, usize),

    // Falhas da API externa de resumo (todas viram RemoteFetchError para o painel)
    #[error("Falha de transporte na API de resumo: {0}")]
    RemoteTransport(#[from] reqwest::Error),

    #[error("API de resumo respondeu com status {0}")]
    RemoteStatus(u16),

    #[error("Resposta inválida da API de resumo: {0}")]
    RemoteDecode(String),
}

impl AppError {
    /// `true` para qualquer falha na busca do resumo remoto.
    pub fn is_remote_fetch(&self) -> bool {
        matches!(
            self,
            AppError::RemoteTransport(_) | AppError::RemoteStatus(_) | AppError::RemoteDecode(_)
        )
    }

    /// Chave da mensagem no catálogo de traduções.
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "invalid_fields",
            AppError::InvalidDate(_) => "invalid_date",
            AppError::UnknownStore(_) => "unknown_store",
            AppError::UnknownMetric(_) => "unknown_metric",
            AppError::UnknownSortColumn(_) => "unknown_sort_column",
            AppError::UnknownSortDirection(_) => "unknown_sort_direction",
            AppError::RangeTooLong(..) => "range_too_long",
            AppError::RemoteTransport(_) | AppError::RemoteStatus(_) | AppError::RemoteDecode(_) => {
                "remote_fetch_failed"
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidDate(_)
            | AppError::UnknownStore(_)
            | AppError::UnknownMetric(_)
            | AppError::UnknownSortColumn(_)
            | AppError::UnknownSortDirection(_)
            | AppError::RangeTooLong(..) => StatusCode::BAD_REQUEST,
            AppError::RemoteTransport(_) | AppError::RemoteStatus(_) | AppError::RemoteDecode(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Converte o erro de domínio na resposta HTTP, já traduzida para o idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale, i18n_store: &I18nStore) -> ApiError {
        let status = self.status_code();

        let message = match self {
            AppError::ValidationError(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .into_keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort_unstable();
                format!(
                    "{} ({})",
                    i18n_store.translate(&locale.0, self.message_key()),
                    fields.join(", ")
                )
            }
            AppError::InvalidDate(arg)
            | AppError::UnknownStore(arg)
            | AppError::UnknownMetric(arg)
            | AppError::UnknownSortColumn(arg)
            | AppError::UnknownSortDirection(arg) => {
                i18n_store.translate_with(&locale.0, self.message_key(), &[arg.as_str()])
            }
            AppError::RangeTooLong(_, max_days) => {
                i18n_store.translate_with(&locale.0, self.message_key(), &[max_days.to_string().as_str()])
            }
            e => {
                if status.is_server_error() {
                    tracing::error!("Erro Interno do Servidor: {}", e);
                }
                i18n_store.translate(&locale.0, self.message_key())
            }
        };

        ApiError { status, message }
    }
}

// O erro que efetivamente sai para o cliente
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
