// src/common/i18n.rs

use std::collections::HashMap;

/// Idioma usado quando o cliente pede algo que não temos.
pub const FALLBACK_LANG: &str = "pt";

const PT: &[(&str, &str)] = &[
    ("remote_fetch_failed", "Erro ao carregar dados da API"),
    ("invalid_fields", "Um ou mais campos são inválidos."),
    ("invalid_date", "Data inválida: '{0}'. Use o formato AAAA-MM-DD."),
    ("unknown_store", "Loja '{0}' não encontrada."),
    ("unknown_metric", "Métrica '{0}' não reconhecida."),
    ("unknown_sort_column", "Não é possível ordenar pela coluna '{0}'."),
    ("unknown_sort_direction", "Direção de ordenação '{0}' inválida. Use asc ou desc."),
    ("range_too_long", "O período não pode passar de {0} dias."),
    ("consolidated_view", "Visão Consolidada"),
    ("no_data", "Nenhum dado encontrado."),
];

const EN: &[(&str, &str)] = &[
    ("remote_fetch_failed", "Failed to load data from the API"),
    ("invalid_fields", "One or more fields are invalid."),
    ("invalid_date", "Invalid date: '{0}'. Use the YYYY-MM-DD format."),
    ("unknown_store", "Store '{0}' not found."),
    ("unknown_metric", "Metric '{0}' is not recognized."),
    ("unknown_sort_column", "Cannot sort by column '{0}'."),
    ("unknown_sort_direction", "Invalid sort direction '{0}'. Use asc or desc."),
    ("range_too_long", "The period cannot exceed {0} days."),
    ("consolidated_view", "Consolidated View"),
    ("no_data", "No data found."),
];

/// Catálogo de mensagens traduzidas, indexado por idioma e chave.
#[derive(Debug, Clone)]
pub struct I18nStore {
    default_lang: String,
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl I18nStore {
    pub fn new(default_lang: &str) -> Self {
        let mut messages = HashMap::new();
        messages.insert("pt", PT.iter().copied().collect());
        messages.insert("en", EN.iter().copied().collect());

        let default_lang = if messages.contains_key(default_lang) {
            default_lang.to_string()
        } else {
            tracing::warn!("Idioma padrão '{}' não suportado, usando '{}'", default_lang, FALLBACK_LANG);
            FALLBACK_LANG.to_string()
        };

        Self { default_lang, messages }
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    // Idioma pedido -> idioma padrão -> a própria chave
    pub fn translate(&self, lang: &str, key: &str) -> String {
        [lang, self.default_lang.as_str()]
            .iter()
            .find_map(|l| self.messages.get(l).and_then(|m| m.get(key)))
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// Igual a `translate`, substituindo `{0}`, `{1}`... pelos argumentos.
    pub fn translate_with(&self, lang: &str, key: &str, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(self.translate(lang, key), |msg, (i, arg)| {
                msg.replace(&format!("{{{}}}", i), arg)
            })
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new(FALLBACK_LANG)
    }
}
