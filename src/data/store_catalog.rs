// src/data/store_catalog.rs

use crate::models::sales::StoreOption;

// Lojas atendidas pela API de resumo (código, nome)
const STORES: [(&str, &str); 6] = [
    ("002", "Loja Centro"),
    ("003", "Loja Shopping"),
    ("004", "Loja Norte"),
    ("005", "Loja Sul"),
    ("006", "Loja Express"),
    ("007", "Loja Matriz"),
];

/// Catálogo fixo de lojas. Não muda em tempo de execução.
#[derive(Debug, Clone)]
pub struct StoreCatalog {
    stores: Vec<StoreOption>,
}

impl StoreCatalog {
    pub fn new(stores: Vec<StoreOption>) -> Self {
        Self { stores }
    }

    pub fn all(&self) -> &[StoreOption] {
        &self.stores
    }

    pub fn find(&self, id: &str) -> Option<&StoreOption> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Nome de exibição; lojas fora do catálogo aparecem pelo código.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.find(id).map(|s| s.name.as_str()).unwrap_or(id)
    }
}

impl Default for StoreCatalog {
    fn default() -> Self {
        Self::new(
            STORES
                .iter()
                .map(|(id, name)| StoreOption {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        )
    }
}
