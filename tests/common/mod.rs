use entradas_api::db::service::DatabaseService;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    _dir: TempDir,
}

impl TestContext {
    /// Fresh file-backed SQLite database per test, the same engine the
    /// development fallback uses. Migrations run inside `new`.
    pub async fn new() -> TestContext {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("entradas.db").display()
        );

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize database"),
        );

        TestContext { db, _dir: dir }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    #[allow(dead_code)]
    pub fn sample_request() -> Value {
        json!({
            "loja": "Loja Centro",
            "nome": "Maria Silva",
            "telefone": "(11) 98765-4321",
            "produtos": [
                {
                    "codigo": "7891000100103",
                    "quantidade": "1,5",
                    "validade": "31/12/2025",
                    "preco_unitario": "2,5"
                },
                {
                    "codigo": "7891000053508",
                    "quantidade": "3",
                    "validade": "",
                    "preco_unitario": ""
                }
            ]
        })
    }

    #[allow(dead_code)]
    pub fn single_product_request(codigo: &str) -> Value {
        json!({
            "loja": "Loja Centro",
            "nome": "Maria Silva",
            "telefone": "",
            "produtos": [
                { "codigo": codigo, "quantidade": "1", "validade": "", "preco_unitario": "" }
            ]
        })
    }
}
