use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/adicionar_item`. Optional fields default so that a
/// missing key behaves the same as an empty value.
#[derive(Deserialize, Debug)]
pub struct IntakeRequest {
    pub loja: String,
    pub nome: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub produtos: Vec<ProdutoInput>,
}

#[derive(Deserialize, Debug)]
pub struct ProdutoInput {
    #[serde(default)]
    pub codigo: String,
    #[serde(default)]
    pub quantidade: Option<String>,
    #[serde(default)]
    pub validade: Option<String>,
    #[serde(default)]
    pub preco_unitario: Option<String>,
}

/// One normalized row, ready to persist.
#[derive(Debug)]
pub struct NewEntrada {
    pub cod_item: String,
    pub qtde: Decimal,
    pub validade: Option<NaiveDate>,
    pub user: String,
    pub telefone: Option<i64>,
    pub loja: String,
    pub preco_unitario: Option<Decimal>,
}

#[derive(Serialize, Deserialize)]
pub struct MessageRes {
    pub message: String,
}

/// Transport-safe rendering of a stored entry: decimals as decimal strings,
/// dates as ISO-8601 text, everything else as its JSON-native type.
#[derive(Serialize, Deserialize, Debug)]
pub struct EntradaJson {
    pub id: i32,
    pub cod_item: String,
    pub qtde: String,
    pub validade: Option<String>,
    pub user: String,
    pub telefone: Option<i64>,
    pub loja: String,
    pub preco_unitario: Option<String>,
    pub atualizacao: String,
}

impl From<entity::entrada::Model> for EntradaJson {
    fn from(m: entity::entrada::Model) -> Self {
        EntradaJson {
            id: m.id,
            cod_item: m.cod_item,
            qtde: m.qtde.to_string(),
            validade: m.validade.map(|d| d.to_string()),
            user: m.user,
            telefone: m.telefone,
            loja: m.loja,
            preco_unitario: m.preco_unitario.map(|p| p.to_string()),
            atualizacao: m.atualizacao.to_rfc3339(),
        }
    }
}
