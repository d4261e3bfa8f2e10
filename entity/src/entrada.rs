use sea_orm::entity::prelude::*;

/// One submitted intake row. The table is append-only: rows are written by
/// the intake endpoint and only ever read back, never updated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, serde::Serialize, serde::Deserialize)]
#[sea_orm(table_name = "entradas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cod_item: String,
    pub qtde: Decimal,
    pub validade: Option<Date>,
    pub user: String,
    pub telefone: Option<i64>,
    pub loja: String,
    pub preco_unitario: Option<Decimal>,
    pub atualizacao: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
