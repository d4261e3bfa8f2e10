use crate::db::service::DatabaseService;
use crate::types::entrada::NewEntrada;
use crate::types::error::AppError;
use chrono::Utc;
use entity::entrada::{ActiveModel as EntradaActive, Column, Entity as Entrada, Model as EntradaModel};
use log::info;
use sea_orm::{EntityTrait, QueryOrder, Set, TransactionTrait};

impl DatabaseService {
    /// Inserts a whole batch inside one transaction. Any failure rolls the
    /// entire batch back; readers never see a partial write.
    pub async fn insert_entradas(&self, batch: Vec<NewEntrada>) -> Result<u64, AppError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await?;

        let mut inserted: u64 = 0;
        for row in batch {
            Entrada::insert(EntradaActive {
                cod_item: Set(row.cod_item),
                qtde: Set(row.qtde),
                validade: Set(row.validade),
                user: Set(row.user),
                telefone: Set(row.telefone),
                loja: Set(row.loja),
                preco_unitario: Set(row.preco_unitario),
                atualizacao: Set(now),
                ..Default::default()
            })
            .exec(&txn)
            .await?;
            inserted += 1;
        }

        txn.commit().await?;
        info!("Inserted batch of {} entradas", inserted);
        Ok(inserted)
    }

    /// All entries, newest first.
    pub async fn list_entradas(&self) -> Result<Vec<EntradaModel>, AppError> {
        Ok(Entrada::find()
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?)
    }
}
