use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entradas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entradas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Entradas::CodItem)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Entradas::Qtde)
                            .decimal_len(12, 3)
                            .not_null()
                    )
                    .col(ColumnDef::new(Entradas::Validade).date())
                    .col(
                        ColumnDef::new(Entradas::User)
                            .string()
                            .not_null()
                    )
                    .col(ColumnDef::new(Entradas::Telefone).big_integer())
                    .col(
                        ColumnDef::new(Entradas::Loja)
                            .string()
                            .not_null()
                    )
                    .col(ColumnDef::new(Entradas::PrecoUnitario).decimal_len(12, 2))
                    .col(
                        ColumnDef::new(Entradas::Atualizacao)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp())
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Entradas::Table)
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Entradas {
    Table,
    Id,
    CodItem,
    Qtde,
    Validade,
    User,
    Telefone,
    Loja,
    PrecoUnitario,
    Atualizacao,
}
