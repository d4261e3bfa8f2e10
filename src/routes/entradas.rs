use crate::db::service::DatabaseService;
use crate::types::entrada::{EntradaJson, IntakeRequest, MessageRes, NewEntrada};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::normalize::{
    normalize_preco, normalize_quantidade, normalize_telefone, normalize_validade,
};
use actix_web::{get, post, web};
use log::error;
use std::sync::Arc;

#[post("/adicionar_item")]
async fn adicionar_item(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<IntakeRequest>,
) -> ApiResult<MessageRes> {
    let body = body.into_inner();

    if body.produtos.is_empty() {
        return Err(AppError::Validation(
            "a lista de produtos está vazia".to_string(),
        ));
    }

    let telefone = normalize_telefone(body.telefone.as_deref());

    let mut batch = Vec::with_capacity(body.produtos.len());
    for produto in &body.produtos {
        if produto.codigo.trim().is_empty() {
            return Err(AppError::Validation(
                "produto sem código".to_string(),
            ));
        }
        batch.push(NewEntrada {
            cod_item: produto.codigo.trim().to_string(),
            qtde: normalize_quantidade(produto.quantidade.as_deref()),
            validade: normalize_validade(produto.validade.as_deref()),
            user: body.nome.clone(),
            telefone,
            loja: body.loja.clone(),
            preco_unitario: normalize_preco(produto.preco_unitario.as_deref()),
        });
    }

    if let Err(e) = db.insert_entradas(batch).await {
        error!("Failed to persist batch: {}", e);
        return Err(e);
    }

    Ok(ApiResponse::Created(MessageRes {
        message: "Itens adicionados com sucesso!".to_string(),
    }))
}

#[get("/itens")]
async fn listar_itens(db: web::Data<Arc<DatabaseService>>) -> ApiResult<Vec<EntradaJson>> {
    let rows = db.list_entradas().await?;
    Ok(ApiResponse::Ok(
        rows.into_iter().map(EntradaJson::from).collect(),
    ))
}
