use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{get, post, put, web, FromRequest, HttpRequest, HttpResponse};

use crate::error::ApiError;
use crate::store::Bank;
use crate::structs::{
    CreateAccountRequest, DepositRequest, RenameAccountRequest, StatementQuery, WithdrawRequest,
};

/// Caller identity, taken from the `cpf` request header. A request without
/// the header gets the same answer as one naming an unknown customer.
pub struct Cpf(pub String);

impl FromRequest for Cpf {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let cpf = req
            .headers()
            .get("cpf")
            .and_then(|value| value.to_str().ok())
            .map(|value| Cpf(value.to_owned()));

        ready(cpf.ok_or(ApiError::CustomerNotFound))
    }
}

#[post("/account")]
async fn create_account(
    bank: web::Data<Bank>,
    body: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let statement = bank.create_account(body.cpf, body.name)?;

    Ok(HttpResponse::Ok().json(statement))
}

#[get("/statement")]
async fn get_statement(bank: web::Data<Bank>, cpf: Cpf) -> Result<HttpResponse, ApiError> {
    let statement = bank.statement(&cpf.0)?;

    Ok(HttpResponse::Ok().json(statement))
}

#[get("/statement;date")]
async fn get_statement_by_date(
    bank: web::Data<Bank>,
    cpf: Cpf,
    query: web::Query<StatementQuery>,
) -> Result<HttpResponse, ApiError> {
    let statement = bank.statement_by_date(&cpf.0, query.into_inner().date.as_deref())?;

    Ok(HttpResponse::Ok().json(statement))
}

#[post("/deposit")]
async fn deposit(
    bank: web::Data<Bank>,
    cpf: Cpf,
    body: web::Json<DepositRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let entry = bank.deposit(&cpf.0, body.description, body.amount)?;

    Ok(HttpResponse::Created().json(entry))
}

#[post("/withdraw")]
async fn withdraw(
    bank: web::Data<Bank>,
    cpf: Cpf,
    body: web::Json<WithdrawRequest>,
) -> Result<HttpResponse, ApiError> {
    let entry = bank.withdraw(&cpf.0, body.into_inner().amount)?;

    Ok(HttpResponse::Created().json(entry))
}

#[put("/account")]
async fn rename_account(
    bank: web::Data<Bank>,
    cpf: Cpf,
    body: web::Json<RenameAccountRequest>,
) -> Result<HttpResponse, ApiError> {
    let customer = bank.rename(&cpf.0, body.into_inner().name)?;

    Ok(HttpResponse::Ok().json(customer))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_account)
        .service(get_statement)
        .service(get_statement_by_date)
        .service(deposit)
        .service(withdraw)
        .service(rename_account);
}
