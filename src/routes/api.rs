use actix_web::{HttpResponse, Responder, get, web};
use validator::Validate;

use crate::dto::api::{ErrorBody, MemberSearchParams};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::repository::errors::RepositoryError;
use crate::routes::error_response;
use crate::services::member as member_service;
use crate::services::{ServiceError, ServiceResult};

/// Runs a blocking service call on the actix thread pool.
async fn run_blocking<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.map_err(|e| {
        log::error!("Blocking task failed: {e}");
        ServiceError::Repository(RepositoryError::Unexpected(e.to_string()))
    })?
}

fn respond<T: serde::Serialize>(result: ServiceResult<T>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => error_response(err),
    }
}

fn invalid_params(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody::new(message))
}

#[get("/v1/members")]
pub async fn search_members_v1(
    params: web::Query<MemberSearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let condition = params.condition();
    let repo = repo.into_inner();

    respond(run_blocking(move || member_service::search_members(repo.as_ref(), &condition)).await)
}

async fn search_page(
    params: MemberSearchParams,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    optimized: bool,
) -> HttpResponse {
    if let Err(err) = params.validate() {
        return invalid_params(err.to_string());
    }
    let request = match params.page_request(config.default_page_size, config.max_page_size) {
        Ok(request) => request,
        Err(message) => return invalid_params(message),
    };

    let condition = params.condition();
    let repo = repo.into_inner();

    respond(
        run_blocking(move || {
            if optimized {
                member_service::search_members_page_optimized(repo.as_ref(), &condition, request)
            } else {
                member_service::search_members_page(repo.as_ref(), &condition, request)
            }
        })
        .await,
    )
}

#[get("/v2/members")]
pub async fn search_members_v2(
    params: web::Query<MemberSearchParams>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    search_page(params.into_inner(), repo, config, false).await
}

#[get("/v3/members")]
pub async fn search_members_v3(
    params: web::Query<MemberSearchParams>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    search_page(params.into_inner(), repo, config, true).await
}

#[get("/v1/teams/stats")]
pub async fn team_stats_v1(
    params: web::Query<MemberSearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let condition = params.condition();
    let repo = repo.into_inner();

    respond(run_blocking(move || member_service::team_stats(repo.as_ref(), &condition)).await)
}
