use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::UsersQuery;
use crate::repository::UserReader;
use crate::routes::error_response;
use crate::services::users::fetch_users;

/// Shared handle to the configured record source.
pub type UserSource = web::Data<dyn UserReader + Send + Sync>;

#[get("/v1/users")]
pub async fn api_v1_users(params: web::Query<UsersQuery>, repo: UserSource) -> impl Responder {
    match fetch_users(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(&err),
    }
}
