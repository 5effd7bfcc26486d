use crate::domain::user::User;
use crate::dto::api::UsersQuery;
use crate::pipeline::{GridPage, QueryPipeline};
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};
use crate::token::decode_query_state;

/// Returns the page of users described by the request's query token.
///
/// The token is decoded and validated before the repository is touched.
pub fn fetch_users<R>(repo: &R, params: UsersQuery) -> ServiceResult<GridPage<User>>
where
    R: UserReader + ?Sized,
{
    let token = params.query.unwrap_or_default();
    let state = decode_query_state(&token)?;
    let pipeline = QueryPipeline::new(&state)?;

    let users = repo.list_users().map_err(ServiceError::from)?;

    Ok(pipeline.run(users))
}
