//! Error conversion glue between the query layer and the service layer.
//!
//! The domain, codec and pipeline modules must not depend on service error
//! types, so the mapping onto the two caller-facing failures lives here.

use crate::domain::types::TypeConstraintError;
use crate::pipeline::PipelineError;
use crate::services::ServiceError;
use crate::token::TokenError;

impl From<TokenError> for ServiceError {
    fn from(val: TokenError) -> Self {
        ServiceError::MalformedQueryState(val.to_string())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidPagination(val.to_string())
    }
}

impl From<PipelineError> for ServiceError {
    fn from(val: PipelineError) -> Self {
        match val {
            PipelineError::MalformedQueryState(reason) => ServiceError::MalformedQueryState(reason),
            PipelineError::InvalidPagination(err) => err.into(),
        }
    }
}
