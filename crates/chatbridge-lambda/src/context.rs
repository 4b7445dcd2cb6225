use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// The invoked function ARN of the current Lambda invocation, if any.
///
/// `lambda_http` stores the invocation context in request extensions.
/// Outside Lambda the extension is absent and this is `None`.
#[derive(Debug, Clone)]
pub struct ContextHint(pub Option<String>);

impl<S> FromRequestParts<S> for ContextHint
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let arn = parts
            .extensions
            .get::<lambda_http::Context>()
            .map(|ctx| ctx.invoked_function_arn.clone())
            .filter(|arn| !arn.is_empty());
        Ok(ContextHint(arn))
    }
}
