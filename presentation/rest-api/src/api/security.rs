use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use business::domain::auth::repository::AuthRepository;
use business::domain::shared::value_objects::Caller;

/// API-key authentication: callers send `X-API-Key`, resolved against the
/// auth repository injected as request data by the server setup.
/// Unknown and expired keys fail the check and poem answers 401.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-API-Key",
    key_in = "header",
    checker = "api_key_checker"
)]
pub struct ApiKeyAuth(pub Caller);

async fn api_key_checker(req: &Request, api_key: ApiKey) -> Option<Caller> {
    let repository = req.data::<Arc<dyn AuthRepository>>()?;
    repository.find_caller_by_api_key(&api_key.key).await.ok()
}
