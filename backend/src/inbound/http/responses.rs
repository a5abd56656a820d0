//! Response bodies and headers shared by the resource handlers.

use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;

/// Confirmation body returned by create and update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "ユーザーを登録しました")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Absolute URL of a newly created resource, built from the named GET route.
pub(crate) fn resource_location(
    req: &HttpRequest,
    route: &str,
    id: i64,
) -> Result<String, Error> {
    req.url_for(route, [id.to_string()])
        .map(|url| url.to_string())
        .map_err(|err| Error::internal(format!("failed to build location for {route}: {err}")))
}
