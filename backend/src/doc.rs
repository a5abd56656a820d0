//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (users,
//! schedules, health) together with the request, response and problem-detail
//! schemas. The generated document backs Swagger UI in debug builds and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::{InvalidParam, ProblemDetails};
use crate::inbound::http::responses::MessageResponse;
use crate::inbound::http::schedules::{ScheduleRequest, ScheduleResponse, SchedulesResponse};
use crate::inbound::http::users::{UserRequest, UserResponse, UsersResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Business backend API",
        description = "Users and work schedules over HTTP with problem-detail errors."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::schedules::list_schedules,
        crate::inbound::http::schedules::get_schedule,
        crate::inbound::http::schedules::create_schedule,
        crate::inbound::http::schedules::update_schedule,
        crate::inbound::http::schedules::delete_schedule,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRequest,
        UserResponse,
        UsersResponse,
        ScheduleRequest,
        ScheduleResponse,
        SchedulesResponse,
        MessageResponse,
        ProblemDetails,
        InvalidParam
    )),
    tags(
        (name = "users", description = "Registered users"),
        (name = "schedules", description = "Work schedule entries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI paths and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[rstest]
    #[case("UserResponse", &["companyname", "id", "username"])]
    #[case(
        "ScheduleResponse",
        &["id", "numberofpeople", "place", "userid", "workcontent", "workingdate"]
    )]
    #[case("ProblemDetails", &["detail", "invalidParams", "title"])]
    fn schemas_use_wire_field_names(#[case] name: &str, #[case] expected: &[&str]) {
        let mut fields = schema_fields(name);
        fields.sort();
        assert_eq!(fields, expected);
    }

    #[rstest]
    #[case("/users")]
    #[case("/users/{id}")]
    #[case("/schedules")]
    #[case("/schedules/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
