//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users {"companyname":"yyy会社","username":"瀬川4"}
//! PATCH  /users/{id}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, http::header, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserForm, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ProblemDetails;
use crate::inbound::http::responses::{MessageResponse, resource_location};
use crate::inbound::http::state::HttpState;

/// Confirmation returned after registering a user.
pub const USER_CREATED: &str = "ユーザーを登録しました";
/// Confirmation returned after updating a user.
pub const USER_UPDATED: &str = "ユーザーを更新しました";

const GET_USER_ROUTE: &str = "get_user";

/// Request body for creating or updating a user.
///
/// Unknown keys, such as an `id` echoed back by clients, are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    #[serde(rename = "companyname")]
    #[schema(example = "yyy会社")]
    pub company_name: Option<String>,
    #[serde(rename = "username")]
    #[schema(example = "瀬川4")]
    pub user_name: Option<String>,
}

impl From<UserRequest> for UserForm {
    fn from(value: UserRequest) -> Self {
        Self {
            company_name: value.company_name,
            user_name: value.user_name,
        }
    }
}

/// User representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    #[serde(rename = "companyname")]
    pub company_name: String,
    #[serde(rename = "username")]
    pub user_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            company_name: user.company_name().to_owned(),
            user_name: user.user_name().to_owned(),
        }
    }
}

/// Envelope for the user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub results: Vec<UserResponse>,
}

/// List every user ordered by id.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 503, description = "Service unavailable", body = ProblemDetails)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(UsersResponse {
        results: users.iter().map(UserResponse::from).collect(),
    }))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Malformed id", body = ProblemDetails),
        (status = 404, description = "Unknown user", body = ProblemDetails)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}", name = "get_user")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.get_user(UserId::new(path.into_inner())).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// Register a user and point at it through the `Location` header.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (
            status = 201,
            description = "User registered",
            headers(("Location" = String, description = "URL of the new user")),
            body = MessageResponse
        ),
        (status = 400, description = "Invalid request", body = ProblemDetails)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    let location = resource_location(&req, GET_USER_ROUTE, user.id().get())?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(MessageResponse::new(USER_CREATED)))
}

/// Replace the fields of an existing user.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ProblemDetails),
        (status = 404, description = "Unknown user", body = ProblemDetails)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .users_command
        .update_user(UserId::new(path.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(MessageResponse::new(USER_UPDATED)))
}

/// Remove a user permanently. Their schedules are left untouched.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Unknown user", body = ProblemDetails)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .users_command
        .delete_user(UserId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
