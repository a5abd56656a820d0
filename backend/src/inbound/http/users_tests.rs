//! Handler tests for the users endpoints, driven through mocked ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    MockSchedulesCommand, MockSchedulesQuery, MockUsersCommand, MockUsersQuery,
};
use crate::domain::{EntityKind, Error, UserDraft, Violation};
use crate::inbound::http::configure;

fn user(id: i64, company_name: &str, user_name: &str) -> User {
    User::new(
        UserId::new(id),
        UserDraft {
            company_name: company_name.to_owned(),
            user_name: user_name.to_owned(),
        },
    )
}

fn state(query: MockUsersQuery, command: MockUsersCommand) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(query),
        Arc::new(command),
        Arc::new(MockSchedulesQuery::new()),
        Arc::new(MockSchedulesCommand::new()),
    ))
}

async fn call(
    state: web::Data<HttpState>,
    request: actix_test::TestRequest,
) -> (StatusCode, Option<String>, Value) {
    let app = actix_test::init_service(App::new().app_data(state).configure(configure)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, location, value)
}

#[rstest]
#[actix_web::test]
async fn list_wraps_users_in_results() {
    let mut query = MockUsersQuery::new();
    query
        .expect_list_users()
        .times(1)
        .return_once(|| Ok(vec![user(1, "xxx会社", "瀬川1"), user(2, "△△△会社", "瀬川2")]));

    let (status, _, body) = call(
        state(query, MockUsersCommand::new()),
        actix_test::TestRequest::get().uri("/users"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"results": [
            {"id": 1, "companyname": "xxx会社", "username": "瀬川1"},
            {"id": 2, "companyname": "△△△会社", "username": "瀬川2"}
        ]})
    );
}

#[rstest]
#[actix_web::test]
async fn get_reports_missing_user() {
    let mut query = MockUsersQuery::new();
    query
        .expect_get_user()
        .withf(|id| id.get() == 99)
        .return_once(|id| Err(Error::not_found(EntityKind::User, id.get())));

    let (status, _, body) = call(
        state(query, MockUsersCommand::new()),
        actix_test::TestRequest::get().uri("/users/99"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"title": "Resource Not Found", "detail": "UserEntity (id = 99) is not found."})
    );
}

#[rstest]
#[actix_web::test]
async fn non_numeric_id_is_a_bad_request() {
    let (status, _, body) = call(
        state(MockUsersQuery::new(), MockUsersCommand::new()),
        actix_test::TestRequest::get().uri("/users/abc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.get("title"), Some(&json!("Bad Request")));
    assert!(body.get("invalidParams").is_none());
}

#[rstest]
#[actix_web::test]
async fn create_returns_location_of_new_user() {
    let mut command = MockUsersCommand::new();
    command
        .expect_create_user()
        .withf(|form| {
            form.company_name.as_deref() == Some("yyy会社")
                && form.user_name.as_deref() == Some("瀬川4")
        })
        .return_once(|_| Ok(user(4, "yyy会社", "瀬川4")));

    let (status, location, body) = call(
        state(MockUsersQuery::new(), command),
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"companyname": "yyy会社", "username": "瀬川4"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("http://localhost:8080/users/4"));
    assert_eq!(body, json!({"message": USER_CREATED}));
}

#[rstest]
#[actix_web::test]
async fn create_surfaces_validation_failures() {
    let mut command = MockUsersCommand::new();
    command.expect_create_user().return_once(|_| {
        Err(Error::validation(vec![Violation::new(
            "companyname",
            "must not be blank",
        )]))
    });

    let (status, location, body) = call(
        state(MockUsersQuery::new(), command),
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({"username": "瀬川4"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(location.is_none());
    assert_eq!(
        body.get("invalidParams"),
        Some(&json!([{"name": "companyname", "reason": "must not be blank"}]))
    );
}

#[rstest]
#[actix_web::test]
async fn update_ignores_echoed_id() {
    let mut command = MockUsersCommand::new();
    command
        .expect_update_user()
        .withf(|id, form| id.get() == 3 && form.user_name.as_deref() == Some("瀬川3"))
        .return_once(|id, _| Ok(user(id.get(), "○○○会社", "瀬川3")));

    let (status, _, body) = call(
        state(MockUsersQuery::new(), command),
        actix_test::TestRequest::patch().uri("/users/3").set_json(
            json!({"id": 3, "companyname": "○○○会社", "username": "瀬川3"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": USER_UPDATED}));
}

#[rstest]
#[actix_web::test]
async fn delete_returns_no_content() {
    let mut command = MockUsersCommand::new();
    command
        .expect_delete_user()
        .withf(|id| id.get() == 1)
        .times(1)
        .return_once(|_| Ok(()));

    let (status, _, body) = call(
        state(MockUsersQuery::new(), command),
        actix_test::TestRequest::delete().uri("/users/1"),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let (status, _, body) = call(
        state(MockUsersQuery::new(), MockUsersCommand::new()),
        actix_test::TestRequest::post()
            .uri("/users")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"companyname\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"title": "Bad Request", "detail": crate::inbound::http::error::BAD_REQUEST_DETAIL})
    );
}

#[rstest]
#[actix_web::test]
async fn unreachable_store_hides_driver_message() {
    use crate::domain::ports::{MockScheduleRepository, MockUserRepository, UserRepositoryError};
    use crate::domain::{SchedulesService, UsersService};

    let mut repo = MockUserRepository::new();
    repo.expect_list_all().times(1).return_once(|| {
        Err(UserRepositoryError::connection(
            "password authentication failed for user \"app\"",
        ))
    });
    let state = web::Data::new(HttpState::from_services(
        Arc::new(UsersService::new(Arc::new(repo))),
        Arc::new(SchedulesService::new(
            Arc::new(MockScheduleRepository::new()),
            Arc::new(mockable::DefaultClock),
        )),
    ));

    let (status, _, body) = call(state, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"title": "Service Unavailable", "detail": "Service temporarily unavailable"})
    );
}
