//! Shared wiring for the HTTP integration suites.
//!
//! Builds the full handler stack over in-memory stores seeded from the
//! bundled fixture, with the clock pinned to 2023-06-15.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use serde_json::Value;

use business_backend::Trace;
use business_backend::domain::{SchedulesService, UsersService};
use business_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use business_backend::inbound::http::configure;
use business_backend::inbound::http::state::HttpState;
use business_backend::outbound::memory::{InMemoryScheduleRepository, InMemoryUserRepository};
use business_backend::test_support::FixedClock;

/// Day the pinned clock reports.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 15).expect("valid date")
}

/// HTTP state over freshly seeded in-memory stores.
pub async fn seeded_state() -> web::Data<HttpState> {
    let users = Arc::new(InMemoryUserRepository::default());
    let schedules = Arc::new(InMemoryScheduleRepository::default());
    let settings = ExampleDataSettings {
        enabled: true,
        path: None,
    };
    seed_example_data_on_startup(&settings, users.clone(), schedules.clone())
        .await
        .expect("fixture seeds");
    let clock = FixedClock::at_noon(today()).expect("local noon exists");
    web::Data::new(HttpState::from_services(
        Arc::new(UsersService::new(users)),
        Arc::new(SchedulesService::new(schedules, Arc::new(clock))),
    ))
}

/// Decoded response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

/// Send one request through the full application stack.
pub async fn send(state: &web::Data<HttpState>, request: actix_test::TestRequest) -> Reply {
    let app = actix_test::init_service(
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .configure(configure),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    Reply {
        status,
        location,
        body,
    }
}
