//! Schedules API handlers.
//!
//! ```text
//! GET    /schedules
//! GET    /schedules/{id}
//! POST   /schedules {"userid":1,"workingdate":"2023-12-30","workcontent":"墨出し","numberofpeople":"3"}
//! PATCH  /schedules/{id}
//! DELETE /schedules/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, http::header, patch, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Schedule, ScheduleForm, ScheduleId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ProblemDetails;
use crate::inbound::http::lenient::optional_integer;
use crate::inbound::http::responses::{MessageResponse, resource_location};
use crate::inbound::http::state::HttpState;

/// Confirmation returned after planning a schedule.
pub const SCHEDULE_CREATED: &str = "作業予定を登録しました";
/// Confirmation returned after updating a schedule.
pub const SCHEDULE_UPDATED: &str = "作業予定を更新しました";

const GET_SCHEDULE_ROUTE: &str = "get_schedule";

/// Request body for creating or updating a schedule.
///
/// `userid` and `numberofpeople` accept JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ScheduleRequest {
    #[serde(rename = "userid", default, deserialize_with = "optional_integer")]
    #[schema(value_type = Option<i64>, example = 1)]
    pub user_id: Option<i64>,
    #[serde(rename = "workingdate")]
    #[schema(example = "2023-12-30")]
    pub working_date: Option<NaiveDate>,
    #[schema(example = "4階トイレ")]
    pub place: Option<String>,
    #[serde(rename = "workcontent")]
    #[schema(example = "墨出し")]
    pub work_content: Option<String>,
    #[serde(
        rename = "numberofpeople",
        default,
        deserialize_with = "optional_integer"
    )]
    #[schema(value_type = Option<i64>, example = 3)]
    pub number_of_people: Option<i64>,
}

impl From<ScheduleRequest> for ScheduleForm {
    fn from(value: ScheduleRequest) -> Self {
        Self {
            user_id: value.user_id,
            working_date: value.working_date,
            place: value.place,
            work_content: value.work_content,
            number_of_people: value.number_of_people,
        }
    }
}

/// Schedule representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleResponse {
    pub id: i64,
    #[serde(rename = "userid")]
    pub user_id: i64,
    #[serde(rename = "workingdate")]
    #[schema(example = "2022-12-07")]
    pub working_date: NaiveDate,
    pub place: Option<String>,
    #[serde(rename = "workcontent")]
    pub work_content: String,
    #[serde(rename = "numberofpeople")]
    pub number_of_people: i32,
}

impl From<&Schedule> for ScheduleResponse {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id().get(),
            user_id: schedule.user_id().get(),
            working_date: schedule.working_date(),
            place: schedule.place().map(str::to_owned),
            work_content: schedule.work_content().to_owned(),
            number_of_people: schedule.number_of_people(),
        }
    }
}

/// Envelope for the schedule listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchedulesResponse {
    pub results: Vec<ScheduleResponse>,
}

/// List every schedule ordered by id.
#[utoipa::path(
    get,
    path = "/schedules",
    responses(
        (status = 200, description = "Schedules", body = SchedulesResponse),
        (status = 503, description = "Service unavailable", body = ProblemDetails)
    ),
    tags = ["schedules"],
    operation_id = "listSchedules"
)]
#[get("/schedules")]
pub async fn list_schedules(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<SchedulesResponse>> {
    let schedules = state.schedules.list_schedules().await?;
    Ok(web::Json(SchedulesResponse {
        results: schedules.iter().map(ScheduleResponse::from).collect(),
    }))
}

/// Fetch one schedule.
#[utoipa::path(
    get,
    path = "/schedules/{id}",
    params(("id" = i64, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule", body = ScheduleResponse),
        (status = 400, description = "Malformed id", body = ProblemDetails),
        (status = 404, description = "Unknown schedule", body = ProblemDetails)
    ),
    tags = ["schedules"],
    operation_id = "getSchedule"
)]
#[get("/schedules/{id}", name = "get_schedule")]
pub async fn get_schedule(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ScheduleResponse>> {
    let schedule = state
        .schedules
        .get_schedule(ScheduleId::new(path.into_inner()))
        .await?;
    Ok(web::Json(ScheduleResponse::from(&schedule)))
}

/// Plan a schedule entry dated today or later.
#[utoipa::path(
    post,
    path = "/schedules",
    request_body = ScheduleRequest,
    responses(
        (
            status = 201,
            description = "Schedule planned",
            headers(("Location" = String, description = "URL of the new schedule")),
            body = MessageResponse
        ),
        (status = 400, description = "Invalid request", body = ProblemDetails)
    ),
    tags = ["schedules"],
    operation_id = "createSchedule"
)]
#[post("/schedules")]
pub async fn create_schedule(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<ScheduleRequest>,
) -> ApiResult<HttpResponse> {
    let schedule = state
        .schedules_command
        .create_schedule(payload.into_inner().into())
        .await?;
    let location = resource_location(&req, GET_SCHEDULE_ROUTE, schedule.id().get())?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(MessageResponse::new(SCHEDULE_CREATED)))
}

/// Replace the fields of an existing schedule.
#[utoipa::path(
    patch,
    path = "/schedules/{id}",
    params(("id" = i64, Path, description = "Schedule id")),
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Schedule updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ProblemDetails),
        (status = 404, description = "Unknown schedule", body = ProblemDetails)
    ),
    tags = ["schedules"],
    operation_id = "updateSchedule"
)]
#[patch("/schedules/{id}")]
pub async fn update_schedule(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ScheduleRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .schedules_command
        .update_schedule(ScheduleId::new(path.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(MessageResponse::new(SCHEDULE_UPDATED)))
}

/// Remove a schedule permanently.
#[utoipa::path(
    delete,
    path = "/schedules/{id}",
    params(("id" = i64, Path, description = "Schedule id")),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 404, description = "Unknown schedule", body = ProblemDetails)
    ),
    tags = ["schedules"],
    operation_id = "deleteSchedule"
)]
#[delete("/schedules/{id}")]
pub async fn delete_schedule(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .schedules_command
        .delete_schedule(ScheduleId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
