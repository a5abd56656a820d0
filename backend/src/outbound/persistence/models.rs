//! Diesel row models for the users and schedules tables.
//!
//! These types stay internal to the persistence adapters; repositories
//! convert them to domain entities before returning.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{Schedule, ScheduleDraft, ScheduleId, User, UserDraft, UserId};

use super::schema::{schedules, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub companyname: String,
    pub username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(
            UserId::new(row.id),
            UserDraft {
                company_name: row.companyname,
                user_name: row.username,
            },
        )
    }
}

/// Column values written on insert and update.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserValues<'a> {
    pub companyname: &'a str,
    pub username: &'a str,
}

impl<'a> UserValues<'a> {
    pub fn from_draft(draft: &'a UserDraft) -> Self {
        Self {
            companyname: draft.company_name.as_str(),
            username: draft.user_name.as_str(),
        }
    }

    pub fn from_user(user: &'a User) -> Self {
        Self {
            companyname: user.company_name(),
            username: user.user_name(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schedules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ScheduleRow {
    pub id: i64,
    pub userid: i64,
    pub workingdate: NaiveDate,
    pub place: Option<String>,
    pub workcontent: String,
    pub numberofpeople: i32,
}

impl From<ScheduleRow> for Schedule {
    fn from(row: ScheduleRow) -> Self {
        Self::new(
            ScheduleId::new(row.id),
            ScheduleDraft {
                user_id: UserId::new(row.userid),
                working_date: row.workingdate,
                place: row.place,
                work_content: row.workcontent,
                number_of_people: row.numberofpeople,
            },
        )
    }
}

/// Column values written on insert and update.
///
/// An absent place clears the column on update.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = schedules)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ScheduleValues<'a> {
    pub userid: i64,
    pub workingdate: NaiveDate,
    pub place: Option<&'a str>,
    pub workcontent: &'a str,
    pub numberofpeople: i32,
}

impl<'a> ScheduleValues<'a> {
    pub fn from_draft(draft: &'a ScheduleDraft) -> Self {
        Self {
            userid: draft.user_id.get(),
            workingdate: draft.working_date,
            place: draft.place.as_deref(),
            workcontent: draft.work_content.as_str(),
            numberofpeople: draft.number_of_people,
        }
    }

    pub fn from_schedule(schedule: &'a Schedule) -> Self {
        Self {
            userid: schedule.user_id().get(),
            workingdate: schedule.working_date(),
            place: schedule.place(),
            workcontent: schedule.work_content(),
            numberofpeople: schedule.number_of_people(),
        }
    }
}
