//! Work schedule data model and form rules.

use std::fmt;

use chrono::NaiveDate;

use super::Error;
use super::UserId;
use super::validation::{Constraint, Violations};

/// Maximum length of schedule text fields.
pub const SCHEDULE_TEXT_MAX: usize = 256;
/// Minimum crew size for a work entry.
pub const MIN_PEOPLE: i64 = 1;
/// Maximum crew size for a work entry.
pub const MAX_PEOPLE: i64 = 200;

const TEXT_SIZE: Constraint = Constraint::Size {
    min: 0,
    max: SCHEDULE_TEXT_MAX,
};

/// Store-assigned schedule identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleId(i64);

impl ScheduleId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ScheduleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values of a schedule entry, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    /// Owning user. Not checked against the users store.
    pub user_id: UserId,
    pub working_date: NaiveDate,
    pub place: Option<String>,
    pub work_content: String,
    pub number_of_people: i32,
}

/// A persisted work schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    id: ScheduleId,
    user_id: UserId,
    working_date: NaiveDate,
    place: Option<String>,
    work_content: String,
    number_of_people: i32,
}

impl Schedule {
    /// Combine a store-assigned id with persisted field values.
    #[must_use]
    pub fn new(id: ScheduleId, draft: ScheduleDraft) -> Self {
        let ScheduleDraft {
            user_id,
            working_date,
            place,
            work_content,
            number_of_people,
        } = draft;
        Self {
            id,
            user_id,
            working_date,
            place,
            work_content,
            number_of_people,
        }
    }

    #[must_use]
    pub fn id(&self) -> ScheduleId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn working_date(&self) -> NaiveDate {
        self.working_date
    }

    #[must_use]
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    #[must_use]
    pub fn work_content(&self) -> &str {
        self.work_content.as_str()
    }

    #[must_use]
    pub fn number_of_people(&self) -> i32 {
        self.number_of_people
    }
}

/// Client-submitted schedule data awaiting validation.
///
/// The working date rule depends on the current day, so validation takes
/// `today` explicitly.
///
/// # Examples
/// ```
/// use business_backend::domain::ScheduleForm;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2023, 6, 15).expect("valid date");
/// let form = ScheduleForm {
///     user_id: Some(1),
///     working_date: Some(today),
///     place: None,
///     work_content: Some("配線".to_owned()),
///     number_of_people: Some(201),
/// };
/// let err = form.into_draft(today).expect_err("crew too large");
/// assert_eq!(err.violations()[0].reason(), "must be less than or equal to 200");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub user_id: Option<i64>,
    pub working_date: Option<NaiveDate>,
    pub place: Option<String>,
    pub work_content: Option<String>,
    pub number_of_people: Option<i64>,
}

impl ScheduleForm {
    pub const USER_ID: &'static str = "userid";
    pub const WORKING_DATE: &'static str = "workingdate";
    pub const PLACE: &'static str = "place";
    pub const WORK_CONTENT: &'static str = "workcontent";
    pub const NUMBER_OF_PEOPLE: &'static str = "numberofpeople";

    /// Collect every rule this form breaks, judged against `today`.
    #[must_use]
    pub fn violations(&self, today: NaiveDate) -> Violations {
        let mut violations = Violations::default();
        violations
            .check(Self::USER_ID, self.user_id, &[Constraint::NotNull])
            .check(
                Self::WORKING_DATE,
                self.working_date,
                &[Constraint::NotNull, Constraint::FutureOrPresent { today }],
            )
            .check(Self::PLACE, self.place.as_deref(), &[TEXT_SIZE])
            .check(
                Self::WORK_CONTENT,
                self.work_content.as_deref(),
                &[Constraint::NotBlank, TEXT_SIZE],
            )
            .check(
                Self::NUMBER_OF_PEOPLE,
                self.number_of_people,
                &[
                    Constraint::NotNull,
                    Constraint::Min(MIN_PEOPLE),
                    Constraint::Max(MAX_PEOPLE),
                ],
            );
        violations
    }

    /// Validate the form and convert it into persistable values.
    pub fn into_draft(self, today: NaiveDate) -> Result<ScheduleDraft, Error> {
        self.violations(today).into_result()?;
        let Self {
            user_id: Some(user_id),
            working_date: Some(working_date),
            place,
            work_content: Some(work_content),
            number_of_people: Some(number_of_people),
        } = self
        else {
            return Err(Error::internal(
                "validated schedule form lost a required field",
            ));
        };
        let number_of_people = i32::try_from(number_of_people)
            .map_err(|_| Error::internal("validated crew size does not fit the store"))?;
        Ok(ScheduleDraft {
            user_id: UserId::new(user_id),
            working_date,
            place,
            work_content,
            number_of_people,
        })
    }
}
