//! User data model and registration form rules.

use std::fmt;

use super::Error;
use super::validation::{Constraint, Violations};

/// Minimum length of user name fields.
pub const USER_TEXT_MIN: usize = 1;
/// Maximum length of user name fields.
pub const USER_TEXT_MAX: usize = 256;

const USER_TEXT_RULES: [Constraint; 2] = [
    Constraint::NotBlank,
    Constraint::Size {
        min: USER_TEXT_MIN,
        max: USER_TEXT_MAX,
    },
];

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
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

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values of a user, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub company_name: String,
    pub user_name: String,
}

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    company_name: String,
    user_name: String,
}

impl User {
    /// Combine a store-assigned id with persisted field values.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            company_name,
            user_name,
        } = draft;
        Self {
            id,
            company_name,
            user_name,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Company the user belongs to.
    #[must_use]
    pub fn company_name(&self) -> &str {
        self.company_name.as_str()
    }

    /// Name of the user.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user_name.as_str()
    }
}

/// Client-submitted user data awaiting validation.
///
/// # Examples
/// ```
/// use business_backend::domain::UserForm;
///
/// let form = UserForm {
///     company_name: None,
///     user_name: Some("瀬川".to_owned()),
/// };
/// let err = form.into_draft().expect_err("company name is required");
/// assert_eq!(err.violations()[0].field(), "companyname");
/// assert_eq!(err.violations()[0].reason(), "must not be blank");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub company_name: Option<String>,
    pub user_name: Option<String>,
}

impl UserForm {
    /// Wire name of the company field.
    pub const COMPANY_NAME: &'static str = "companyname";
    /// Wire name of the user name field.
    pub const USER_NAME: &'static str = "username";

    /// Collect every rule this form breaks.
    #[must_use]
    pub fn violations(&self) -> Violations {
        let mut violations = Violations::default();
        violations
            .check(
                Self::COMPANY_NAME,
                self.company_name.as_deref(),
                &USER_TEXT_RULES,
            )
            .check(Self::USER_NAME, self.user_name.as_deref(), &USER_TEXT_RULES);
        violations
    }

    /// Validate the form and convert it into persistable values.
    pub fn into_draft(self) -> Result<UserDraft, Error> {
        self.violations().into_result()?;
        match (self.company_name, self.user_name) {
            (Some(company_name), Some(user_name)) => Ok(UserDraft {
                company_name,
                user_name,
            }),
            _ => Err(Error::internal("validated user form lost a required field")),
        }
    }
}
