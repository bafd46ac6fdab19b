use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of the applicant account created by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of interest categories offered by the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOfWork {
    Technology,
    Business,
    Healthcare,
    Engineering,
    Arts,
    Science,
}

impl FieldOfWork {
    pub const ALL: [FieldOfWork; 6] = [
        FieldOfWork::Technology,
        FieldOfWork::Business,
        FieldOfWork::Healthcare,
        FieldOfWork::Engineering,
        FieldOfWork::Arts,
        FieldOfWork::Science,
    ];

    /// Value submitted by the form and stored in the `field_of_work` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldOfWork::Technology => "technology",
            FieldOfWork::Business => "business",
            FieldOfWork::Healthcare => "healthcare",
            FieldOfWork::Engineering => "engineering",
            FieldOfWork::Arts => "arts",
            FieldOfWork::Science => "science",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldOfWork::Technology => "Technology",
            FieldOfWork::Business => "Business",
            FieldOfWork::Healthcare => "Healthcare",
            FieldOfWork::Engineering => "Engineering",
            FieldOfWork::Arts => "Arts & Humanities",
            FieldOfWork::Science => "Science & Research",
        }
    }

    /// Exact match against `as_str`; the form only ever submits these values.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == raw)
    }
}

/// Names of the inputs making up the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    FullName,
    Email,
    Phone,
    HighSchool,
    University,
    FieldOfWork,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::FullName,
        DraftField::Email,
        DraftField::Phone,
        DraftField::HighSchool,
        DraftField::University,
        DraftField::FieldOfWork,
    ];

    /// The `name` attribute used by the HTML input.
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::FullName => "fullName",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::HighSchool => "highSchool",
            DraftField::University => "university",
            DraftField::FieldOfWork => "fieldOfWork",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::University)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = DraftError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| DraftError::UnknownField(name.to_string()))
    }
}

/// Unsaved snapshot of the application form as the applicant is filling it in.
///
/// Values are kept exactly as typed; `validate` is the only place that interprets them.
/// A JSON `null` reads as an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationDraft {
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub high_school: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub university: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub field_of_work: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApplicationDraft {
    /// Replace one field, leaving every other field untouched.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Email => self.email = value,
            DraftField::Phone => self.phone = value,
            DraftField::HighSchool => self.high_school = value,
            DraftField::University => self.university = value,
            DraftField::FieldOfWork => self.field_of_work = value,
        }
    }

    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::HighSchool => &self.high_school,
            DraftField::University => &self.university,
            DraftField::FieldOfWork => &self.field_of_work,
        }
    }

    /// Re-check the constraints the form inputs declare (`required`, `type=email`, the select
    /// options) before anything leaves the process.
    ///
    /// Every value is trimmed first, so whitespace-only input counts as missing and nothing is
    /// stored with surrounding whitespace.
    pub fn validate(&self) -> Result<ApplicantDetails, DraftError> {
        if let Some(missing) = DraftField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.value(*field).trim().is_empty())
        {
            return Err(DraftError::MissingField(missing));
        }

        let email = self.email.trim();
        if !is_email_shaped(email) {
            return Err(DraftError::MalformedEmail);
        }

        let field_of_work = self.field_of_work.trim();
        let field_of_work = FieldOfWork::parse(field_of_work)
            .ok_or_else(|| DraftError::UnknownFieldOfWork(field_of_work.to_string()))?;

        let university = Some(self.university.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(ApplicantDetails {
            full_name: self.full_name.trim().to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            high_school: self.high_school.trim().to_string(),
            university,
            field_of_work,
        })
    }
}

fn is_email_shaped(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// A draft that passed validation. `university` is `None` when the applicant left it blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub high_school: String,
    pub university: Option<String>,
    pub field_of_work: FieldOfWork,
}

/// Row written to the `applications` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRow {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub high_school: String,
    pub university: Option<String>,
    pub field_of_work: FieldOfWork,
    pub user_id: AccountId,
}

impl ApplicationRow {
    pub fn new(details: ApplicantDetails, user_id: AccountId) -> Self {
        let ApplicantDetails {
            full_name,
            email,
            phone,
            high_school,
            university,
            field_of_work,
        } = details;

        Self {
            full_name,
            email,
            phone,
            high_school,
            university,
            field_of_work,
            user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(DraftField),
    #[error("email address is not well formed")]
    MalformedEmail,
    #[error("'{0}' is not an offered field of interest")]
    UnknownFieldOfWork(String),
    #[error("'{0}' is not an application form field")]
    UnknownField(String),
}
