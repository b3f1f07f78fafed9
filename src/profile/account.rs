use super::validate::optional;
use crate::error::{PracticeError, PracticeResult};
use crate::user::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_BIO_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// Personal details shown on the profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
    pub bio: Option<String>,
    pub picture_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<NaiveDate>,
    pub bio: Option<String>,
    pub picture_ref: Option<String>,
}

impl UserProfile {
    pub fn empty(user: UserId) -> Self {
        Self {
            user,
            first_name: None,
            last_name: None,
            email: None,
            gender: None,
            dob: None,
            bio: None,
            picture_ref: None,
        }
    }

    /// Apply an edit; the picture is only replaced when a new one is given
    pub fn apply(mut self, form: ProfileForm) -> PracticeResult<Self> {
        let bio = optional(form.bio);
        if bio.as_ref().is_some_and(|b| b.chars().count() > MAX_BIO_CHARS) {
            return Err(PracticeError::invalid_input(format!(
                "bio must be at most {} characters",
                MAX_BIO_CHARS
            )));
        }

        self.first_name = optional(form.first_name);
        self.last_name = optional(form.last_name);
        self.email = optional(form.email);
        self.gender = form.gender;
        self.dob = form.dob;
        self.bio = bio;
        if let Some(picture) = optional(form.picture_ref) {
            self.picture_ref = Some(picture);
        }

        Ok(self)
    }
}
