use serde::Deserialize;
use validator::Validate;

use super::{validate_fields, FieldErrors, WriteBody};
use crate::database::models::{Profile, ProfileFields};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProfileBody {
    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = "crate::api::web_url"))]
    pub github: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = "crate::api::web_url"))]
    pub linkedin: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = "crate::api::not_blank"))]
    pub bio: Option<String>,
}

impl WriteBody for ProfileBody {
    type Record = Profile;
    type Create = ProfileFields;
    type Update = ProfileFields;

    fn merge_over(self, current: &Profile) -> Self {
        Self {
            name: self.name.or_else(|| Some(current.name.clone())),
            github: self.github.or_else(|| Some(current.github.clone())),
            linkedin: self.linkedin.or_else(|| Some(current.linkedin.clone())),
            bio: self.bio.or_else(|| Some(current.bio.clone())),
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        validate_fields(self)
    }

    fn into_create(self) -> ProfileFields {
        ProfileFields {
            name: self.name.unwrap_or_default(),
            github: self.github.unwrap_or_default(),
            linkedin: self.linkedin.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
        }
    }

    fn into_update(self) -> ProfileFields {
        self.into_create()
    }
}
