use serde::Deserialize;
use validator::Validate;

use super::{validate_fields, FieldErrors, WriteBody};
use crate::database::models::{Project, ProjectFields};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProjectBody {
    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 50, message = "Ensure this field has no more than 50 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 500, message = "Ensure this field has no more than 500 characters.")
    )]
    pub description: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = "crate::api::web_url"))]
    pub github_url: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 50, message = "Ensure this field has no more than 50 characters.")
    )]
    pub keyword: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 50, message = "Ensure this field has no more than 50 characters.")
    )]
    pub key_skill: Option<String>,

    /// Owning profile id
    #[validate(required(message = "This field is required."))]
    pub profile: Option<i64>,
}

impl WriteBody for ProjectBody {
    type Record = Project;
    type Create = ProjectFields;
    type Update = ProjectFields;

    fn merge_over(self, current: &Project) -> Self {
        Self {
            name: self.name.or_else(|| Some(current.name.clone())),
            description: self.description.or_else(|| Some(current.description.clone())),
            github_url: self.github_url.or_else(|| Some(current.github_url.clone())),
            keyword: self.keyword.or_else(|| Some(current.keyword.clone())),
            key_skill: self.key_skill.or_else(|| Some(current.key_skill.clone())),
            profile: self.profile.or(Some(current.profile_id)),
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        validate_fields(self)
    }

    fn into_create(self) -> ProjectFields {
        ProjectFields {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            github_url: self.github_url.unwrap_or_default(),
            keyword: self.keyword.unwrap_or_default(),
            key_skill: self.key_skill.unwrap_or_default(),
            profile_id: self.profile.unwrap_or_default(),
        }
    }

    fn into_update(self) -> ProjectFields {
        self.into_create()
    }
}
