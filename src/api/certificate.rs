use serde::Deserialize;
use validator::Validate;

use super::{validate_fields, FieldErrors, WriteBody};
use crate::database::models::{Certificate, CertificateFields};

/// `timestamp` is not part of the body; a client-sent value is ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CertificateBody {
    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub certifying_institution: Option<i64>,

    /// Absent on update means "keep the current links".
    pub profiles: Option<Vec<i64>>,
}

impl WriteBody for CertificateBody {
    type Record = Certificate;
    type Create = CertificateFields;
    type Update = CertificateFields;

    fn merge_over(self, current: &Certificate) -> Self {
        Self {
            name: self.name.or_else(|| Some(current.name.clone())),
            certifying_institution: self.certifying_institution.or(Some(current.certifying_institution_id)),
            profiles: self.profiles,
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        validate_fields(self)
    }

    fn into_create(self) -> CertificateFields {
        CertificateFields {
            name: self.name.unwrap_or_default(),
            certifying_institution_id: self.certifying_institution.unwrap_or_default(),
            profiles: Some(self.profiles.unwrap_or_default()),
        }
    }

    fn into_update(self) -> CertificateFields {
        CertificateFields {
            name: self.name.unwrap_or_default(),
            certifying_institution_id: self.certifying_institution.unwrap_or_default(),
            profiles: self.profiles,
        }
    }
}
