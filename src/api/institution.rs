use serde::Deserialize;
use validator::Validate;

use super::{validate_into, FieldErrors, WriteBody};
use crate::database::models::{CertifyingInstitution, InlineCertificate, InstitutionFields, NewInstitution};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct InstitutionBody {
    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = "crate::api::web_url"))]
    pub url: Option<String>,

    /// Certificates created together with the institution. Ignored on update.
    pub certificates: Option<Vec<InlineCertificateBody>>,
}

/// `{name}` (plus optional `profiles`); the institution comes from the parent.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct InlineCertificateBody {
    #[validate(
        required(message = "This field is required."),
        custom(function = "crate::api::not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,

    #[serde(default)]
    pub profiles: Vec<i64>,
}

impl WriteBody for InstitutionBody {
    type Record = CertifyingInstitution;
    type Create = NewInstitution;
    type Update = InstitutionFields;

    fn merge_over(self, current: &CertifyingInstitution) -> Self {
        Self {
            name: self.name.or_else(|| Some(current.name.clone())),
            url: self.url.or_else(|| Some(current.url.clone())),
            certificates: None,
        }
    }

    fn for_update(self) -> Self {
        Self {
            certificates: None,
            ..self
        }
    }

    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        validate_into(self, "", &mut errors);
        for (index, certificate) in self.certificates.iter().flatten().enumerate() {
            validate_into(certificate, &format!("certificates[{}].", index), &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn into_create(self) -> NewInstitution {
        let certificates = self
            .certificates
            .unwrap_or_default()
            .into_iter()
            .map(|certificate| InlineCertificate {
                name: certificate.name.unwrap_or_default(),
                profiles: certificate.profiles,
            })
            .collect();

        NewInstitution {
            fields: InstitutionFields {
                name: self.name.unwrap_or_default(),
                url: self.url.unwrap_or_default(),
            },
            certificates,
        }
    }

    fn into_update(self) -> InstitutionFields {
        InstitutionFields {
            name: self.name.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_errors_carry_their_index() {
        let body: InstitutionBody = serde_json::from_value(json!({
            "name": "Certifying Institution 2",
            "url": "http://myfakeurl.com",
            "certificates": [{"name": "Certificate 2"}, {"name": ""}]
        }))
        .unwrap();
        let errors = body.check().unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["certificates[1].name"]);
    }

    #[test]
    fn inline_certificates_become_part_of_create() {
        let body: InstitutionBody = serde_json::from_value(json!({
            "name": "Certifying Institution 2",
            "url": "http://myfakeurl.com",
            "certificates": [{"name": "Certificate 2", "profiles": [1]}]
        }))
        .unwrap();
        assert!(body.check().is_ok());
        let new = body.into_create();
        assert_eq!(new.certificates.len(), 1);
        assert_eq!(new.certificates[0].name, "Certificate 2");
        assert_eq!(new.certificates[0].profiles, vec![1]);
    }

    #[test]
    fn inline_certificates_are_not_checked_on_update() {
        let body: InstitutionBody = serde_json::from_value(json!({
            "name": "Certifying Institution 2",
            "url": "http://myfakeurl.com",
            "certificates": [{"name": ""}]
        }))
        .unwrap();
        assert!(body.check().is_err());

        let body: InstitutionBody = serde_json::from_value(json!({
            "name": "Certifying Institution 2",
            "url": "http://myfakeurl.com",
            "certificates": [{"name": ""}]
        }))
        .unwrap();
        let body = body.for_update();
        assert!(body.certificates.is_none());
        assert!(body.check().is_ok());
    }
}
