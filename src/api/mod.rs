//! Wire representations for writes.
//!
//! Read shapes are the `Serialize` impls on `database::models`; the types here
//! are the request bodies, their field constraints, and how a partial update
//! is merged over a stored record.

pub mod certificate;
pub mod institution;
pub mod profile;
pub mod project;
pub mod token;

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

pub use certificate::CertificateBody;
pub use institution::{InlineCertificateBody, InstitutionBody};
pub use profile::ProfileBody;
pub use project::ProjectBody;

/// Field path → reasons, e.g. `certificates[0].name`
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A JSON body that can create or replace one entity.
pub trait WriteBody: DeserializeOwned + Send + 'static {
    type Record;
    type Create: Send;
    type Update: Send;

    /// Fill every field the request left out from `current` (PATCH).
    fn merge_over(self, current: &Self::Record) -> Self;

    /// Drop fields that are only honoured on create (PUT/PATCH).
    fn for_update(self) -> Self {
        self
    }

    fn check(&self) -> Result<(), FieldErrors>;

    /// Only meaningful after a successful `check`.
    fn into_create(self) -> Self::Create;

    fn into_update(self) -> Self::Update;
}

/// Run the derived constraints and collect failures under `prefix`.
pub fn validate_into<T: Validate>(value: &T, prefix: &str, into: &mut FieldErrors) {
    if let Err(errors) = value.validate() {
        collect_errors(&errors, prefix, into);
    }
}

pub fn validate_fields<T: Validate>(value: &T) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    validate_into(value, "", &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_errors(errors: &ValidationErrors, prefix: &str, into: &mut FieldErrors) {
    for (field, list) in errors.field_errors() {
        let reasons = into.entry(format!("{}{}", prefix, field)).or_default();
        for error in list.iter() {
            let reason = match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            };
            reasons.push(reason);
        }
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("This field may not be blank.")));
    }
    Ok(())
}

/// Absolute http(s)/ftp(s) URL with a host.
pub fn web_url(value: &str) -> Result<(), ValidationError> {
    let valid = match Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "ftp" | "ftps") && url.host_str().is_some(),
        Err(_) => false,
    };
    if !valid {
        return Err(ValidationError::new("url").with_message(Cow::Borrowed("Enter a valid URL.")));
    }
    Ok(())
}
