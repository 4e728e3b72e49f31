//! Who may call what: one row per (resource, verb).

use axum::http::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Profiles,
    Projects,
    CertifyingInstitutions,
    Certificates,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Profiles,
        ResourceKind::Projects,
        ResourceKind::CertifyingInstitutions,
        ResourceKind::Certificates,
    ];

    /// URL segment, e.g. `certifying-institutions`
    pub fn segment(self) -> &'static str {
        match self {
            ResourceKind::Profiles => "profiles",
            ResourceKind::Projects => "projects",
            ResourceKind::CertifyingInstitutions => "certifying-institutions",
            ResourceKind::Certificates => "certificates",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Post, Verb::Put, Verb::Patch, Verb::Delete];

    /// HEAD rides on GET; methods outside the table map to `None`.
    pub fn from_method(method: &Method) -> Option<Self> {
        match *method {
            Method::GET | Method::HEAD => Some(Verb::Get),
            Method::POST => Some(Verb::Post),
            Method::PUT => Some(Verb::Put),
            Method::PATCH => Some(Verb::Patch),
            Method::DELETE => Some(Verb::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

use Access::{Authenticated, Public};
use ResourceKind::{CertifyingInstitutions, Certificates, Profiles, Projects};

pub const POLICY: [(ResourceKind, Verb, Access); 20] = [
    (Profiles, Verb::Get, Public),
    (Profiles, Verb::Post, Authenticated),
    (Profiles, Verb::Put, Authenticated),
    (Profiles, Verb::Patch, Authenticated),
    (Profiles, Verb::Delete, Authenticated),
    (Projects, Verb::Get, Authenticated),
    (Projects, Verb::Post, Authenticated),
    (Projects, Verb::Put, Authenticated),
    (Projects, Verb::Patch, Authenticated),
    (Projects, Verb::Delete, Authenticated),
    (CertifyingInstitutions, Verb::Get, Authenticated),
    (CertifyingInstitutions, Verb::Post, Authenticated),
    (CertifyingInstitutions, Verb::Put, Authenticated),
    (CertifyingInstitutions, Verb::Patch, Authenticated),
    (CertifyingInstitutions, Verb::Delete, Authenticated),
    (Certificates, Verb::Get, Authenticated),
    (Certificates, Verb::Post, Authenticated),
    (Certificates, Verb::Put, Authenticated),
    (Certificates, Verb::Patch, Authenticated),
    (Certificates, Verb::Delete, Authenticated),
];

/// Anything not listed requires a credential.
pub fn access(resource: ResourceKind, verb: Option<Verb>) -> Access {
    let Some(verb) = verb else {
        return Authenticated;
    };
    POLICY
        .iter()
        .find(|(r, v, _)| *r == resource && *v == verb)
        .map(|(_, _, access)| *access)
        .unwrap_or(Authenticated)
}
