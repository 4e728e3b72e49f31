pub mod certificate;
pub mod institution;
pub mod profile;
pub mod project;
pub mod user;

pub use certificate::{Certificate, CertificateFields, CertificateRow, CertificateSummary};
pub use institution::{CertifyingInstitution, InlineCertificate, InstitutionFields, InstitutionRow, NestedCertificate, NewInstitution};
pub use profile::{Profile, ProfileDetail, ProfileFields};
pub use project::{Project, ProjectFields};
pub use user::User;
