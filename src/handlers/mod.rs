pub mod crud;
pub mod profile_page;
pub mod resources;
pub mod system;
pub mod token;

pub use crud::Resource;
pub use resources::{CertifyingInstitutions, Certificates, Profiles, Projects};
