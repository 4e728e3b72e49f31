use async_trait::async_trait;

use super::crud::Resource;
use crate::api::{CertificateBody, InstitutionBody, ProfileBody, ProjectBody};
use crate::database::models::{
    Certificate, CertificateFields, CertifyingInstitution, InstitutionFields, NewInstitution, Profile, ProfileFields,
    Project, ProjectFields,
};
use crate::database::{DatabaseError, Store};
use crate::middleware::ResourceKind;

pub struct Profiles;
pub struct Projects;
pub struct CertifyingInstitutions;
pub struct Certificates;

#[async_trait]
impl Resource for Profiles {
    const KIND: ResourceKind = ResourceKind::Profiles;
    type Record = Profile;
    type Body = ProfileBody;

    fn id(record: &Profile) -> i64 {
        record.id
    }

    async fn list(store: &Store) -> Result<Vec<Profile>, DatabaseError> {
        store.list_profiles().await
    }

    async fn get(store: &Store, id: i64) -> Result<Profile, DatabaseError> {
        store.get_profile(id).await
    }

    async fn create(store: &Store, data: ProfileFields) -> Result<Profile, DatabaseError> {
        store.insert_profile(data).await
    }

    async fn update(store: &Store, id: i64, data: ProfileFields) -> Result<Profile, DatabaseError> {
        store.update_profile(id, data).await
    }

    async fn delete(store: &Store, id: i64) -> Result<(), DatabaseError> {
        store.delete_profile(id).await
    }
}

#[async_trait]
impl Resource for Projects {
    const KIND: ResourceKind = ResourceKind::Projects;
    type Record = Project;
    type Body = ProjectBody;

    fn id(record: &Project) -> i64 {
        record.id
    }

    async fn list(store: &Store) -> Result<Vec<Project>, DatabaseError> {
        store.list_projects().await
    }

    async fn get(store: &Store, id: i64) -> Result<Project, DatabaseError> {
        store.get_project(id).await
    }

    async fn create(store: &Store, data: ProjectFields) -> Result<Project, DatabaseError> {
        store.insert_project(data).await
    }

    async fn update(store: &Store, id: i64, data: ProjectFields) -> Result<Project, DatabaseError> {
        store.update_project(id, data).await
    }

    async fn delete(store: &Store, id: i64) -> Result<(), DatabaseError> {
        store.delete_project(id).await
    }
}

#[async_trait]
impl Resource for CertifyingInstitutions {
    const KIND: ResourceKind = ResourceKind::CertifyingInstitutions;
    type Record = CertifyingInstitution;
    type Body = InstitutionBody;

    fn id(record: &CertifyingInstitution) -> i64 {
        record.id
    }

    async fn list(store: &Store) -> Result<Vec<CertifyingInstitution>, DatabaseError> {
        store.list_institutions().await
    }

    async fn get(store: &Store, id: i64) -> Result<CertifyingInstitution, DatabaseError> {
        store.get_institution(id).await
    }

    async fn create(store: &Store, data: NewInstitution) -> Result<CertifyingInstitution, DatabaseError> {
        store.insert_institution(data).await
    }

    async fn update(store: &Store, id: i64, data: InstitutionFields) -> Result<CertifyingInstitution, DatabaseError> {
        store.update_institution(id, data).await
    }

    async fn delete(store: &Store, id: i64) -> Result<(), DatabaseError> {
        store.delete_institution(id).await
    }
}

#[async_trait]
impl Resource for Certificates {
    const KIND: ResourceKind = ResourceKind::Certificates;
    type Record = Certificate;
    type Body = CertificateBody;

    fn id(record: &Certificate) -> i64 {
        record.id
    }

    async fn list(store: &Store) -> Result<Vec<Certificate>, DatabaseError> {
        store.list_certificates().await
    }

    async fn get(store: &Store, id: i64) -> Result<Certificate, DatabaseError> {
        store.get_certificate(id).await
    }

    async fn create(store: &Store, data: CertificateFields) -> Result<Certificate, DatabaseError> {
        store.insert_certificate(data).await
    }

    async fn update(store: &Store, id: i64, data: CertificateFields) -> Result<Certificate, DatabaseError> {
        store.update_certificate(id, data).await
    }

    async fn delete(store: &Store, id: i64) -> Result<(), DatabaseError> {
        store.delete_certificate(id).await
    }
}
