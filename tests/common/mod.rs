#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use portfolio_api::auth::password::hash_password;
use portfolio_api::config::AppConfig;
use portfolio_api::database::models::{
    Certificate, CertificateFields, CertifyingInstitution, InstitutionFields, NewInstitution, Profile, ProfileFields,
    Project, ProjectFields,
};
use portfolio_api::database::{self, Store};
use portfolio_api::{router, AppState};

pub const USERNAME: &str = "superuser";
pub const PASSWORD: &str = "lookathowgoodandbigisthepass";
pub const FAKE_URL: &str = "http://myfakeurl.com";

/// The router served on an ephemeral port, backed by its own in-memory database
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    pub store: Store,
}

/// Rows every test starts with
pub struct Seed {
    pub profile: Profile,
    pub project: Project,
    pub institution: CertifyingInstitution,
    pub certificate: Certificate,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let config = AppConfig::ephemeral();
        let store = database::connect(&config.database).await?;
        store.migrate().await?;

        let state = AppState::new(store.clone(), &config)?;
        let app = router(state, &config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            store,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request without credentials
    pub fn anon(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Request carrying `Authorization: Bearer <access>`
    pub async fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.access_token().await?;
        Ok(self.anon(method, path).bearer_auth(token))
    }

    pub async fn tokens(&self) -> Result<Value> {
        let res = self
            .anon(Method::POST, "/token/")
            .json(&serde_json::json!({ "username": USERNAME, "password": PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status().is_success(), "token request failed: {}", res.status());
        Ok(res.json().await?)
    }

    pub async fn access_token(&self) -> Result<String> {
        let tokens = self.tokens().await?;
        tokens["access"]
            .as_str()
            .map(str::to_string)
            .context("token response has no access field")
    }

    pub async fn seed_user(&self) -> Result<()> {
        self.store.insert_user(USERNAME, &hash_password(PASSWORD), true).await?;
        Ok(())
    }

    pub async fn seed_profile(&self) -> Result<Profile> {
        Ok(self
            .store
            .insert_profile(ProfileFields {
                name: "Profile 1".to_string(),
                github: FAKE_URL.to_string(),
                linkedin: FAKE_URL.to_string(),
                bio: "Bio do profile 1".to_string(),
            })
            .await?)
    }

    pub async fn seed_project(&self, profile: &Profile) -> Result<Project> {
        Ok(self
            .store
            .insert_project(ProjectFields {
                name: "Projeto 1".to_string(),
                description: "Descrição do projeto 1".to_string(),
                github_url: FAKE_URL.to_string(),
                keyword: "keyword1".to_string(),
                key_skill: "key_skill1".to_string(),
                profile_id: profile.id,
            })
            .await?)
    }

    pub async fn seed_certificate(&self, profile: &Profile) -> Result<(Certificate, CertifyingInstitution)> {
        let institution = self
            .store
            .insert_institution(NewInstitution {
                fields: InstitutionFields {
                    name: "Certifying Institution 1".to_string(),
                    url: FAKE_URL.to_string(),
                },
                certificates: Vec::new(),
            })
            .await?;

        let certificate = self
            .store
            .insert_certificate(CertificateFields {
                name: "Certificate 1".to_string(),
                certifying_institution_id: institution.id,
                profiles: Some(vec![profile.id]),
            })
            .await?;

        let institution = self.store.get_institution(institution.id).await?;
        Ok((certificate, institution))
    }

    /// superuser + profile + project + institution with one certificate linked to the profile
    pub async fn seed_all(&self) -> Result<Seed> {
        self.seed_user().await?;
        let profile = self.seed_profile().await?;
        let project = self.seed_project(&profile).await?;
        let (certificate, institution) = self.seed_certificate(&profile).await?;
        Ok(Seed {
            profile,
            project,
            institution,
            certificate,
        })
    }

    pub async fn profile_count(&self) -> Result<usize> {
        Ok(self.store.list_profiles().await?.len())
    }

    pub async fn project_count(&self) -> Result<usize> {
        Ok(self.store.list_projects().await?.len())
    }

    pub async fn institution_count(&self) -> Result<usize> {
        Ok(self.store.list_institutions().await?.len())
    }

    pub async fn certificate_count(&self) -> Result<usize> {
        Ok(self.store.list_certificates().await?.len())
    }
}

/// Sorted top-level keys of a JSON object
pub fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}
