mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use common::{TestServer, FAKE_URL};

#[tokio::test]
async fn deleting_profile_keeps_linked_certificates() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .authed(Method::DELETE, &format!("/profiles/{}/", seed.profile.id))
        .await?
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    assert_eq!(server.profile_count().await?, 0);
    assert_eq!(server.project_count().await?, 0);
    assert_eq!(server.certificate_count().await?, 1);

    let certificate = server.store.get_certificate(seed.certificate.id).await?;
    assert!(certificate.profiles.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_institution_detaches_profiles() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    // a second institution whose certificate must survive
    let other = server
        .authed(Method::POST, "/certifying-institutions/")
        .await?
        .json(&json!({
            "name": "Certifying Institution 2",
            "url": FAKE_URL,
            "certificates": [{ "name": "Certificate 2", "profiles": [seed.profile.id] }],
        }))
        .send()
        .await?
        .json::<Value>()
        .await?;

    let res = server
        .authed(Method::DELETE, &format!("/certifying-institutions/{}/", seed.institution.id))
        .await?
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let remaining = server.store.list_certificates().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(json!(remaining[0].id), other["certificates"][0]["id"]);

    let html = server
        .anon(Method::GET, &format!("/profiles/{}/", seed.profile.id))
        .send()
        .await?
        .text()
        .await?;
    assert!(!html.contains("Certificate 1"));
    assert!(html.contains("Certificate 2"));
    Ok(())
}

#[tokio::test]
async fn deleting_certificate_keeps_profile() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .authed(Method::DELETE, &format!("/certificates/{}/", seed.certificate.id))
        .await?
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    assert_eq!(server.store.get_profile(seed.profile.id).await?, seed.profile);
    let detail = server.store.profile_detail(seed.profile.id).await?;
    assert!(detail.certificates.is_empty());
    assert_eq!(detail.projects.len(), 1);
    Ok(())
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    server
        .authed(Method::DELETE, &format!("/projects/{}/", seed.project.id))
        .await?
        .send()
        .await?;

    let res = server
        .authed(Method::POST, "/projects/")
        .await?
        .json(&json!({
            "name": "Projeto 2",
            "description": "Descrição do projeto 2",
            "github_url": FAKE_URL,
            "keyword": "keyword2",
            "key_skill": "key_skill2",
            "profile": seed.profile.id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?["id"], seed.project.id + 1);
    Ok(())
}
