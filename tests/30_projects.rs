mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use common::TestServer;

fn project_2(profile: i64) -> Value {
    json!({
        "name": "Projeto 2",
        "description": "Descrição do projeto 2",
        "github_url": "http://myfakeurl2.com",
        "keyword": "keyword1",
        "key_skill": "key_skill1",
        "profile": profile,
    })
}

#[tokio::test]
async fn create_project() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .authed(Method::POST, "/projects/")
        .await?
        .json(&project_2(seed.profile.id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.json::<Value>().await?,
        json!({
            "id": seed.project.id + 1,
            "name": "Projeto 2",
            "description": "Descrição do projeto 2",
            "github_url": "http://myfakeurl2.com",
            "keyword": "keyword1",
            "key_skill": "key_skill1",
            "profile": seed.profile.id,
        })
    );
    assert_eq!(server.project_count().await?, 2);
    Ok(())
}

#[tokio::test]
async fn create_project_for_unknown_profile() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.seed_all().await?;

    let res = server
        .authed(Method::POST, "/projects/")
        .await?
        .json(&project_2(99))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["field_errors"]["profile"][0], "Invalid pk \"99\" - object does not exist.");
    assert_eq!(server.project_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn project_field_limits() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let mut body = project_2(seed.profile.id);
    body["keyword"] = json!("k".repeat(51));
    body["description"] = json!("d".repeat(501));

    let res = server.authed(Method::POST, "/projects/").await?.json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["field_errors"]["keyword"][0], "Ensure this field has no more than 50 characters.");
    assert_eq!(body["field_errors"]["description"][0], "Ensure this field has no more than 500 characters.");
    Ok(())
}

#[tokio::test]
async fn list_projects() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;
    let project = &seed.project;

    let res = server.authed(Method::GET, "/projects/").await?.send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!([{
            "id": project.id,
            "name": project.name,
            "description": project.description,
            "github_url": project.github_url,
            "keyword": project.keyword,
            "key_skill": project.key_skill,
            "profile": seed.profile.id,
        }])
    );
    Ok(())
}

#[tokio::test]
async fn retrieve_project() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;
    let project = &seed.project;

    let res = server
        .authed(Method::GET, &format!("/projects/{}/", project.id))
        .await?
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({
            "id": project.id,
            "name": project.name,
            "description": project.description,
            "github_url": project.github_url,
            "keyword": project.keyword,
            "key_skill": project.key_skill,
            "profile": seed.profile.id,
        })
    );
    Ok(())
}

#[tokio::test]
async fn retrieve_unknown_project() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.seed_all().await?;

    let res = server.authed(Method::GET, "/projects/99/").await?.send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = server.authed(Method::GET, "/projects/first/").await?.send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn patch_project() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;
    let project = &seed.project;

    let res = server
        .authed(Method::PATCH, &format!("/projects/{}/", project.id))
        .await?
        .json(&json!({
            "name": "Projeto 1 alterado",
            "description": "Descrição do projeto alterada",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({
            "id": project.id,
            "name": "Projeto 1 alterado",
            "description": "Descrição do projeto alterada",
            "github_url": project.github_url,
            "keyword": project.keyword,
            "key_skill": project.key_skill,
            "profile": seed.profile.id,
        })
    );

    assert_eq!(server.project_count().await?, 1);
    let stored = server.store.get_project(project.id).await?;
    assert_eq!(stored.name, "Projeto 1 alterado");
    assert_eq!(stored.description, "Descrição do projeto alterada");
    Ok(())
}

#[tokio::test]
async fn put_project() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .authed(Method::PUT, &format!("/projects/{}/", seed.project.id))
        .await?
        .json(&project_2(seed.profile.id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], seed.project.id);
    assert_eq!(body["name"], "Projeto 2");
    assert_eq!(body["github_url"], "http://myfakeurl2.com");
    Ok(())
}

#[tokio::test]
async fn put_unknown_project_is_not_found_before_validation() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.seed_all().await?;

    let res = server
        .authed(Method::PUT, "/projects/99/")
        .await?
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_project() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .authed(Method::DELETE, &format!("/projects/{}/", seed.project.id))
        .await?
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(server.project_count().await?, 0);
    assert_eq!(server.profile_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn create_project_without_authentication() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.seed_all().await?;

    let res = server.anon(Method::POST, "/projects/").json(&project_2(1)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.project_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn list_projects_without_authentication() -> Result<()> {
    let server = TestServer::spawn().await?;
    server.seed_all().await?;

    let res = server.anon(Method::GET, "/projects/").send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.project_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn retrieve_project_without_authentication() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .anon(Method::GET, &format!("/projects/{}/", seed.project.id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn patch_project_without_authentication() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .anon(Method::PATCH, &format!("/projects/{}/", seed.project.id))
        .json(&json!({
            "name": "Projeto 1 alterado",
            "description": "Descrição do projeto alterada",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let stored = server.store.get_project(seed.project.id).await?;
    assert_eq!(stored.name, "Projeto 1");
    assert_eq!(stored.description, "Descrição do projeto 1");
    Ok(())
}

#[tokio::test]
async fn delete_project_without_authentication() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .anon(Method::DELETE, &format!("/projects/{}/", seed.project.id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.project_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn project_url_must_be_web_url() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let mut body = project_2(seed.profile.id);
    body["github_url"] = json!("javascript:alert(1)");

    let res = server.authed(Method::POST, "/projects/").await?.json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["field_errors"]["github_url"][0], "Enter a valid URL.");
    assert_eq!(server.project_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn put_project_without_authentication() -> Result<()> {
    let server = TestServer::spawn().await?;
    let seed = server.seed_all().await?;

    let res = server
        .anon(Method::PUT, &format!("/projects/{}/", seed.project.id))
        .json(&project_2(seed.profile.id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(server.project_count().await?, 1);
    assert_eq!(server.store.get_project(seed.project.id).await?, seed.project);
    Ok(())
}
