//! Release and label housekeeping against the GitHub REST API, by name.
//!
//! Run with `RUST_LOG=crest=debug` to watch each exchange.

#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use std::time::Duration;

use crest::{HeaderValue, prelude::*};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub draft: bool,
    pub prerelease: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
}

/// `Repos` fills two slots, owner and repository, before the rest of the name.
fn github(base_url: impl Into<String>, transport: HyperClient) -> Result<Crest> {
    Crest::builder(base_url)
        .keyword("Repos", "repos/${}/${}")
        .header("Accept", "application/vnd.github+json")
        .header("X-GitHub-Api-Version", "2022-11-28")
        .transport(transport)
        .build()
}

/// Latest stable tag, skipping drafts and pre-releases.
async fn latest_stable(api: &Crest, owner: &str, repo: &str) -> Result<Option<String>> {
    let releases: Vec<Release> = api
        .call_json("getReposReleases", args![owner, repo, json!({ "per_page": 20 })])
        .await?;
    Ok(releases
        .into_iter()
        .find(|release| !release.draft && !release.prerelease)
        .map(|release| release.tag_name))
}

/// Make sure a label exists; `Ok(false)` when it already did.
async fn ensure_label(api: &Crest, owner: &str, repo: &str, label: &Label) -> Result<bool> {
    let response = api
        .call("getReposLabels", args![owner, repo, label.name.as_str()])
        .await?;
    if response.is_success() {
        return Ok(false);
    }
    api.call_json::<Label>("postReposLabels", args![owner, repo, json!({ "$json": label })])
        .await?;
    Ok(true)
}

#[tokio::main]
async fn main() -> crest::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let transport = HyperClient::builder()
        .timeout(Duration::from_secs(10))
        .user_agent(HeaderValue::from_static("crest-release-bot/0.1"))
        .with_logging()
        .with_concurrency_limit(4)
        .build();
    let api = github("https://api.github.com", transport)?;

    for (name, args) in [
        ("getReposReleasesLatest", args!["tokio-rs", "tokio"]),
        ("getReposLabels", args!["tokio-rs", "tokio", "good first issue"]),
        ("deleteReposLabels", args!["tokio-rs", "tokio", "stale"]),
    ] {
        let request = api.resolve(name, args)?;
        println!("{name:>24} -> {} {}", request.method, request.url);
    }

    match latest_stable(&api, "tokio-rs", "tokio").await {
        Ok(Some(tag)) => println!("latest stable tokio: {tag}"),
        Ok(None) => println!("no stable release yet"),
        Err(err) => println!("release lookup failed: {err}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path, query_param},
    };

    #[derive(Debug, Deserialize)]
    struct ApiMessage {
        message: String,
    }

    fn client(server: &MockServer) -> Crest {
        github(server.uri(), HyperClient::new()).expect("client")
    }

    fn release(tag: &str, draft: bool, prerelease: bool) -> Release {
        Release {
            tag_name: tag.to_string(),
            draft,
            prerelease,
        }
    }

    #[tokio::test]
    async fn test_latest_stable_skips_drafts_and_prereleases() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/tokio-rs/tokio/releases"))
            .and(query_param("per_page", "20"))
            .and(header("X-GitHub-Api-Version", "2022-11-28"))
            .respond_with(ResponseTemplate::new(200).set_body_json([
                release("tokio-1.49.0", true, false),
                release("tokio-1.49.0-rc.1", false, true),
                release("tokio-1.48.0", false, false),
            ]))
            .expect(1)
            .mount(&mock_server)
            .await;

        let tag = latest_stable(&client(&mock_server), "tokio-rs", "tokio")
            .await
            .expect("releases");

        assert_eq!(tag.as_deref(), Some("tokio-1.48.0"));
    }

    #[tokio::test]
    async fn test_ensure_label_creates_missing_label() {
        let mock_server = MockServer::start().await;
        let label = Label {
            name: "needs-triage".to_string(),
            color: "fbca04".to_string(),
        };

        Mock::given(method("GET"))
            .and(path("/repos/tokio-rs/tokio/labels/needs-triage"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/repos/tokio-rs/tokio/labels"))
            .and(header("Authorization", "Bearer ghp_t0ken"))
            .and(body_json(&label))
            .respond_with(ResponseTemplate::new(201).set_body_json(&label))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = client(&mock_server)
            .configure("setBearer", args!["ghp_t0ken"])
            .expect("configured");

        let created = ensure_label(&api, "tokio-rs", "tokio", &label)
            .await
            .expect("label");
        assert!(created);
    }

    #[tokio::test]
    async fn test_label_names_are_encoded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/repos/tokio-rs/tokio/labels/good%20first%20issue"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client(&mock_server)
            .call("deleteReposLabels", args!["tokio-rs", "tokio", "good first issue"])
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_rejected_write_keeps_github_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/tokio-rs/tokio/labels"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({"message": "Must have admin rights to Repository."})),
            )
            .mount(&mock_server)
            .await;

        let err = client(&mock_server)
            .call_json::<Label>(
                "postReposLabels",
                args!["tokio-rs", "tokio", json!({ "$json": { "name": "x", "color": "000000" } })],
            )
            .await
            .expect_err("forbidden");

        assert_eq!(err.status(), Some(403));
        let message: ApiMessage = crest::from_json(err.body().expect("body")).expect("json");
        assert_eq!(message.message, "Must have admin rights to Repository.");
    }
}
