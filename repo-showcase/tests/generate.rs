mod common;

use common::{install_crypto_provider, not_found, repo_json};
use repo_showcase::{Runner, RunnerConfig, RunnerError, ShowcaseSettings};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer, temp: &TempDir) -> ShowcaseSettings {
    install_crypto_provider();
    ShowcaseSettings {
        api_base_url: server.uri(),
        output: temp.path().join("projects.json"),
        ..Default::default()
    }
}

#[tokio::test]
async fn writes_ranked_enriched_document() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let mut sparse = json!({"name": "sparse", "full_name": "octocat/sparse"});
    sparse["stargazers_count"] = json!(3);

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("octocat", "low", 1),
            repo_json("octocat", "high", 50),
            sparse,
            repo_json("octocat", "mid", 10),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/high/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# High\nThe best one."))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/high/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"login": "octocat", "avatar_url": "https://a/1", "html_url": "https://github.com/octocat", "contributions": 9}
        ])))
        .mount(&mock_server)
        .await;

    // Every other enrichment request fails
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found()))
        .with_priority(10)
        .mount(&mock_server)
        .await;

    let config = RunnerConfig::new("octocat", None).with_settings(settings_for(&mock_server, &temp));
    let summary = Runner::new(config).unwrap().run().await.unwrap();

    assert_eq!(summary.repositories_collected, 4);
    assert_eq!(summary.readmes_found, 1);
    assert_eq!(summary.readmes_unavailable, 3);
    assert_eq!(summary.contributors_found, 1);
    assert_eq!(summary.featured, 3);
    assert_eq!(summary.total_stars, 64);

    let written: Value = serde_json::from_str(
        &std::fs::read_to_string(temp.path().join("projects.json")).unwrap(),
    )
    .unwrap();
    assert!(written["generated_at"].is_string());

    let projects = written["projects"].as_array().unwrap();
    let names: Vec<&str> = projects.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["high", "mid", "sparse", "low"]);

    let featured: Vec<bool> = projects.iter().map(|p| p["featured"].as_bool().unwrap()).collect();
    assert_eq!(featured, vec![true, true, true, false]);

    assert_eq!(projects[0]["readmeExcerpt"], "The best one.");
    assert_eq!(projects[0]["contributors"][0]["login"], "octocat");
    assert_eq!(projects[0]["contributors"][0]["contributionCount"], 9);

    let sparse = &projects[2];
    assert_eq!(sparse["language"], "");
    assert_eq!(sparse["license"], "");
    assert_eq!(sparse["description"], "");
    assert_eq!(sparse["tags"], json!([]));
    assert_eq!(sparse["defaultBranch"], "main");
    assert_eq!(sparse["readmeExcerpt"], "");
    assert_eq!(sparse["contributors"], json!([]));
    assert_eq!(sparse["screenshots"], json!([]));
    assert_eq!(
        sparse["thumbnailUrl"],
        "https://opengraph.githubassets.com/1/octocat/sparse"
    );
}

#[tokio::test]
async fn heading_only_readme_counts_as_found() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([repo_json("octocat", "terse", 2)])),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/terse/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# terse\n```\nmake\n```\n"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/terse/contributors"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found()))
        .mount(&mock_server)
        .await;

    let config = RunnerConfig::new("octocat", None).with_settings(settings_for(&mock_server, &temp));
    let summary = Runner::new(config).unwrap().run().await.unwrap();

    assert_eq!(summary.readmes_found, 1);
    assert_eq!(summary.readmes_unavailable, 0);
    assert_eq!(summary.contributors_unavailable, 1);

    let written: Value = serde_json::from_str(
        &std::fs::read_to_string(temp.path().join("projects.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(written["projects"][0]["readmeExcerpt"], "");
}

#[tokio::test]
async fn listing_failure_aborts_without_writing() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/users/ghost/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found()))
        .mount(&mock_server)
        .await;

    let config = RunnerConfig::new("ghost", None).with_settings(settings_for(&mock_server, &temp));
    let result = Runner::new(config).unwrap().run().await;

    assert!(matches!(result, Err(RunnerError::Upstream(_))));
    assert!(!temp.path().join("projects.json").exists());
}

#[tokio::test]
async fn unwritable_output_is_fatal() {
    let mock_server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let config = RunnerConfig::new("octocat", None)
        .with_settings(settings_for(&mock_server, &temp))
        .with_output(temp.path().to_path_buf());
    let result = Runner::new(config).unwrap().run().await;

    assert!(matches!(result, Err(RunnerError::Persistence(_))));
}
