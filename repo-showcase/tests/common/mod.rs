#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use repo_showcase::GitHubClient;

/// A minimal repository summary as the listing endpoint returns it.
pub fn repo_json(owner: &str, name: &str, stars: u64) -> Value {
    json!({
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "html_url": format!("https://github.com/{owner}/{name}"),
        "description": format!("The {name} project"),
        "topics": ["rust"],
        "stargazers_count": stars,
        "forks_count": 1,
        "open_issues_count": 0,
        "size": 10,
        "updated_at": "2024-05-01T10:00:00Z",
        "created_at": "2020-01-01T00:00:00Z",
        "language": "Rust",
        "license": {"key": "mit", "spdx_id": "MIT", "name": "MIT License"},
        "default_branch": "main"
    })
}

/// `count` numbered repositories.
pub fn repo_page(owner: &str, prefix: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| repo_json(owner, &format!("{prefix}-{i}"), i as u64))
            .collect(),
    )
}

pub fn not_found() -> Value {
    json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    })
}

/// Installs the rustls crypto provider once per test binary.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    install_crypto_provider();
    GitHubClient::with_base_url(&server.uri(), None).unwrap()
}
