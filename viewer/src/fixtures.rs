//! Test fixtures
//!
//! Activity envelopes shaped like the API's responses.

use serde_json::{json, Value};

use crate::models::ActivityEnvelope;

/// Raw envelope JSON with `commits` commits and `contributors` contributors
pub fn envelope_json(commits: usize, contributors: usize) -> Value {
    let commits: Vec<Value> = (0..commits)
        .map(|i| {
            json!({
                "sha": format!("sha-{}", i),
                "html_url": format!("https://github.com/octocat/hello-world/commit/sha-{}", i),
                "commit": {
                    "message": format!("Commit {}", i),
                    "author": {
                        "name": format!("Author {}", i),
                        "date": "2024-03-05T14:07:09Z",
                    },
                },
            })
        })
        .collect();

    let contributors: Vec<Value> = (0..contributors)
        .map(|i| {
            json!({
                "id": 100 + i,
                "login": format!("contributor-{}", i),
                "avatar_url": format!("https://avatars.githubusercontent.com/u/{}", 100 + i),
                "html_url": format!("https://github.com/contributor-{}", i),
                "contributions": 50 - i,
                "type": "User",
            })
        })
        .collect();

    json!({
        "repo": {
            "id": 1296269,
            "full_name": "octocat/hello-world",
            "description": "My first repository on GitHub!",
            "html_url": "https://github.com/octocat/hello-world",
            "homepage": "https://github.com",
            "stargazers_count": 80,
            "forks_count": 9,
            "watchers_count": 80,
            "open_issues_count": 4,
            "language": "Rust",
            "license": { "key": "mit", "name": "MIT License" },
            "topics": ["octocat", "api"],
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2024-03-05T14:07:09Z",
        },
        "commits": commits,
        "contributors": contributors,
        "languages": { "Shell": 200, "Rust": 800 },
    })
}

pub fn sample_envelope(commits: usize, contributors: usize) -> ActivityEnvelope {
    serde_json::from_value(envelope_json(commits, contributors)).unwrap()
}
