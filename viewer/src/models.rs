//! View models
//!
//! Typed decoding of the activity envelope, keeping only what the page
//! renders. Unknown fields are ignored and `null` lists decode as empty.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Treat `""` the same as a missing value
fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Response of `GET /api/repo/{owner}/{repo}`
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEnvelope {
    pub repo: RepositorySummary,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub commits: Vec<CommitEntry>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub contributors: Vec<Contributor>,
    #[serde(default)]
    pub languages: LanguageBreakdown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySummary {
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub license: Option<License>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub topics: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub name: Option<String>,
}

impl RepositorySummary {
    /// License name, or `No license`
    pub fn license_name(&self) -> &str {
        self.license
            .as_ref()
            .and_then(|l| l.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("No license")
    }

    /// Topics joined by `", "`, or `None`
    pub fn topics_label(&self) -> String {
        if self.topics.is_empty() {
            "None".to_string()
        } else {
            self.topics.join(", ")
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub sha: String,
    pub html_url: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetails {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl CommitEntry {
    /// Author name, or `Unknown`
    pub fn author_name(&self) -> &str {
        self.commit
            .author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn authored_at(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|a| a.date)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub id: i64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u64,
}

/// Bytes of code per language, in the order received
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageBreakdown(Vec<(String, u64)>);

/// One language's share of the total
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

impl LanguageShare {
    /// Percentage to one decimal place, e.g. `80.0`. Halves round up.
    pub fn percent_label(&self) -> String {
        format!("{:.1}", (self.percent * 10.0).round() / 10.0)
    }
}

impl LanguageBreakdown {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.0.iter().map(|(_, bytes)| bytes).sum()
    }

    /// Shares sorted by byte count, largest first. Ties keep received order.
    pub fn shares(&self) -> Vec<LanguageShare> {
        let total = self.total_bytes();

        let mut shares: Vec<LanguageShare> = self
            .0
            .iter()
            .map(|(language, bytes)| LanguageShare {
                language: language.clone(),
                bytes: *bytes,
                percent: if total == 0 {
                    0.0
                } else {
                    *bytes as f64 / total as f64 * 100.0
                },
            })
            .collect();

        shares.sort_by(|a, b| b.bytes.cmp(&a.bytes));
        shares
    }
}

impl From<Vec<(String, u64)>> for LanguageBreakdown {
    fn from(entries: Vec<(String, u64)>) -> Self {
        Self(entries)
    }
}

impl<'de> Deserialize<'de> for LanguageBreakdown {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = LanguageBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of language names to byte counts")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((language, bytes)) = map.next_entry::<String, u64>()? {
                    entries.push((language, bytes));
                }
                Ok(LanguageBreakdown(entries))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(LanguageBreakdown::default())
            }
        }

        deserializer.deserialize_any(BreakdownVisitor)
    }
}
