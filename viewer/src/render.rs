//! Page renderer
//!
//! Renders the viewer state to a self-contained HTML page.

use chrono::{DateTime, Utc};

use crate::models::{CommitEntry, Contributor, LanguageBreakdown, RepositorySummary};
use crate::session::ViewState;

const TITLE: &str = "GitHub Repo History & Activity Viewer";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0 auto; max-width: 900px; padding: 20px; }
.input-group input { margin-right: 10px; padding: 8px; width: 200px; }
.input-group button { padding: 8px 16px; }
.error { color: red; }
.repo-card { border: 1px solid #ccc; padding: 15px; border-radius: 5px; margin-bottom: 20px; }
.language { margin-bottom: 4px; }
.contributors { display: flex; gap: 15px; flex-wrap: wrap; margin-bottom: 20px; }
.contributor { text-align: center; width: 80px; text-decoration: none; color: black; }
.contributor img { width: 60px; height: 60px; border-radius: 50%; }
.commits { list-style-type: none; padding-left: 0; }
.commit { margin-bottom: 15px; border-bottom: 1px solid #eee; padding-bottom: 10px; }
";

/// Render the full page for the current state
pub fn render_page(state: &ViewState) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(&format!("<title>{}</title>\n", escape(TITLE)));
    buf.push_str(&format!("<style>\n{}</style>\n", STYLE));
    buf.push_str("</head>\n<body>\n<div class=\"container\">\n");
    buf.push_str(&format!("<h1>{}</h1>\n", escape(TITLE)));

    buf.push_str(&render_search_form(&state.owner, &state.repo));

    if state.loading {
        buf.push_str("<p class=\"loading\">Loading...</p>\n");
    }
    if let Some(error) = &state.error {
        buf.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }

    // Either the whole envelope renders or none of it does
    if let Some(envelope) = &state.envelope {
        buf.push_str(&render_repository_card(&envelope.repo, &envelope.languages));
        buf.push_str(&render_contributors(&envelope.contributors));
        buf.push_str(&render_commits(&envelope.commits));
    }

    buf.push_str("</div>\n</body>\n</html>\n");
    buf
}

fn render_search_form(owner: &str, repo: &str) -> String {
    format!(
        "<form class=\"input-group\" method=\"get\" action=\"/\">\n\
         <input type=\"text\" name=\"owner\" placeholder=\"Owner (e.g. facebook)\" value=\"{}\">\n\
         <input type=\"text\" name=\"repo\" placeholder=\"Repo (e.g. react)\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
        escape(owner),
        escape(repo)
    )
}

fn render_repository_card(repo: &RepositorySummary, languages: &LanguageBreakdown) -> String {
    let mut buf = String::from("<div class=\"repo-card\">\n");

    buf.push_str(&format!(
        "<h2>{}</h2>\n",
        external_link(&repo.html_url, &repo.full_name)
    ));
    buf.push_str(&format!(
        "<p>{}</p>\n",
        escape(repo.description.as_deref().unwrap_or_default())
    ));
    buf.push_str(&format!(
        "<p>Stars: {} | Forks: {} | Watchers: {} | Language: {}</p>\n",
        repo.stargazers_count,
        repo.forks_count,
        repo.watchers_count,
        escape(repo.language.as_deref().unwrap_or_default())
    ));
    buf.push_str(&format!(
        "<p>License: {} | Open Issues: {} | Topics: {}</p>\n",
        escape(repo.license_name()),
        repo.open_issues_count,
        escape(&repo.topics_label())
    ));
    buf.push_str(&format!(
        "<p>Created At: {} | Updated At: {}</p>\n",
        format_date(repo.created_at),
        format_date(repo.updated_at)
    ));

    if let Some(homepage) = &repo.homepage {
        buf.push_str(&format!(
            "<p>Homepage: {}</p>\n",
            external_link(homepage, homepage)
        ));
    }

    buf.push_str("<div>\n<h4>Languages Used</h4>\n");
    buf.push_str(&render_languages(languages));
    buf.push_str("</div>\n</div>\n");

    buf
}

/// One line per language, largest share first. Nothing when empty.
fn render_languages(languages: &LanguageBreakdown) -> String {
    if languages.is_empty() {
        return String::new();
    }

    languages
        .shares()
        .iter()
        .map(|share| {
            format!(
                "<div class=\"language\">{}: {}%</div>\n",
                escape(&share.language),
                share.percent_label()
            )
        })
        .collect()
}

fn render_contributors(contributors: &[Contributor]) -> String {
    let mut buf = String::from("<div>\n<h3>Top Contributors</h3>\n<div class=\"contributors\">\n");

    if contributors.is_empty() {
        buf.push_str("<p>No contributors found.</p>\n");
    }

    for contributor in contributors {
        buf.push_str(&format!(
            "<a class=\"contributor\" data-id=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">\
             <img class=\"avatar\" src=\"{}\" alt=\"{}\">\
             <div>{}</div><div>({})</div></a>\n",
            contributor.id,
            escape(&contributor.html_url),
            escape(&contributor.avatar_url),
            escape(&contributor.login),
            escape(&contributor.login),
            contributor.contributions
        ));
    }

    buf.push_str("</div>\n</div>\n");
    buf
}

fn render_commits(commits: &[CommitEntry]) -> String {
    let mut buf = String::from("<div>\n<h3>Recent Commits</h3>\n<ul class=\"commits\">\n");

    if commits.is_empty() {
        buf.push_str("<li>No commits found.</li>\n");
    }

    for commit in commits {
        buf.push_str(&format!(
            "<li class=\"commit\" data-sha=\"{}\"><strong>{}</strong>\
             <div>Author: {} | Date: {}</div>{}</li>\n",
            escape(&commit.sha),
            escape(&commit.commit.message),
            escape(commit.author_name()),
            format_datetime(commit.authored_at()),
            external_link(&commit.html_url, "View Commit")
        ));
    }

    buf.push_str("</ul>\n</div>\n");
    buf
}

fn external_link(href: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        escape(text)
    )
}

/// `M/D/YYYY`, UTC
fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// `M/D/YYYY, h:mm:ss AM`, UTC
fn format_datetime(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Escape text for use in HTML content and double-quoted attributes
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
