//! Loading of the static prompt text that the editor copies to the clipboard.

use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Where the prompt text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    Url(String),
    File(PathBuf),
}

impl PromptSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            PromptSource::Url(trimmed.to_string())
        } else {
            PromptSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for PromptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptSource::Url(url) => write!(f, "{url}"),
            PromptSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the full prompt text, giving up after `timeout`.
pub async fn load_prompt(source: PromptSource, timeout: Duration) -> Result<String> {
    debug!(%source, ?timeout, "Loading prompt text");
    tokio::time::timeout(timeout, read_source(&source))
        .await
        .map_err(|_| anyhow!("timed out after {timeout:?} reading {source}"))?
}

async fn read_source(source: &PromptSource) -> Result<String> {
    match source {
        PromptSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        PromptSource::Url(url) => {
            let response = reqwest::get(url)
                .await
                .with_context(|| format!("failed to fetch {url}"))?
                .error_for_status()
                .with_context(|| format!("bad response from {url}"))?;
            response
                .text()
                .await
                .with_context(|| format!("failed to read body from {url}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_urls_case_insensitively() {
        assert_eq!(
            PromptSource::parse(" HTTPS://example.com/gpt.txt "),
            PromptSource::Url("HTTPS://example.com/gpt.txt".to_string())
        );
        assert_eq!(
            PromptSource::parse("public/gpt.txt"),
            PromptSource::File(PathBuf::from("public/gpt.txt"))
        );
    }

    #[tokio::test]
    async fn reads_prompt_file_verbatim() {
        let path = std::env::temp_dir().join(format!(
            "fortune-card-prompt-test-{}.txt",
            std::process::id()
        ));
        let contents = "請依照以下格式撰寫流年運勢：\n一、整體運勢分析\n";
        std::fs::write(&path, contents).expect("write prompt");

        let loaded = load_prompt(PromptSource::File(path.clone()), Duration::from_secs(5))
            .await
            .expect("prompt loads");
        assert_eq!(loaded, contents);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let source = PromptSource::File(PathBuf::from("/nonexistent/fortune-card/gpt.txt"));
        let err = load_prompt(source, Duration::from_secs(5))
            .await
            .expect_err("missing file fails");
        assert!(format!("{err:#}").contains("gpt.txt"));
    }
}
