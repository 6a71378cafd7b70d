use std::process::Output;

use tokio::process::Command;

use crate::config::SearchConfig;
use crate::error::AppError;
use crate::github::types::Record;

const JSON_FIELDS: &str = "url,repository,number,title,isDraft";

/// Which review relationship to search for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Review requested from me, not yet submitted
    ToReview,
    /// Already reviewed by me
    Reviewed,
}

impl QueryKind {
    pub fn qualifier(self) -> &'static str {
        match self {
            QueryKind::ToReview => "review-requested:@me",
            QueryKind::Reviewed => "reviewed-by:@me",
        }
    }

    /// Label shown in the picker header
    pub fn label(self) -> &'static str {
        match self {
            QueryKind::ToReview => "to review",
            QueryKind::Reviewed => "reviewed",
        }
    }

    /// Message printed when the search matched nothing
    pub fn empty_message(self, org: Option<&str>) -> String {
        let scope = match org {
            Some(org) => format!(" in '{}'", org),
            None => String::new(),
        };
        match self {
            QueryKind::ToReview => format!(
                "No open Pull Requests found{} where you are a requested reviewer.",
                scope
            ),
            QueryKind::Reviewed => {
                format!("No open Pull Requests found{} that you have reviewed.", scope)
            }
        }
    }
}

/// Anything that can produce the ordered list of records for a query
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    /// Fetch records for `kind`, narrowed to `scope_hint` when given.
    ///
    /// A well-formed query with no matches is `Ok(vec![])`, not an error.
    async fn fetch(
        &self,
        kind: QueryKind,
        scope_hint: Option<&str>,
    ) -> Result<Vec<Record>, AppError>;

    /// Resolve the scope to search in when none was configured.
    /// Sources that pick their own default return `None`.
    async fn default_scope(&self) -> Option<String> {
        None
    }
}

/// Build the arguments for `gh search prs`
pub fn build_search_args(
    kind: QueryKind,
    org: Option<&str>,
    include_drafts: bool,
    limit: u32,
) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "search".into(),
        "prs".into(),
        "--json".into(),
        JSON_FIELDS.into(),
        "--state".into(),
        "open".into(),
        "--limit".into(),
        limit.to_string(),
    ];
    if let Some(org) = org.filter(|o| !o.is_empty()) {
        args.push(format!("org:{}", org));
    }
    args.push(kind.qualifier().into());
    if !include_drafts {
        args.push("draft:false".into());
    }
    args
}

/// Parse the stdout of `gh search prs --json ...`
///
/// Blank output means no results.
pub fn parse_records(stdout: &[u8]) -> Result<Vec<Record>, AppError> {
    let text = String::from_utf8_lossy(stdout);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&text).map_err(|source| AppError::SourceParse {
        source,
        payload: text.into_owned(),
    })
}

/// Record source backed by the GitHub CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    config: SearchConfig,
}

impl GhCli {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            program: "gh".to_string(),
            config,
        }
    }

    /// Use a different executable in place of `gh`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    async fn run(&self, args: &[String]) -> Result<Output, AppError> {
        if self.config.verbose {
            eprintln!("Running: {} {}", self.program, args.join(" "));
        }
        Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|e| AppError::SourceUnavailable {
                detail: format!("failed to run '{}': {}", self.program, e),
            })
    }
}

impl RecordSource for GhCli {
    async fn fetch(
        &self,
        kind: QueryKind,
        scope_hint: Option<&str>,
    ) -> Result<Vec<Record>, AppError> {
        let args = build_search_args(
            kind,
            scope_hint,
            self.config.include_drafts,
            self.config.limit,
        );
        let output = self.run(&args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::SourceUnavailable {
                detail: format!("gh command failed ({})\nStderr: {}", output.status, stderr.trim()),
            });
        }

        let records = parse_records(&output.stdout)?;
        if self.config.verbose {
            eprintln!("Found {} PRs", records.len());
        }
        Ok(records)
    }

    /// Owner of the repository in the current directory, if any
    async fn default_scope(&self) -> Option<String> {
        let args: Vec<String> = ["repo", "view", "--json", "owner", "--jq", ".owner.login"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let output = self.run(&args).await.ok()?;
        if !output.status.success() {
            if self.config.verbose {
                eprintln!("Could not detect organization, searching without org filter");
            }
            return None;
        }
        let owner = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if owner.is_empty() {
            return None;
        }
        if self.config.verbose {
            eprintln!("Detected organization: {}", owner);
        }
        Some(owner)
    }
}
