use std::fmt;
use std::io::Write;

use crate::browser::Opener;
use crate::config::SearchConfig;
use crate::error::AppError;
use crate::github::{QueryKind, RecordSource};
use crate::output;
use crate::tui::Picker;

/// How an invocation ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The search matched nothing; the picker was never shown
    NothingFound,
    /// The picker was dismissed without a choice
    NoSelection,
    /// The chosen URL was handed to the opener
    Opened(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NothingFound => write!(f, "no matching pull requests"),
            Outcome::NoSelection => write!(f, "nothing selected"),
            Outcome::Opened(url) => write!(f, "opened {}", url),
        }
    }
}

/// Fetch records, let the user pick one, and open it.
///
/// Messages for the user are written to `out`. The picker only runs when the
/// source succeeded with at least one record.
///
/// Writes to `out` are best-effort: a closed stdout (e.g. piped into `head`)
/// must not turn a successful pick or open into a failure.
pub async fn fetch_pick_open<S, P, O, W>(
    source: &S,
    picker: &P,
    opener: &O,
    kind: QueryKind,
    config: &SearchConfig,
    out: &mut W,
    use_colors: bool,
) -> Result<Outcome, AppError>
where
    S: RecordSource,
    P: Picker,
    O: Opener,
    W: Write,
{
    let scope = match &config.org {
        Some(org) => Some(org.clone()),
        None => source.default_scope().await,
    };

    let records = source.fetch(kind, scope.as_deref()).await?;

    if records.is_empty() {
        let message = kind.empty_message(scope.as_deref());
        // Ignore write errors - the message is informational
        let _ = writeln!(out, "{}", output::format_empty(&message, use_colors));
        return Ok(Outcome::NothingFound);
    }

    let chosen = picker.pick(records, kind.label()).await?;

    match chosen {
        Some(url) => {
            // Ignore write errors - opening the URL is what matters
            let _ = writeln!(out, "{}", output::format_opening(&url, use_colors));
            opener.open(&url).map_err(AppError::Open)?;
            Ok(Outcome::Opened(url))
        }
        None => {
            // Ignore write errors - the message is informational
            let _ = writeln!(out, "{}", output::format_no_selection(use_colors));
            Ok(Outcome::NoSelection)
        }
    }
}
