//! Deployment report.
//!
//! Selection and reporting are kept apart: [`report_line`] only formats,
//! [`write_report`] emits to any writer, and [`deploy_least_rmse_model`]
//! glues selection to a stdout report for callers that want the one-shot
//! behavior.

use std::fmt;
use std::io::{self, Write};

use crate::error::Result;
use crate::selector::{select_best_model, ScoreLookup};

/// Prefix of every report line
pub const REPORT_PREFIX: &str = "The model with least RMSE is deployed which is";

/// Rendering used when nothing was selected
pub const NO_SELECTION: &str = "None";

/// Format the report line for a selection.
///
/// ```
/// use rmse_deploy::report::report_line;
///
/// assert_eq!(
///     report_line(Some("lstm")),
///     "The model with least RMSE is deployed which is lstm"
/// );
/// assert_eq!(
///     report_line::<&str>(None),
///     "The model with least RMSE is deployed which is None"
/// );
/// ```
pub fn report_line<K: fmt::Display>(selected: Option<K>) -> String {
    match selected {
        Some(model) => format!("{REPORT_PREFIX} {model}"),
        None => format!("{REPORT_PREFIX} {NO_SELECTION}"),
    }
}

/// Write the report line, newline-terminated.
pub fn write_report<W, K>(writer: &mut W, selected: Option<K>) -> io::Result<()>
where
    W: Write + ?Sized,
    K: fmt::Display,
{
    writeln!(writer, "{}", report_line(selected))
}

/// Select the least-error model and announce it on stdout.
///
/// The report is printed even when `models` is empty, naming `None`.
/// A missing score aborts before anything is printed.
pub fn deploy_least_rmse_model<'a, K, I, S>(models: I, scores: &S) -> Result<Option<&'a K>>
where
    I: IntoIterator<Item = &'a K>,
    K: fmt::Display + ?Sized + 'a,
    S: ScoreLookup<K> + ?Sized,
{
    let selected = select_best_model(models, scores)?;

    match selected {
        Some(model) => tracing::info!(model = %model, "deploying least-RMSE model"),
        None => tracing::warn!("no model selected; collection was empty or all scores NaN/inf"),
    }

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), selected)?;

    Ok(selected)
}
