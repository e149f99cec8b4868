//! Command implementations.
//!
//! Each command builds a serializable report; `main` decides whether to print
//! it as text or JSON.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::fmt;

use client::{PageView, Variant};
use routing::{Location, MatchMode, MemoryHistory, RouteError, RouteTable};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid route table: {0}")]
    Table(#[from] RouteError),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub pattern: String,
    pub mode: MatchMode,
    pub view: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutesReport {
    pub variant: Variant,
    pub strategy: routing::Strategy,
    pub mount_id: &'static str,
    pub routes: Vec<RouteRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub location: Location,
    pub views: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "target")]
pub enum Step {
    Push(String),
    Back,
    Forward,
}

impl Step {
    /// Bare `back`/`forward` are history moves; anything else, including
    /// `/back`, is a push.
    fn parse(token: &str) -> Self {
        match token {
            "back" => Self::Back,
            "forward" => Self::Forward,
            other => Self::Push(other.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkEntry {
    pub step: Step,
    pub changed: bool,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// Describe `variant`'s route table.
///
/// # Errors
///
/// Returns [`CliError::Table`] if the table cannot be built.
pub fn routes(variant: Variant) -> Result<RoutesReport, CliError> {
    let table = variant.table()?;
    let routes = table
        .routes()
        .iter()
        .map(|route| RouteRow {
            pattern: route.pattern().path().to_owned(),
            mode: route.pattern().mode(),
            view: route.view().name(),
        })
        .collect();
    Ok(RoutesReport {
        variant,
        strategy: variant.strategy(),
        mount_id: variant.mount_id(),
        routes,
    })
}

/// Resolve one path, read with the variant's navigation strategy.
///
/// # Errors
///
/// Returns [`CliError::Table`] if the table cannot be built.
pub fn resolve(variant: Variant, input: &str) -> Result<Resolution, CliError> {
    let table = variant.table()?;
    let location = variant.strategy().parse(input);
    Ok(resolution(&table, location))
}

/// Replay a navigation sequence against an in-memory history, resolving
/// after every step.
///
/// # Errors
///
/// Returns [`CliError::Table`] if the table cannot be built.
pub fn walk(variant: Variant, tokens: &[String]) -> Result<Vec<WalkEntry>, CliError> {
    let table = variant.table()?;
    let strategy = variant.strategy();
    let mut history = MemoryHistory::default();
    let mut entries = Vec::with_capacity(tokens.len());

    for token in tokens {
        let step = Step::parse(token);
        let changed = match &step {
            Step::Push(input) => history.push(strategy.parse(input)),
            Step::Back => history.back(),
            Step::Forward => history.forward(),
        };
        let resolution = resolution(&table, history.current().clone());
        tracing::info!(?step, changed, location = %resolution.location, views = ?resolution.views, "walk step");
        entries.push(WalkEntry {
            step,
            changed,
            resolution,
        });
    }
    Ok(entries)
}

/// Static HTML for the views matched at `input`.
///
/// # Errors
///
/// Returns [`CliError::Table`] if the table cannot be built.
pub fn render(variant: Variant, input: &str) -> Result<String, CliError> {
    Ok(client::render::render_path(variant, input)?)
}

fn resolution(table: &RouteTable<PageView>, location: Location) -> Resolution {
    let views: Vec<_> = table.resolve(&location).views().map(PageView::name).collect();
    tracing::debug!(%location, ?views, "resolved");
    Resolution { location, views }
}

impl fmt::Display for RoutesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "variant {} ({} navigation, mounts into #{})",
            self.variant, self.strategy, self.mount_id
        )?;
        for row in &self.routes {
            writeln!(f, "  {:<8} {:<10} {}", row.mode, row.pattern, row.view)?;
        }
        Ok(())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.views.is_empty() {
            write!(f, "{} -> (nothing)", self.location)
        } else {
            write!(f, "{} -> {}", self.location, self.views.join(", "))
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(target) => write!(f, "push {target}"),
            Self::Back => f.write_str("back"),
            Self::Forward => f.write_str("forward"),
        }
    }
}

impl fmt::Display for WalkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.changed { "" } else { " (no change)" };
        write!(f, "{:<16} {}{marker}", self.step.to_string(), self.resolution)
    }
}
