//! Terminal rendering for placement results.
//!
//! A command prints in one of three [`Mode`]s. Human mode writes styled
//! text and a table per hotspot to stdout. JSON mode writes exactly one
//! document per command to stdout and reports failures as a JSON object on
//! stderr. Quiet mode keeps stdout silent; failures still reach stderr.

use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};

use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};
use tabled::{Table, Tabled};

use crate::application::placement::RuleOutcome;
use crate::domain::{Hotspot, HotspotKey};

/// How a command presents its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Human,
    Json,
    Quiet,
}

impl Mode {
    /// Resolve the global flags; `--json` takes precedence over `--quiet`.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Human,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Json,
            2 => Self::Quiet,
            _ => Self::Human,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::Human => 0,
            Self::Json => 1,
            Self::Quiet => 2,
        }
    }
}

static MODE: AtomicU8 = AtomicU8::new(0);
static VERBOSITY: AtomicU8 = AtomicU8::new(0);

/// Set the mode and `-v` count for the rest of the process.
pub fn configure(mode: Mode, verbosity: u8) {
    MODE.store(mode.as_u8(), Ordering::Relaxed);
    VERBOSITY.store(verbosity, Ordering::Relaxed);
}

#[must_use]
pub fn mode() -> Mode {
    Mode::from_u8(MODE.load(Ordering::Relaxed))
}

#[must_use]
pub fn verbosity() -> u8 {
    VERBOSITY.load(Ordering::Relaxed)
}

fn human() -> bool {
    mode() == Mode::Human
}

/// `hotspots <version>` line opening human output.
pub fn banner() {
    if !human() {
        return;
    }
    let name = "hotspots";
    println!(
        "{} {}",
        name.if_supports_color(Stream::Stdout, |t| t.bold()),
        env!("CARGO_PKG_VERSION").if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

pub fn heading(title: &str) {
    if !human() {
        return;
    }
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// One aligned `label value` line.
pub fn pair(label: &str, value: impl Display) {
    if !human() {
        return;
    }
    println!(
        "  {:<14} {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// A hotspot's heading followed by its member table, or `(empty)`.
pub fn hotspot(key: HotspotKey, hotspot: &Hotspot) {
    if !human() {
        return;
    }
    heading(&format!("{key} ({})", hotspot.len()));
    if hotspot.is_empty() {
        println!("  {}", "(empty)".if_supports_color(Stream::Stdout, |t| t.dimmed()));
        return;
    }
    for line in member_table(hotspot).lines() {
        println!("  {line}");
    }
}

/// One line per rule: how many members it placed and who owns the showcase.
pub fn summary(outcome: &RuleOutcome) {
    if !human() {
        return;
    }
    let owner = owner_label(outcome);
    pair(
        outcome.rule,
        format!(
            "{} placed, {}",
            outcome.summary.total(),
            owner.if_supports_color(Stream::Stdout, |t| t.cyan())
        ),
    );
}

pub fn confirm(message: &str) {
    if !human() {
        return;
    }
    println!("  {} {message}", "✓".if_supports_color(Stream::Stdout, |t| t.green()));
}

/// Report a failed command on stderr, in every mode.
pub fn failure(message: &str) {
    if mode() == Mode::Json {
        eprintln!("{}", json!({ "type": "error", "message": message }));
        return;
    }
    eprintln!("  {} {message}", "×".if_supports_color(Stream::Stderr, |t| t.red()));
}

/// The single JSON document of a command; printed only in JSON mode.
pub fn document(value: &Value) {
    if mode() == Mode::Json {
        println!("{value}");
    }
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Tier")]
    tier: String,
}

fn member_table(hotspot: &Hotspot) -> String {
    let rows = hotspot
        .members()
        .iter()
        .enumerate()
        .map(|(i, asset)| MemberRow {
            position: i + 1,
            asset: asset.id().to_string(),
            title: asset.title().to_string(),
            vendor: asset.vendor().id().to_string(),
            tier: asset.tier().to_string(),
        });
    Table::new(rows).to_string()
}

fn owner_label(outcome: &RuleOutcome) -> String {
    if outcome.summary.showcase_preclaimed() {
        return "showcase preclaimed".to_string();
    }
    match outcome.summary.showcase_owner() {
        Some(vendor) => format!("showcase owner {}", vendor.id()),
        None => "no showcase owner".to_string(),
    }
}
