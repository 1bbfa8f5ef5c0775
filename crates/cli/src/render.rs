//! Terminal rendering for candidate lists.
//!
//! Wide terminals get a table, narrow ones a stack of cards, mirroring the
//! web portal's breakpoint.

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use data_loader::Candidate;
use portal::{ACCENT, Rgb, status_style};

/// Terminals narrower than this get cards in auto layout
pub const CARD_BREAKPOINT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    Table,
    Cards,
    /// Cards below the breakpoint, table otherwise
    Auto,
}

impl Layout {
    /// Resolve `Auto` against a terminal width (None = unknown, assume wide)
    pub fn resolve(self, columns: Option<usize>) -> Layout {
        match self {
            Layout::Auto => match columns {
                Some(width) if width < CARD_BREAKPOINT => Layout::Cards,
                _ => Layout::Table,
            },
            other => other,
        }
    }
}

/// Terminal width from `COLUMNS`, if set and numeric
pub fn terminal_columns() -> Option<usize> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok()
}

fn status_badge(status: &str) -> ColoredString {
    let style = status_style(status);
    let Rgb(fr, fg, fb) = style.foreground;
    let Rgb(br, bg, bb) = style.background;
    format!(" {status} ")
        .truecolor(fr, fg, fb)
        .on_truecolor(br, bg, bb)
        .bold()
}

/// Heading plus the active-candidate counter
pub fn header(active: usize) -> String {
    let Rgb(r, g, b) = ACCENT;
    format!(
        "{} {}\n{} Active Candidates",
        "Recruitment".bold(),
        "Portal".bold().truecolor(r, g, b),
        active.to_string().bold().truecolor(r, g, b),
    )
}

/// Render candidates as an aligned table
pub fn table(candidates: &[Candidate]) -> Vec<String> {
    let name_w = column_width("NAME", candidates.iter().map(|c| c.name.chars().count()));
    let email_w = column_width("CONTACT", candidates.iter().map(|c| c.email.chars().count()));
    let role_w = column_width("ROLE", candidates.iter().map(|c| c.position.chars().count()));
    let exp_w = column_width("EXPERIENCE", candidates.iter().map(|c| years(c).len()));

    let mut lines = Vec::with_capacity(candidates.len() + 1);
    lines.push(
        format!(
            "{:<name_w$}  {:<email_w$}  {:<role_w$}  {:<exp_w$}  STATUS",
            "NAME", "CONTACT", "ROLE", "EXPERIENCE"
        )
        .dimmed()
        .to_string(),
    );
    for c in candidates {
        lines.push(format!(
            "{}  {:<email_w$}  {:<role_w$}  {:<exp_w$}  {}",
            format!("{:<name_w$}", c.name).bold(),
            c.email,
            c.position,
            years(c),
            status_badge(&c.status),
        ));
    }
    lines
}

/// Render candidates as stacked cards
pub fn cards(candidates: &[Candidate]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, c) in candidates.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{}  {}", c.name.bold(), status_badge(&c.status)));
        lines.push(format!("  {}", "─".repeat(c.name.chars().count().max(12)).dimmed()));
        lines.push(format!("  Role:        {}", c.position));
        lines.push(format!("  Email:       {}", c.email));
        lines.push(format!("  Experience:  {} Years Exp", c.experience));
    }
    lines
}

fn years(candidate: &Candidate) -> String {
    format!("{} Yrs", candidate.experience)
}

fn column_width(title: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(title.len(), usize::max)
}
