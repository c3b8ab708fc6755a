//! Transcript helpers shared by the demos, plus the colored rendering the
//! binary uses for listings.

use std::io::{self, Write};

use colored::Colorize;
use itertools::Itertools;

use crate::catalog::{Category, Pattern};

/// `=== Title ===`, the first line of every transcript.
pub fn heading(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "=== {title} ===")
}

/// `--- Title ---` preceded by a blank line.
pub fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n--- {title} ---")
}

pub fn colorize_category(category: Category) -> String {
    paint_category(category, category.as_str())
}

fn paint_category(category: Category, text: &str) -> String {
    match category {
        Category::Creational => text.green().to_string(),
        Category::Structural => text.blue().to_string(),
        Category::Behavioral => text.magenta().to_string(),
    }
}

/// One row per pattern: name, category, intent.
pub fn render_listing<'a, I>(patterns: I) -> String
where
    I: IntoIterator<Item = &'a dyn Pattern>,
{
    let patterns: Vec<&dyn Pattern> = patterns.into_iter().collect();
    let width = patterns.iter().map(|p| p.name().len()).max().unwrap_or(0);

    patterns
        .iter()
        .map(|p| {
            // Pad before painting; escape codes must not count toward the width.
            let name = format!("{:<width$}", p.name());
            let category = format!("{:<10}", p.category().as_str());
            format!(
                "{}  {}  {}",
                name.bold(),
                paint_category(p.category(), &category),
                p.intent()
            )
        })
        .join("\n")
}

/// Intent and participant table for `describe`.
pub fn render_description(pattern: &dyn Pattern) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} ({})\n",
        pattern.name().bold(),
        colorize_category(pattern.category())
    ));
    output.push_str(&format!("{}\n\n", pattern.intent()));
    output.push_str(&format!("{}\n", "Participants".underline()));

    let width = pattern
        .participants()
        .iter()
        .map(|p| p.role.len())
        .max()
        .unwrap_or(0);
    for participant in pattern.participants() {
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            participant.role,
            participant.realized_by.cyan(),
            width = width
        ));
    }
    output
}
