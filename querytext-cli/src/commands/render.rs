//! `querytext render <file>`: render an AST document to SQL.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use querytext_core::{RenderConfig, Substitution};
use querytext_renderer::TrackedBuffer;
use querytext_sql::load_statement;

/// Arguments for `querytext render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// AST document to render (.json, .yaml or .yml).
    pub path: PathBuf,

    /// List tracked literals (offset, length, text) after the SQL.
    #[arg(long)]
    pub tracked: bool,

    /// Colour tracked literals in the rendered SQL.
    #[arg(long)]
    pub highlight: bool,

    /// Emit machine-readable JSON (always includes tracked literals).
    #[arg(long, conflicts_with = "highlight")]
    pub json: bool,
}

#[derive(Serialize)]
struct RenderJson {
    sql: String,
    substitutions: Vec<SubstitutionJson>,
}

#[derive(Serialize)]
struct SubstitutionJson {
    offset: usize,
    len: usize,
    text: String,
}

#[derive(Tabled)]
struct SubstitutionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "offset")]
    offset: usize,
    #[tabled(rename = "length")]
    len: usize,
    #[tabled(rename = "text")]
    text: String,
}

impl RenderArgs {
    pub fn run(self, config: &RenderConfig) -> Result<()> {
        let stmt = load_statement(&self.path)
            .with_context(|| format!("failed to load AST from '{}'", self.path.display()))?;

        let effective = RenderConfig {
            track_substitutions: config.track_substitutions || self.tracked || self.json,
            highlight: config.highlight || self.highlight,
            ..config.clone()
        };
        let mut buf = TrackedBuffer::from_config(&effective);
        buf.write_node(&stmt);
        let substitutions = buf.substitutions().to_vec();
        let sql = buf.into_string().context("rendered SQL is not valid UTF-8")?;
        tracing::info!(
            path = %self.path.display(),
            bytes = sql.len(),
            substitutions = substitutions.len(),
            "rendered statement"
        );

        if self.json {
            return print_json(sql, &substitutions);
        }

        if effective.highlight {
            println!("{}", highlighted(&sql, &substitutions));
        } else {
            println!("{sql}");
        }
        if effective.track_substitutions {
            print_table(&sql, &substitutions);
        }
        Ok(())
    }
}

fn span_text<'a>(sql: &'a str, sub: &Substitution) -> &'a str {
    sql.get(sub.range()).unwrap_or_default()
}

fn print_json(sql: String, substitutions: &[Substitution]) -> Result<()> {
    let payload = RenderJson {
        substitutions: substitutions
            .iter()
            .map(|sub| SubstitutionJson {
                offset: sub.offset,
                len: sub.len,
                text: span_text(&sql, sub).to_string(),
            })
            .collect(),
        sql,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize render JSON")?
    );
    Ok(())
}

fn print_table(sql: &str, substitutions: &[Substitution]) {
    if substitutions.is_empty() {
        println!("No tracked literals.");
        return;
    }
    let rows: Vec<SubstitutionRow> = substitutions
        .iter()
        .enumerate()
        .map(|(index, sub)| SubstitutionRow {
            index: index + 1,
            offset: sub.offset,
            len: sub.len,
            text: span_text(sql, sub).to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

/// `sql` with every tracked span coloured. Spans arrive in append order and
/// never overlap.
fn highlighted(sql: &str, substitutions: &[Substitution]) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut cursor = 0;
    for sub in substitutions {
        let (Some(before), Some(text)) = (sql.get(cursor..sub.offset), sql.get(sub.range())) else {
            continue;
        };
        out.push_str(before);
        out.push_str(&text.yellow().bold().to_string());
        cursor = sub.end();
    }
    out.push_str(sql.get(cursor..).unwrap_or_default());
    out
}
