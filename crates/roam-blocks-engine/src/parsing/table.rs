//! # Table Normalization
//!
//! Rewrites pipe tables into the nested-bullet shape the remote graph
//! renders as a table widget:
//!
//! ```text
//! | A | B |        {{table}}
//! |---|---|          - A
//! | 1 | 2 |   ==>      - 1
//! | 3 | 4 |            - 3
//!                    - B
//!                      - 2
//!                      - 4
//! ```
//!
//! Detection is a line-based state machine (header row, then separator row,
//! then one or more data rows) rather than one multi-line pattern.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::{IndentStyle, kinds::TableMarker};

const PIPE: char = '|';

/// The text between a row's outer pipes.
fn row_inner(line: &str) -> Option<&str> {
    let inner = line
        .trim()
        .strip_prefix(PIPE)?
        .strip_suffix(PIPE)?;
    (!inner.is_empty()).then_some(inner)
}

/// Splits a `| a | b |` row into trimmed cells.
fn parse_row(line: &str) -> Option<Vec<&str>> {
    Some(row_inner(line)?.split(PIPE).map(str::trim).collect())
}

/// Whether `line` has the `| a | b |` shape of a table row.
pub(crate) fn is_table_row(line: &str) -> bool {
    row_inner(line).is_some()
}

/// Returns true for a `|---|:--:|` separator row.
fn is_separator(line: &str) -> bool {
    static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATOR_REGEX.get_or_init(|| {
        Regex::new(r"^\|(\s*:?-+:?\s*\|)+$").expect("Invalid table separator regex")
    });
    re.is_match(line.trim())
}

/// A detected pipe table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeTable<'a> {
    pub header: Vec<&'a str>,
    pub rows: Vec<Vec<&'a str>>,
}

impl PipeTable<'_> {
    /// Emits the container marker and the column-major nested bullets.
    ///
    /// Rows shorter than the header simply contribute no bullet for the
    /// missing columns; cells past the last header column have nowhere to go
    /// and are dropped.
    pub fn to_outline_lines(&self, indent: IndentStyle) -> Vec<String> {
        let column = indent.prefix(1);
        let cell = indent.prefix(2);
        let mut out = vec![TableMarker::TOKEN.to_string()];

        for (col, header) in self.header.iter().enumerate() {
            out.push(bullet(&column, header));
            for row in &self.rows {
                if let Some(value) = row.get(col) {
                    out.push(bullet(&cell, value));
                }
            }
        }

        for (i, row) in self.rows.iter().enumerate() {
            if row.len() > self.header.len() {
                log::debug!(
                    "table row {} has {} cells for {} columns; extra cells dropped",
                    i + 1,
                    row.len(),
                    self.header.len()
                );
            }
        }
        out
    }
}

fn bullet(prefix: &str, text: &str) -> String {
    format!("{prefix}- {text}").trim_end().to_string()
}

/// Scanner states, one line at a time.
enum ScanState<'a> {
    Idle,
    /// A row that may be a header; waiting for a separator.
    Header { raw: &'a str, cells: Vec<&'a str> },
    /// Header and separator seen; waiting for the first data row.
    Separator {
        raw: [&'a str; 2],
        cells: Vec<&'a str>,
    },
    /// Inside a table, collecting data rows.
    Rows(PipeTable<'a>),
}

/// A piece of scanned text: either an untouched line or a whole table.
#[derive(Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Line(&'a str),
    Table(PipeTable<'a>),
}

/// Splits `text` into plain lines and detected tables, in order.
pub fn scan_tables(text: &str) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut state = ScanState::Idle;

    for line in text.lines() {
        state = step(state, line, &mut out);
    }
    flush(state, &mut out);
    out
}

fn step<'a>(state: ScanState<'a>, line: &'a str, out: &mut Vec<Segment<'a>>) -> ScanState<'a> {
    match state {
        ScanState::Idle => match parse_row(line) {
            Some(cells) => ScanState::Header { raw: line, cells },
            None => {
                out.push(Segment::Line(line));
                ScanState::Idle
            }
        },
        ScanState::Header { raw, cells } => {
            if is_separator(line) {
                ScanState::Separator {
                    raw: [raw, line],
                    cells,
                }
            } else {
                out.push(Segment::Line(raw));
                step(ScanState::Idle, line, out)
            }
        }
        ScanState::Separator { raw, cells } => match parse_row(line) {
            Some(row) => ScanState::Rows(PipeTable {
                header: cells,
                rows: vec![row],
            }),
            None => {
                out.extend(raw.map(Segment::Line));
                step(ScanState::Idle, line, out)
            }
        },
        ScanState::Rows(mut table) => match parse_row(line) {
            Some(row) => {
                table.rows.push(row);
                ScanState::Rows(table)
            }
            None => {
                out.push(Segment::Table(table));
                step(ScanState::Idle, line, out)
            }
        },
    }
}

fn flush<'a>(state: ScanState<'a>, out: &mut Vec<Segment<'a>>) {
    match state {
        ScanState::Idle => {}
        ScanState::Header { raw, .. } => out.push(Segment::Line(raw)),
        ScanState::Separator { raw, .. } => out.extend(raw.map(Segment::Line)),
        ScanState::Rows(table) => out.push(Segment::Table(table)),
    }
}

/// Returns true if `text` contains at least one complete pipe table.
pub fn has_markdown_table(text: &str) -> bool {
    scan_tables(text)
        .iter()
        .any(|seg| matches!(seg, Segment::Table(_)))
}

/// Rewrites every pipe table in `text` into the nested-bullet form.
///
/// Text without tables is returned borrowed and byte-identical.
pub fn normalize_tables(text: &str, indent: IndentStyle) -> Cow<'_, str> {
    let segments = scan_tables(text);
    if !segments.iter().any(|seg| matches!(seg, Segment::Table(_))) {
        return Cow::Borrowed(text);
    }

    let mut lines: Vec<String> = Vec::with_capacity(segments.len());
    for seg in segments {
        match seg {
            Segment::Line(line) => lines.push(line.to_string()),
            Segment::Table(table) => lines.extend(table.to_outline_lines(indent)),
        }
    }
    Cow::Owned(lines.join("\n"))
}
