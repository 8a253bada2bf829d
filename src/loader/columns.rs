//! Locating the name and check-in/check-out columns in the header line.

use crate::errors::{AppError, AppResult};

const ONETAP_CHECK_IN: &str = "check in time";
const ONETAP_CHECK_OUT: &str = "check out time";

/// Header names accepted for each required column (compared trimmed and
/// case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAliases {
    pub name: Vec<String>,
    pub check_in: Vec<String>,
    pub check_out: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        let owned = |v: &[&str]| -> Vec<String> { v.iter().map(|s| s.to_string()).collect() };
        Self {
            name: owned(&["name", "naam", "student"]),
            check_in: owned(&[
                "check in time",
                "check-in time",
                "check in",
                "start",
                "start time",
                "checkin time",
            ]),
            check_out: owned(&[
                "check out time",
                "check-out time",
                "check out",
                "einde",
                "end",
                "end time",
                "checkout time",
            ]),
        }
    }
}

/// Explicit header names given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOverrides {
    pub name: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    pub check_in: usize,
    pub check_out: usize,
}

/// Resolved positions: one name column, one or more time column pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub pairs: Vec<ColumnPair>,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn find_exact(headers: &[String], wanted: &str) -> Option<usize> {
    let wanted = normalize(wanted);
    headers.iter().position(|h| normalize(h) == wanted)
}

fn find_alias(headers: &[String], aliases: &[String]) -> Option<usize> {
    aliases.iter().find_map(|a| find_exact(headers, a))
}

fn find_containing(headers: &[String], needle: &str) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| normalize(h).contains(needle))
        .map(|(i, _)| i)
        .collect()
}

/// Resolves one column: the override must exist verbatim, otherwise the
/// first alias present wins.
fn resolve_one(
    headers: &[String],
    overridden: Option<&String>,
    aliases: &[String],
) -> AppResult<Option<usize>> {
    match overridden {
        Some(h) => find_exact(headers, h)
            .map(Some)
            .ok_or_else(|| AppError::MissingColumn(h.clone())),
        None => Ok(find_alias(headers, aliases)),
    }
}

/// Finds the name column and every check-in/check-out pair.
///
/// Without time-column overrides, headers containing "check in time" /
/// "check out time" are collected first: OneTap exports repeat them once
/// per session (`Check In Time`, `Check In Time 2`, `Mon Check In Time`, or
/// the same header twice) and every pair counts. Aliases are used when the
/// file has at most one such pair.
pub fn resolve_columns(
    headers: &[String],
    aliases: &ColumnAliases,
    overrides: &ColumnOverrides,
) -> AppResult<ColumnMap> {
    let name = resolve_one(headers, overrides.name.as_ref(), &aliases.name)?
        .ok_or_else(|| AppError::MissingColumn("Name".into()))?;

    if overrides.check_in.is_none() && overrides.check_out.is_none() {
        let ins = find_containing(headers, ONETAP_CHECK_IN);
        let outs = find_containing(headers, ONETAP_CHECK_OUT);

        if ins.len() > 1 || outs.len() > 1 {
            return repeated_pairs(headers, name, ins, outs);
        }
    }

    let check_in = resolve_one(headers, overrides.check_in.as_ref(), &aliases.check_in)?
        .or_else(|| find_containing(headers, ONETAP_CHECK_IN).first().copied())
        .ok_or_else(|| AppError::MissingColumn("Check In Time".into()))?;
    let check_out = resolve_one(headers, overrides.check_out.as_ref(), &aliases.check_out)?
        .or_else(|| find_containing(headers, ONETAP_CHECK_OUT).first().copied())
        .ok_or_else(|| AppError::MissingColumn("Check Out Time".into()))?;

    Ok(ColumnMap {
        name,
        pairs: vec![ColumnPair {
            check_in,
            check_out,
        }],
    })
}

/// Pairs repeated time columns in header order. A column left without a
/// partner is an error, never silently dropped.
fn repeated_pairs(
    headers: &[String],
    name: usize,
    ins: Vec<usize>,
    outs: Vec<usize>,
) -> AppResult<ColumnMap> {
    if ins.len() != outs.len() {
        let (unpaired, missing) = if ins.len() > outs.len() {
            (ins[outs.len()], "Check Out Time")
        } else {
            (outs[ins.len()], "Check In Time")
        };
        return Err(AppError::MissingColumn(format!(
            "{missing} (for '{}')",
            headers[unpaired].trim()
        )));
    }

    let pairs = ins
        .into_iter()
        .zip(outs)
        .map(|(check_in, check_out)| ColumnPair {
            check_in,
            check_out,
        })
        .collect();

    Ok(ColumnMap { name, pairs })
}
