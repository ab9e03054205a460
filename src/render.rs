//! Console output of the site inventory.
use std::io::{self, Write};
use std::path::Path;

use crate::fsutil;
use crate::inventory::{ApplicationRecord, Inventory};
use crate::naming::NamingScheme;

const HEADER: [&str; 6] = ["NAME", "ENVIRONMENT", "TYPE", "URL", "DATABASE URL", "STATUS"];
const MAX_COLUMN_WIDTH: usize = 200;
const COLUMN_GAP: &str = "  ";
const UNKNOWN: &str = "-";

/// Probes for detecting the kind of application below `<site>/src`, checked in order.
const APP_TYPE_PROBES: [(&str, AppType); 2] = [
    ("docroot/scripts/drupal.sh", AppType::Drupal),
    ("docroot/wp", AppType::WordPress),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppType {
    Drupal,
    WordPress,
}

impl AppType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Drupal => "drupal",
            AppType::WordPress => "wp",
        }
    }
}

/// Returns `singular` if `count` is exactly one, `plural` otherwise.
///
/// # Examples
///
/// ```
/// # use drud_local::render::format_plural;
/// assert_eq!(format_plural(1, "site", "sites"), "site");
/// assert_eq!(format_plural(0, "site", "sites"), "sites");
/// assert_eq!(format_plural(5, "site", "sites"), "sites");
/// ```
pub fn format_plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Detects the application type of a local working copy.
///
/// Returns `None` if the type is not known or the checks fail.
pub fn determine_app_type(site_dir: impl AsRef<Path>) -> Option<AppType> {
    let src = site_dir.as_ref().join("src");
    APP_TYPE_PROBES.iter().find_map(|(probe, app_type)| {
        match fsutil::path_exists(src.join(probe)) {
            Ok(true) => Some(*app_type),
            Ok(false) => None,
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    })
}

/// Renders the inventory as one table per naming scheme.
///
/// `base_dir` is used to look up the application type of each site.
pub fn render_site_list(
    out: &mut impl Write,
    inventory: &Inventory,
    base_dir: &Path,
) -> io::Result<()> {
    if inventory.is_empty() {
        return writeln!(out, "No applications found.");
    }

    for scheme in [NamingScheme::Legacy, NamingScheme::Standard] {
        let count = inventory.count(scheme);
        if count == 0 {
            continue;
        }

        writeln!(
            out,
            "{} {} {} found.",
            count,
            scheme.label(),
            format_plural(count, "site", "sites")
        )?;
        let rows: Vec<[String; 6]> = inventory
            .scheme(scheme)
            .map(|record| row(record, base_dir))
            .collect();
        write_table(out, &rows)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Renders the inventory records as a JSON array.
pub fn render_json(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    let records: Vec<&ApplicationRecord> = inventory.iter().map(|(_, record)| record).collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

fn row(record: &ApplicationRecord, base_dir: &Path) -> [String; 6] {
    let app_type = determine_app_type(base_dir.join(record.relative_path()))
        .map_or(UNKNOWN, |app_type| app_type.as_str());
    let environment = if record.environment.is_empty() {
        UNKNOWN
    } else {
        record.environment.as_str()
    };

    [
        record.name.clone(),
        environment.to_owned(),
        app_type.to_owned(),
        record
            .web_public_port
            .map_or_else(|| UNKNOWN.to_owned(), |port| format!("http://localhost:{port}")),
        record
            .db_public_port
            .map_or_else(|| UNKNOWN.to_owned(), |port| format!("localhost:{port}")),
        record.status.clone(),
    ]
}

fn write_table(out: &mut impl Write, rows: &[[String; 6]]) -> io::Result<()> {
    let mut widths = HEADER.map(|title| title.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count()).min(MAX_COLUMN_WIDTH);
        }
    }

    write_row(out, &widths, HEADER.iter().copied())?;
    for row in rows {
        write_row(out, &widths, row.iter().map(String::as_str))?;
    }
    Ok(())
}

fn write_row<'a>(
    out: &mut impl Write,
    widths: &[usize; 6],
    cells: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let cell: String = cell.chars().take(*width).collect();
        line.push_str(&format!("{cell:<width$}", width = *width));
    }
    writeln!(out, "{}", line.trim_end())
}
