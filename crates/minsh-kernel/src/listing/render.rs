//! Turning sorted entries into output lines.

use std::time::SystemTime;

use chrono::{DateTime, Local};
use minsh_types::DirEntry;

use super::options::ListingOptions;
use super::size::format_size;

/// An entry as it appears in a listing.
#[derive(Debug, Clone)]
pub enum ListedEntry {
    /// The working directory, shown as `.`.
    Current(DirEntry),
    /// The working directory's parent, shown as `..`.
    Parent(DirEntry),
    /// A real entry from the requested paths.
    Real(DirEntry),
}

impl ListedEntry {
    /// The underlying metadata.
    pub fn entry(&self) -> &DirEntry {
        match self {
            ListedEntry::Current(e) | ListedEntry::Parent(e) | ListedEntry::Real(e) => e,
        }
    }

    /// The name printed for this entry.
    pub fn display_name(&self) -> &str {
        match self {
            ListedEntry::Current(_) => ".",
            ListedEntry::Parent(_) => "..",
            ListedEntry::Real(e) => &e.name,
        }
    }

    /// True for `.` and `..`.
    pub fn is_implied(&self) -> bool {
        !matches!(self, ListedEntry::Real(_))
    }

    /// True when the printed name starts with a dot.
    pub fn is_hidden(&self) -> bool {
        match self {
            ListedEntry::Real(e) => e.is_hidden(),
            ListedEntry::Current(_) | ListedEntry::Parent(_) => true,
        }
    }
}

/// Render every visible entry, one line each, in the given order.
pub fn render_lines(entries: &[ListedEntry], options: &ListingOptions) -> Vec<String> {
    entries
        .iter()
        .filter(|e| is_visible(e, options))
        .map(|e| render_line(e.entry(), e.display_name(), options))
        .collect()
}

fn is_visible(entry: &ListedEntry, options: &ListingOptions) -> bool {
    if options.almost_all && entry.is_implied() {
        return false;
    }
    options.include_hidden || !entry.is_hidden()
}

/// One listing line for `entry` printed under `name`.
pub fn render_line(entry: &DirEntry, name: &str, options: &ListingOptions) -> String {
    if !options.long {
        return name.to_string();
    }

    let size = if options.human_readable {
        format_size(entry.size)
    } else {
        entry.size.to_string()
    };
    let modified = format_mtime(entry.modified.unwrap_or(SystemTime::UNIX_EPOCH));
    format!("{} {} {} {}", entry.mode_string(), size, modified, name)
}

/// Local time as `Jan 2 15:04`.
pub fn format_mtime(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%b %-d %H:%M").to_string()
}
