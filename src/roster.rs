use crate::errors::{RosterError, RosterResult};
use schema::{CreatureRecord, CreatureTemplate, MissingField};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Validated roster plus every default that had to be substituted while
/// reading it.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub templates: Vec<CreatureTemplate>,
    pub recovered: Vec<MissingField>,
}

impl Roster {
    fn from_records(records: Vec<CreatureRecord>) -> Self {
        let mut recovered = Vec::new();
        let templates = records
            .into_iter()
            .map(|record| CreatureTemplate::from_record(record, &mut recovered))
            .collect();

        for issue in &recovered {
            warn!(record = %issue.record, field = issue.field, default = %issue.default, "substituted missing roster field");
        }

        Self { templates, recovered }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Load a roster file, picking the parser from the file extension.
pub fn load_roster(path: &Path) -> RosterResult<Roster> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> RosterResult<Roster> = match extension.as_deref() {
        Some("json") => parse_json_roster,
        Some("ron") => parse_ron_roster,
        _ => return Err(RosterError::UnsupportedFormat(path.to_path_buf())),
    };

    let content = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let roster = parse(&content)?;
    info!(path = %path.display(), creatures = roster.len(), "roster loaded");
    Ok(roster)
}

/// Parse a JSON array of creature records, as written by the asset fetch tool.
pub fn parse_json_roster(content: &str) -> RosterResult<Roster> {
    let records: Vec<CreatureRecord> = serde_json::from_str(content)?;
    Ok(Roster::from_records(records))
}

/// Parse a RON list of creature records.
///
/// Optional fields may be written bare when the file enables
/// `implicit_some`; otherwise they need `Some(..)`.
pub fn parse_ron_roster(content: &str) -> RosterResult<Roster> {
    let records: Vec<CreatureRecord> = ron::from_str(content)?;
    Ok(Roster::from_records(records))
}
