use chrono::{Local, LocalResult, TimeZone};
use tabled::{settings::Style, Table, Tabled};

use crate::types::SnapshotRecord;

/// One display row of the snapshot listing
#[derive(Debug, Clone, Tabled)]
pub struct SnapshotRow {
    #[tabled(rename = "Snapshot-ID")]
    pub id: String,
    #[tabled(rename = "Snapshot-Name")]
    pub name: String,
    #[tabled(rename = "User")]
    pub user: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Sequence-Number")]
    pub seq_num: String,
    #[tabled(rename = "File-Length")]
    pub file_length: String,
    #[tabled(rename = "Progress")]
    pub progress: String,
    #[tabled(rename = "Create-Time")]
    pub create_time: String,
    #[tabled(rename = "File")]
    pub file: String,
}

impl SnapshotRow {
    fn from_record(record: &SnapshotRecord) -> Self {
        Self {
            id: record.uuid.clone(),
            name: record.name.clone(),
            user: record.user.clone(),
            status: record.status.to_string(),
            seq_num: record.seq_num.to_string(),
            file_length: record.file_length.to_string(),
            progress: record.progress.to_string(),
            create_time: format_create_time(record.time),
            file: record.file.clone(),
        }
    }
}

/// Project records into display rows, sorted by file, then name, then
/// snapshot id
///
/// The sort is stable, so rows with fully equal keys keep their input
/// order. File must stay the primary key: the renderer merges adjacent
/// rows sharing a file path, which only works when equal paths are
/// contiguous.
pub fn project_rows(records: &[SnapshotRecord]) -> Vec<SnapshotRow> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted);
    sorted.iter().map(SnapshotRow::from_record).collect()
}

/// Stable three-key sort shared by the table and JSON outputs
pub fn sort_records(records: &mut [SnapshotRecord]) {
    records.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.uuid.cmp(&b.uuid))
    });
}

/// Render the listing as an ASCII table
///
/// A file path shared by adjacent rows is printed once for the whole
/// group.
pub fn render_table(records: &[SnapshotRecord]) -> String {
    let mut rows = project_rows(records);
    merge_file_groups(&mut rows);
    Table::new(rows).with(Style::ascii()).to_string()
}

/// Blank out the file cell of every row repeating its predecessor's
fn merge_file_groups(rows: &mut [SnapshotRow]) {
    for i in (1..rows.len()).rev() {
        if rows[i].file == rows[i - 1].file {
            rows[i].file.clear();
        }
    }
}

/// Format a creation time (microseconds since epoch) in the local zone
/// with second precision
pub fn format_create_time(micros: i64) -> String {
    format_timestamp_in(micros, &Local)
}

fn format_timestamp_in<Tz: TimeZone>(micros: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(micros / 1_000_000, 0) {
        LocalResult::Single(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => micros.to_string(),
    }
}
