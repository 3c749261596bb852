use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};

/// One snapshot of a file, as reported by the snapshot service
///
/// Field names mirror the service's JSON wire format exactly.
/// Immutable once decoded; `Time` is microseconds since the epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Status")]
    pub status: i32,
    #[serde(rename = "SeqNum")]
    pub seq_num: u64,
    #[serde(rename = "FileLength")]
    pub file_length: u64,
    #[serde(rename = "Progress")]
    pub progress: u32,
    #[serde(rename = "Time")]
    pub time: i64,
}

/// One page of the snapshot listing response
#[derive(Debug, Clone, Deserialize)]
pub struct ListSnapshotResponse {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "RequestId")]
    pub request_id: String,
    #[serde(rename = "TotalCount")]
    pub total_count: i64,
    /// Absent or empty when the offset is past the last record
    #[serde(rename = "Snapshots")]
    pub snapshots: Option<Vec<SnapshotRecord>>,
}

impl ListSnapshotResponse {
    /// Decode one page from the raw response body
    ///
    /// Returns `MalformedResponse` with the decoder's own message when
    /// the body is not a well-formed listing.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| SnapshotError::MalformedResponse {
            message: e.to_string(),
        })
    }

    /// The records carried by this page; an absent array is empty
    pub fn into_records(self) -> Vec<SnapshotRecord> {
        self.snapshots.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page() {
        let body = r#"{
            "Code": "0",
            "Message": "Exec success.",
            "RequestId": "xxx",
            "TotalCount": 1,
            "Snapshots": [{
                "File": "/vol1",
                "FileLength": 10737418240,
                "Name": "snap1",
                "Progress": 100,
                "SeqNum": 1,
                "Status": 0,
                "Time": 1660036335000000,
                "UUID": "de06df66-b9e4-44df-ba3d-ac94ddee0b28",
                "User": "curve"
            }]
        }"#;

        let resp = ListSnapshotResponse::from_json(body).unwrap();
        assert_eq!(resp.code, "0");
        assert_eq!(resp.total_count, 1);

        let records = resp.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].uuid, "de06df66-b9e4-44df-ba3d-ac94ddee0b28");
        assert_eq!(records[0].file, "/vol1");
        assert_eq!(records[0].seq_num, 1);
        assert_eq!(records[0].time, 1660036335000000);
    }

    #[test]
    fn test_decode_absent_snapshots_is_empty() {
        let body = r#"{
            "Code": "0",
            "Message": "Exec success.",
            "RequestId": "xxx",
            "TotalCount": 0
        }"#;

        let resp = ListSnapshotResponse::from_json(body).unwrap();
        assert!(resp.into_records().is_empty());
    }

    #[test]
    fn test_decode_empty_snapshots_is_empty() {
        let body = r#"{
            "Code": "0",
            "Message": "Exec success.",
            "RequestId": "xxx",
            "TotalCount": 0,
            "Snapshots": []
        }"#;

        let resp = ListSnapshotResponse::from_json(body).unwrap();
        assert!(resp.into_records().is_empty());
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = ListSnapshotResponse::from_json("not json at all").unwrap_err();
        match err {
            SnapshotError::MalformedResponse { message } => {
                assert!(!message.is_empty());
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }
}
