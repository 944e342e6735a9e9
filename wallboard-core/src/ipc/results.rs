//! Result objects returned by the request/response boundary channels.
//!
//! Each shape encodes exactly one of three mutually exclusive outcomes:
//! success with data, user cancellation, or a failure message. The field
//! constructors below are the only way to build them, which keeps the
//! "never more than one failure reason" invariant out of reach of callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the three mutually exclusive outcomes a result encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Cancelled,
    Error,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Returned by the `open-file` channel. One value per dialog invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReadResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Content length in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cancelled: bool,
}

impl FileReadResult {
    pub fn ok(file_name: String, file_path: String, content: String) -> Self {
        let size = content.len();
        Self {
            success: true,
            file_name: Some(file_name),
            file_path: Some(file_path),
            content: Some(content),
            size: Some(size),
            error: None,
            cancelled: false,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            success: false,
            file_name: None,
            file_path: None,
            content: None,
            size: None,
            error: None,
            cancelled: true,
        }
    }

    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            file_name: None,
            file_path: None,
            content: None,
            size: None,
            error: Some(error.to_string()),
            cancelled: false,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.success {
            Outcome::Ok
        } else if self.cancelled {
            Outcome::Cancelled
        } else {
            Outcome::Error
        }
    }
}

/// Returned by the `save-file` channel. One value per dialog invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWriteResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cancelled: bool,
}

impl FileWriteResult {
    pub fn ok(file_name: String, file_path: String) -> Self {
        Self {
            success: true,
            file_name: Some(file_name),
            file_path: Some(file_path),
            error: None,
            cancelled: false,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            success: false,
            file_name: None,
            file_path: None,
            error: None,
            cancelled: true,
        }
    }

    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            file_name: None,
            file_path: None,
            error: Some(error.to_string()),
            cancelled: false,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.success {
            Outcome::Ok
        } else if self.cancelled {
            Outcome::Cancelled
        } else {
            Outcome::Error
        }
    }
}

/// Returned by `show-notification` and `notify-agent-event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.success {
            Outcome::Ok
        } else {
            Outcome::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_result_constructors_yield_exactly_one_outcome() {
        let ok = FileReadResult::ok("a.txt".into(), "/tmp/a.txt".into(), "hello".into());
        assert_eq!(ok.outcome(), Outcome::Ok);
        assert!(ok.error.is_none());
        assert!(!ok.cancelled);

        let cancelled = FileReadResult::cancelled();
        assert_eq!(cancelled.outcome(), Outcome::Cancelled);
        assert!(cancelled.error.is_none());
        assert!(cancelled.content.is_none());

        let failed = FileReadResult::failure("permission denied");
        assert_eq!(failed.outcome(), Outcome::Error);
        assert!(!failed.cancelled);
        assert_eq!(failed.error.as_deref(), Some("permission denied"));
    }

    #[test]
    fn read_result_reports_content_size_in_bytes() {
        let ok = FileReadResult::ok("a.txt".into(), "/tmp/a.txt".into(), "héllo".into());
        assert_eq!(ok.size, Some("héllo".len()));
    }

    #[test]
    fn read_result_success_omits_failure_fields_on_the_wire() {
        let ok = FileReadResult::ok("a.txt".into(), "/tmp/a.txt".into(), "hi".into());
        let json = serde_json::to_value(&ok).expect("serialize read result");
        assert_eq!(json["success"], true);
        assert_eq!(json["fileName"], "a.txt");
        assert_eq!(json["filePath"], "/tmp/a.txt");
        assert_eq!(json["content"], "hi");
        assert_eq!(json["size"], 2);
        assert!(json.get("error").is_none());
        assert!(json.get("cancelled").is_none());
    }

    #[test]
    fn read_result_cancellation_serializes_as_the_two_field_shape() {
        let json = serde_json::to_value(FileReadResult::cancelled()).expect("serialize");
        assert_eq!(json["success"], false);
        assert_eq!(json["cancelled"], true);
        assert!(json.get("error").is_none());
        assert!(json.get("content").is_none());
    }

    #[test]
    fn write_result_constructors_yield_exactly_one_outcome() {
        let ok = FileWriteResult::ok("out.txt".into(), "/tmp/out.txt".into());
        assert_eq!(ok.outcome(), Outcome::Ok);

        let cancelled = FileWriteResult::cancelled();
        assert_eq!(cancelled.outcome(), Outcome::Cancelled);
        assert!(cancelled.error.is_none());

        let failed = FileWriteResult::failure("disk full");
        assert_eq!(failed.outcome(), Outcome::Error);
        assert!(!failed.cancelled);
    }

    #[test]
    fn notification_result_wire_shape() {
        let json = serde_json::to_value(NotificationResult::ok()).expect("serialize");
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());

        let json = serde_json::to_value(NotificationResult::failure("no daemon"))
            .expect("serialize");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "no daemon");
    }

    #[test]
    fn cancelled_flag_defaults_false_when_absent_on_deserialize() {
        let parsed: FileWriteResult =
            serde_json::from_str(r#"{"success":false,"error":"boom"}"#).expect("deserialize");
        assert!(!parsed.cancelled);
        assert_eq!(parsed.outcome(), Outcome::Error);
    }
}
