//! End-to-end properties of the host/UI boundary contract.

use std::sync::Arc;
use std::thread;

use wallboard_core::fileio::{read_text_file, write_text_file, DEFAULT_SAVE_NAME};
use wallboard_core::{
    format_agent_event, AgentEvent, AgentEventDetails, AgentStatus, CloseAction, FileReadResult,
    Lifecycle, Outcome, StatusChangedEvent,
};

#[test]
fn open_file_result_has_exactly_one_outcome_shape() {
    let cases = [
        FileReadResult::ok("a.txt".into(), "/tmp/a.txt".into(), "data".into()),
        FileReadResult::cancelled(),
        FileReadResult::failure("boom"),
    ];

    for result in cases {
        let has_content = result.content.is_some();
        let has_error = result.error.is_some();
        let is_cancelled = result.cancelled;
        let set = [
            result.success && has_content,
            is_cancelled && !result.success,
            has_error && !result.success,
        ];
        assert_eq!(
            set.iter().filter(|v| **v).count(),
            1,
            "exactly one outcome must hold: {result:?}"
        );
    }
}

#[test]
fn save_then_open_round_trips_the_submitted_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(DEFAULT_SAVE_NAME);
    let submitted = "agent,status\nAlice,Available\n";

    let written = write_text_file(&path, submitted);
    assert!(written.success);

    let read = read_text_file(&path);
    assert_eq!(read.content.as_deref(), Some(submitted));
    assert_eq!(read.file_path, written.file_path);
}

#[test]
fn close_requests_never_destroy_until_quit_is_flagged() {
    let lifecycle = Lifecycle::new();

    for _ in 0..5 {
        assert_eq!(lifecycle.close_action(), CloseAction::HideToTray);
    }

    lifecycle.begin_quit();
    assert_eq!(lifecycle.close_action(), CloseAction::Destroy);
}

#[test]
fn status_push_payload_is_well_formed() {
    let event = StatusChangedEvent::now(AgentStatus::Busy);
    let json = serde_json::to_value(&event).expect("serialize");
    assert_eq!(json["newStatus"], "Busy");
    chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().expect("timestamp string"))
        .expect("timestamp should be RFC 3339");
}

#[test]
fn unknown_agent_event_kind_still_produces_a_message() {
    let event = AgentEvent {
        agent_name: "Carol".into(),
        event_type: "shift_swap".into(),
        details: AgentEventDetails::default(),
    };
    assert_eq!(format_agent_event(&event), "Carol: shift_swap");
}

// Rapid repeated requests are handled independently; overlapping file
// operations on distinct paths must not interfere with each other.
#[test]
fn concurrent_file_operations_do_not_interfere() {
    let dir = Arc::new(tempfile::tempdir().expect("tempdir"));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dir = Arc::clone(&dir);
            thread::spawn(move || {
                let path = dir.path().join(format!("export-{i}.txt"));
                let body = format!("payload {i}");
                assert_eq!(write_text_file(&path, &body).outcome(), Outcome::Ok);
                let read = read_text_file(&path);
                assert_eq!(read.content.as_deref(), Some(body.as_str()));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker should not panic");
    }
}

// The quitting flag is the only shared mutation point; hammering it from
// several threads must leave the lifecycle in the quitting state.
#[test]
fn quit_flag_is_safe_under_concurrent_writers() {
    let lifecycle = Arc::new(Lifecycle::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lifecycle = Arc::clone(&lifecycle);
            thread::spawn(move || lifecycle.begin_quit())
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker should not panic");
    }

    assert_eq!(lifecycle.close_action(), CloseAction::Destroy);
}
