use jiff::Timestamp;

use super::*;
use crate::seed::PlanSummary;

fn create_test_checklist(id: u64, updated_second: i64) -> Checklist {
    Checklist {
        id,
        name: "Programming Job Checklist".to_string(),
        version: DEFAULT_CHECKLIST_VERSION.to_string(),
        created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        updated_at: Timestamp::from_second(updated_second).unwrap(),
        items: vec![
            create_test_item(id, 10, 0, true),
            create_test_item(id, 11, 1, false),
        ],
    }
}

fn create_test_item(checklist_id: u64, id: u64, display_index: u32, is_required: bool) -> ChecklistItem {
    ChecklistItem {
        id,
        checklist_id,
        display_index,
        content: ItemContent {
            is_required,
            ..ItemContent::text(format!("Item {display_index}"))
        },
        version: DEFAULT_CHECKLIST_VERSION.to_string(),
        created_at: Timestamp::from_second(1640995200).unwrap(),
        updated_at: Timestamp::from_second(1640995200).unwrap(),
    }
}

#[test]
fn test_votable_type_round_trips_wire_names() {
    for votable_type in VotableType::ALL {
        assert_eq!(votable_type.as_str().parse::<VotableType>(), Ok(votable_type));
    }
    assert_eq!(
        VotableType::ProgrammingLanguage.to_string(),
        "PROGRAMMING_LANGUAGE"
    );
}

#[test]
fn test_votable_type_rejects_unknown_and_lowercase() {
    assert!("company".parse::<VotableType>().is_err());
    assert!("BOOTCAMP".parse::<VotableType>().is_err());
}

#[test]
fn test_votable_seed_accepts_minimal_record() {
    let seed: VotableSeed =
        serde_json::from_str(r#"{"type": "SKILL", "name": "Rust"}"#).expect("valid record");
    assert_eq!(seed.votable_type, "SKILL");
    assert_eq!(seed.name, "Rust");
    assert!(seed.tags.is_none());
    assert!(seed.prestige_score.is_none());
}

#[test]
fn test_votable_seed_reads_camel_case_optionals() {
    let seed: VotableSeed = serde_json::from_str(
        r#"{"type": "COMPANY", "name": "Acme", "prestigeScore": 7, "guestVotes": 2, "tags": ["remote"]}"#,
    )
    .expect("valid record");
    assert_eq!(seed.prestige_score, Some(7));
    assert_eq!(seed.guest_votes, Some(2));
    assert_eq!(seed.tags, Some(vec!["remote".to_string()]));
}

#[test]
fn test_latest_by_recency_prefers_updated_at() {
    let older = create_test_checklist(5, 1641081600);
    let newer = create_test_checklist(3, 1641168000);

    let latest = latest_by_recency(vec![older, newer]).expect("one candidate");
    assert_eq!(latest.id, 3);
}

#[test]
fn test_latest_by_recency_breaks_ties_by_id() {
    let first = create_test_checklist(1, 1641081600);
    let second = create_test_checklist(2, 1641081600);

    let latest = latest_by_recency(vec![second, first]).expect("one candidate");
    assert_eq!(latest.id, 2);
    assert!(latest_by_recency(Vec::new()).is_none());
}

#[test]
fn test_required_count() {
    let checklist = create_test_checklist(1, 1641081600);
    assert_eq!(checklist.required_count(), 1);
}

#[test]
fn test_progress_flags_latest_version() {
    let latest = create_test_checklist(2, 1641168000);
    let user_checklist = UserChecklist {
        id: 1,
        user_id: 42,
        checklist_id: 1,
        is_complete: false,
        created_at: Timestamp::from_second(1640995200).unwrap(),
        updated_at: Timestamp::from_second(1640995200).unwrap(),
        items: Vec::new(),
    };

    let stale = UserChecklistProgress::new(user_checklist.clone(), latest.clone());
    assert!(!stale.is_latest_version);

    let current = UserChecklistProgress::new(
        UserChecklist {
            checklist_id: 2,
            ..user_checklist
        },
        latest,
    );
    assert!(current.is_latest_version);
}

#[test]
fn test_report_counts() {
    let checklist = create_test_checklist(1, 1641081600);
    let report = SeedReport {
        votables_seeded: 0,
        skipped_files: Vec::new(),
        checklists: vec![
            ChecklistOutcome {
                source: "checklists.json".into(),
                outcome: ReconcileOutcome::Created {
                    checklist: checklist.clone(),
                },
            },
            ChecklistOutcome {
                source: "checklists.json".into(),
                outcome: ReconcileOutcome::Updated {
                    checklist: checklist.clone(),
                    summary: PlanSummary::default(),
                },
            },
            ChecklistOutcome {
                source: "checklists.json".into(),
                outcome: ReconcileOutcome::Updated {
                    checklist,
                    summary: PlanSummary {
                        updated: 1,
                        ..PlanSummary::default()
                    },
                },
            },
        ],
    };

    assert_eq!(report.created_count(), 1);
    assert_eq!(report.updated_count(), 1);
    assert_eq!(report.unchanged_count(), 1);
}

#[test]
fn test_checklist_item_serializes_content_flat() {
    let item = create_test_item(1, 10, 0, false);
    let value = serde_json::to_value(&item).expect("serializable");
    assert_eq!(value["display_text"], "Item 0");
    assert_eq!(value["is_required"], false);
    assert_eq!(value["display_index"], 0);
}
