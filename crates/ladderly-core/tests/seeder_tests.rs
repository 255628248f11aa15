mod common;

use common::{create_test_seeder, write_seed_file};
use ladderly_core::{
    models::ReconcileOutcome, ChecklistName, CreateUserChecklist, SeedChecklists, SeedError,
    SetItemCompletion, UserChecklistByName,
};

const CHECKLISTS_V1: &str = r#"[
  {
    "name": "Programming Job Checklist",
    "items": [
      "Create a LinkedIn profile",
      {
        "displayText": "Publish a portfolio",
        "linkText": "Portfolio guide",
        "linkUri": "https://www.ladderly.io/blog/portfolio"
      },
      {
        "displayText": "Join a community",
        "isRequired": false
      }
    ]
  }
]"#;

const CHECKLISTS_V2: &str = r#"[
  {
    "name": "Programming Job Checklist",
    "items": [
      "Create and polish a LinkedIn profile",
      {
        "displayText": "Publish a portfolio",
        "linkText": "Portfolio guide",
        "linkUri": "https://www.ladderly.io/blog/portfolio"
      },
      {
        "displayText": "Join a community",
        "isRequired": false
      },
      {
        "displayText": "Apply to ten jobs",
        "detailText": "Track every application in a spreadsheet."
      }
    ]
  }
]"#;

const PREMIUM: &str = r#"[
  {
    "name": "Premium Interview Checklist",
    "items": ["Schedule a mock interview"]
  }
]"#;

const VOTABLES: &str = r#"[
  {"type": "COMPANY", "name": "Acme Corp", "website": "https://acme.example"},
  {"type": "CERTIFICATION", "name": "Cloud Practitioner", "tags": ["cloud"]},
  {"type": "BOOK", "name": "The Pragmatic Programmer"}
]"#;

fn params(seed_dir: &std::path::Path, update_latest_checklists: bool) -> SeedChecklists {
    SeedChecklists {
        seed_dir: seed_dir.to_path_buf(),
        name: None,
        update_latest_checklists,
    }
}

#[tokio::test]
async fn test_full_seed_run() {
    let (temp_dir, seeder) = create_test_seeder().await;
    let seed_dir = temp_dir.path();

    write_seed_file(seed_dir, "checklists.json", CHECKLISTS_V1);
    write_seed_file(seed_dir, "premium-checklists.json", PREMIUM);
    write_seed_file(seed_dir, "votables.json", VOTABLES);

    let report = seeder
        .run_seed(&params(seed_dir, false))
        .await
        .expect("Failed to run seed");

    assert_eq!(report.votables_seeded, 3);
    assert_eq!(report.created_count(), 2);
    assert!(report.skipped_files.is_empty());

    let job = report.checklists[0].outcome.checklist();
    assert_eq!(job.items.len(), 3);
    assert_eq!(job.required_count(), 2);
    assert_eq!(job.items[1].content.link_text, "Portfolio guide");

    let votables = seeder.list_votables().await.expect("Failed to list votables");
    assert_eq!(votables.len(), 3);
}

#[tokio::test]
async fn test_in_place_update_keeps_user_progress() {
    let (temp_dir, seeder) = create_test_seeder().await;
    let seed_dir = temp_dir.path();

    write_seed_file(seed_dir, "checklists.json", CHECKLISTS_V1);
    let first = seeder
        .run_seed(&params(seed_dir, true))
        .await
        .expect("Failed to run seed");
    let original = first.checklists[0].outcome.checklist().clone();

    let user_checklist = seeder
        .create_user_checklist(&CreateUserChecklist {
            user_id: 11,
            checklist_id: original.id,
        })
        .await
        .expect("Failed to create user checklist");
    for item in &user_checklist.items[..2] {
        seeder
            .set_user_checklist_item_complete(&SetItemCompletion {
                user_item_id: item.id,
                is_complete: true,
            })
            .await
            .expect("Failed to complete item");
    }

    write_seed_file(seed_dir, "checklists.json", CHECKLISTS_V2);
    let second = seeder
        .run_seed(&params(seed_dir, true))
        .await
        .expect("Failed to run seed");

    let ReconcileOutcome::Updated { checklist, summary } = &second.checklists[0].outcome else {
        panic!("Expected an in-place update");
    };
    assert_eq!(checklist.id, original.id);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.created, 1);
    assert_eq!(checklist.items[3].content.detail_text, "Track every application in a spreadsheet.");

    let progress = seeder
        .get_latest_user_checklist_by_name(&UserChecklistByName {
            user_id: 11,
            name: "Programming Job Checklist".into(),
        })
        .await
        .expect("Failed to get progress")
        .expect("Progress should exist");

    assert!(progress.is_latest_version);
    let user_checklist = progress.user_checklist;
    assert_eq!(user_checklist.items.len(), 4);
    assert!(user_checklist.items[0].is_complete);
    assert!(user_checklist.items[1].is_complete);
    // The new required item reopens the checklist
    assert!(!user_checklist.is_complete);

    // A third run with the same file changes nothing
    let third = seeder
        .run_seed(&params(seed_dir, true))
        .await
        .expect("Failed to run seed");
    assert_eq!(third.unchanged_count(), 1);
    assert_eq!(
        third.checklists[0].outcome.checklist().updated_at,
        checklist.updated_at
    );
}

#[tokio::test]
async fn test_create_mode_adds_new_version() {
    let (temp_dir, seeder) = create_test_seeder().await;
    let seed_dir = temp_dir.path();

    write_seed_file(seed_dir, "checklists.json", CHECKLISTS_V1);
    let first = seeder
        .run_seed(&params(seed_dir, false))
        .await
        .expect("Failed to run seed");

    write_seed_file(seed_dir, "checklists.json", CHECKLISTS_V2);
    let second = seeder
        .run_seed(&params(seed_dir, false))
        .await
        .expect("Failed to run seed");

    let old_id = first.checklists[0].outcome.checklist().id;
    let new_id = second.checklists[0].outcome.checklist().id;
    assert_ne!(old_id, new_id);

    let latest = seeder
        .get_latest_checklist(&ChecklistName {
            name: "Programming Job Checklist".into(),
        })
        .await
        .expect("Failed to get latest checklist")
        .expect("Checklist should exist");
    assert_eq!(latest.id, new_id);
    assert_eq!(latest.items.len(), 4);

    let all = seeder.list_checklists().await.expect("Failed to list checklists");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_failing_checklist_keeps_earlier_ones() {
    let (temp_dir, seeder) = create_test_seeder().await;
    let seed_dir = temp_dir.path();

    write_seed_file(seed_dir, "checklists.json", CHECKLISTS_V1);
    write_seed_file(
        seed_dir,
        "premium-checklists.json",
        r#"[{"name": "Broken", "items": [{"linkUri": "https://example.com"}]}]"#,
    );

    let err = seeder
        .run_seed(&params(seed_dir, false))
        .await
        .expect_err("Item without displayText should fail");
    assert!(matches!(err, SeedError::SeedFile { .. }));
    assert!(err.to_string().contains("premium-checklists.json"));

    // checklists.json was fully processed before the failing file
    let all = seeder.list_checklists().await.expect("Failed to list checklists");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Programming Job Checklist");
}
