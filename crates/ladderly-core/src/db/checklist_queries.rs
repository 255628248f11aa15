//! Checklist and checklist item persistence.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{
    user_checklist_queries::{backfill_user_items, refresh_completion_for_checklist},
    utils::{id_column, timestamp_column},
};
use crate::{
    error::{DatabaseResultExt, Result, SeedError},
    models::{latest_by_recency, Checklist, ChecklistItem, ItemContent},
    seed::{ReconcileOp, ReconciliationPlan},
};

const INSERT_CHECKLIST_SQL: &str =
    "INSERT INTO checklists (name, version, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const INSERT_ITEM_SQL: &str = "INSERT INTO checklist_items (checklist_id, display_index, display_text, link_text, link_uri, detail_text, is_required, version, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const CHECKLIST_COLUMNS: &str = "id, name, version, created_at, updated_at";
const SELECT_CHECKLIST_SQL: &str =
    "SELECT id, name, version, created_at, updated_at FROM checklists WHERE id = ?1";
const SELECT_CHECKLISTS_BY_NAME_SQL: &str =
    "SELECT id, name, version, created_at, updated_at FROM checklists WHERE name = ?1";
const SELECT_ITEMS_SQL: &str = "SELECT id, checklist_id, display_index, display_text, link_text, link_uri, detail_text, is_required, version, created_at, updated_at FROM checklist_items WHERE checklist_id = ?1 ORDER BY display_index";
const UPDATE_ITEM_SQL: &str = "UPDATE checklist_items SET display_index = ?1, display_text = ?2, link_text = ?3, link_uri = ?4, detail_text = ?5, is_required = ?6, updated_at = ?7 WHERE id = ?8 AND checklist_id = ?9";
const UPDATE_ITEM_INDEX_SQL: &str =
    "UPDATE checklist_items SET display_index = ?1, updated_at = ?2 WHERE id = ?3 AND checklist_id = ?4";
const DELETE_ITEM_SQL: &str = "DELETE FROM checklist_items WHERE id = ?1 AND checklist_id = ?2";
const UPDATE_CHECKLIST_TIMESTAMP_SQL: &str = "UPDATE checklists SET updated_at = ?1 WHERE id = ?2";

fn build_checklist_from_row(row: &Row) -> rusqlite::Result<Checklist> {
    Ok(Checklist {
        id: id_column(row, 0)?,
        name: row.get(1)?,
        version: row.get(2)?,
        created_at: timestamp_column(row, 3)?,
        updated_at: timestamp_column(row, 4)?,
        items: Vec::new(),
    })
}

fn build_item_from_row(row: &Row) -> rusqlite::Result<ChecklistItem> {
    Ok(ChecklistItem {
        id: id_column(row, 0)?,
        checklist_id: id_column(row, 1)?,
        display_index: row.get(2)?,
        content: ItemContent {
            display_text: row.get(3)?,
            link_text: row.get(4)?,
            link_uri: row.get(5)?,
            detail_text: row.get(6)?,
            is_required: row.get(7)?,
        },
        version: row.get(8)?,
        created_at: timestamp_column(row, 9)?,
        updated_at: timestamp_column(row, 10)?,
    })
}

/// Loads the items of a checklist in display order.
pub(super) fn load_items(connection: &Connection, checklist_id: u64) -> Result<Vec<ChecklistItem>> {
    let mut stmt = connection
        .prepare(SELECT_ITEMS_SQL)
        .db_context("Failed to prepare item query")?;

    let items = stmt
        .query_map(params![checklist_id as i64], build_item_from_row)
        .db_context("Failed to query checklist items")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch checklist items")?;

    Ok(items)
}

fn insert_item(
    connection: &Connection,
    checklist_id: u64,
    display_index: u32,
    content: &ItemContent,
    version: &str,
    now: &str,
) -> Result<u64> {
    connection
        .execute(
            INSERT_ITEM_SQL,
            params![
                checklist_id as i64,
                display_index,
                &content.display_text,
                &content.link_text,
                &content.link_uri,
                &content.detail_text,
                content.is_required,
                version,
                now,
                now
            ],
        )
        .db_context("Failed to insert checklist item")?;

    Ok(connection.last_insert_rowid() as u64)
}

impl super::Database {
    /// Creates a checklist and all of its items with fresh ids.
    ///
    /// Items are written in slice order with `display_index` equal to their
    /// position, and inherit the checklist's version.
    pub fn create_checklist(
        &mut self,
        name: &str,
        version: &str,
        items: &[ItemContent],
    ) -> Result<Checklist> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(INSERT_CHECKLIST_SQL, params![name, version, &now_str, &now_str])
            .db_context("Failed to insert checklist")?;

        let checklist_id = tx.last_insert_rowid() as u64;

        for (position, content) in items.iter().enumerate() {
            insert_item(&tx, checklist_id, position as u32, content, version, &now_str)?;
        }

        let items = load_items(&tx, checklist_id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Checklist {
            id: checklist_id,
            name: name.into(),
            version: version.into(),
            created_at: now,
            updated_at: now,
            items,
        })
    }

    /// Retrieves a checklist and its items by ID.
    pub fn get_checklist(&self, id: u64) -> Result<Option<Checklist>> {
        let checklist = self
            .connection
            .query_row(SELECT_CHECKLIST_SQL, params![id as i64], build_checklist_from_row)
            .optional()
            .db_context("Failed to query checklist")?;

        match checklist {
            Some(mut checklist) => {
                checklist.items = load_items(&self.connection, checklist.id)?;
                Ok(Some(checklist))
            }
            None => Ok(None),
        }
    }

    /// Finds the latest checklist with the given name.
    ///
    /// Latest means most recently updated; ties go to the highest id.
    pub fn find_latest_checklist(&self, name: &str) -> Result<Option<Checklist>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CHECKLISTS_BY_NAME_SQL)
            .db_context("Failed to prepare checklist query")?;

        let candidates = stmt
            .query_map(params![name], build_checklist_from_row)
            .db_context("Failed to query checklists by name")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch checklists")?;

        match latest_by_recency(candidates) {
            Some(mut checklist) => {
                checklist.items = load_items(&self.connection, checklist.id)?;
                Ok(Some(checklist))
            }
            None => Ok(None),
        }
    }

    /// Lists every checklist with its items, most recently updated first.
    pub fn list_checklists(&self) -> Result<Vec<Checklist>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {CHECKLIST_COLUMNS} FROM checklists"))
            .db_context("Failed to prepare checklist query")?;

        let mut checklists = stmt
            .query_map([], build_checklist_from_row)
            .db_context("Failed to query checklists")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch checklists")?;

        checklists.sort_by(|a, b| (b.updated_at, b.id).cmp(&(a.updated_at, a.id)));
        for checklist in &mut checklists {
            checklist.items = load_items(&self.connection, checklist.id)?;
        }

        Ok(checklists)
    }

    /// Retrieves the items of a checklist in display order.
    pub fn get_checklist_items(&self, checklist_id: u64) -> Result<Vec<ChecklistItem>> {
        load_items(&self.connection, checklist_id)
    }

    /// Applies a reconciliation plan to a checklist in one transaction.
    ///
    /// An empty plan performs no writes. Otherwise the checklist's
    /// `updated_at` is bumped, created items take the checklist's version
    /// and are added to every user checklist that tracks this checklist,
    /// and user completion flags are recomputed. If any operation fails,
    /// nothing is written.
    pub fn apply_reconciliation(
        &mut self,
        checklist_id: u64,
        plan: &ReconciliationPlan,
    ) -> Result<Checklist> {
        if plan.is_empty() {
            return self
                .get_checklist(checklist_id)?
                .ok_or(SeedError::ChecklistNotFound { id: checklist_id });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let version: String = tx
            .query_row(SELECT_CHECKLIST_SQL, params![checklist_id as i64], build_checklist_from_row)
            .optional()
            .db_context("Failed to query checklist")?
            .map(|checklist| checklist.version)
            .ok_or(SeedError::ChecklistNotFound { id: checklist_id })?;

        let now_str = Timestamp::now().to_string();

        for op in plan.ops() {
            let (rows_affected, item_id) = match op {
                ReconcileOp::Delete { item_id } => (
                    tx.execute(DELETE_ITEM_SQL, params![*item_id as i64, checklist_id as i64])
                        .db_context("Failed to delete checklist item")?,
                    *item_id,
                ),
                ReconcileOp::Update {
                    item_id,
                    display_index,
                    content,
                } => (
                    tx.execute(
                        UPDATE_ITEM_SQL,
                        params![
                            display_index,
                            &content.display_text,
                            &content.link_text,
                            &content.link_uri,
                            &content.detail_text,
                            content.is_required,
                            &now_str,
                            *item_id as i64,
                            checklist_id as i64
                        ],
                    )
                    .db_context("Failed to update checklist item")?,
                    *item_id,
                ),
                ReconcileOp::Reorder {
                    item_id,
                    display_index,
                } => (
                    tx.execute(
                        UPDATE_ITEM_INDEX_SQL,
                        params![display_index, &now_str, *item_id as i64, checklist_id as i64],
                    )
                    .db_context("Failed to reorder checklist item")?,
                    *item_id,
                ),
                ReconcileOp::Create {
                    display_index,
                    content,
                } => {
                    let item_id =
                        insert_item(&tx, checklist_id, *display_index, content, &version, &now_str)?;
                    backfill_user_items(&tx, checklist_id, item_id, &now_str)?;
                    continue;
                }
            };

            // The item vanished or belongs to another checklist
            if rows_affected == 0 {
                return Err(SeedError::ChecklistItemNotFound { id: item_id });
            }
        }

        tx.execute(UPDATE_CHECKLIST_TIMESTAMP_SQL, params![&now_str, checklist_id as i64])
            .db_context("Failed to update checklist timestamp")?;

        refresh_completion_for_checklist(&tx, checklist_id, &now_str)?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_checklist(checklist_id)?
            .ok_or(SeedError::ChecklistNotFound { id: checklist_id })
    }
}
