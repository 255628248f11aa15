//! User progress records referencing checklist and item identities.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::utils::{id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, SeedError},
    models::{UserChecklist, UserChecklistItem},
};

const CHECK_CHECKLIST_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM checklists WHERE id = ?1)";
const INSERT_USER_CHECKLIST_SQL: &str = "INSERT INTO user_checklists (user_id, checklist_id, is_complete, created_at, updated_at) VALUES (?1, ?2, 0, ?3, ?4)";
const INSERT_USER_ITEMS_FOR_CHECKLIST_SQL: &str = "INSERT INTO user_checklist_items (user_checklist_id, checklist_item_id, is_complete, created_at, updated_at) SELECT ?1, id, 0, ?2, ?2 FROM checklist_items WHERE checklist_id = ?3 ORDER BY display_index";
const BACKFILL_USER_ITEMS_SQL: &str = "INSERT INTO user_checklist_items (user_checklist_id, checklist_item_id, is_complete, created_at, updated_at) SELECT id, ?1, 0, ?2, ?2 FROM user_checklists WHERE checklist_id = ?3";
const SELECT_USER_CHECKLIST_SQL: &str = "SELECT id, user_id, checklist_id, is_complete, created_at, updated_at FROM user_checklists WHERE id = ?1";
const SELECT_LATEST_USER_CHECKLIST_BY_NAME_SQL: &str = "SELECT uc.id, uc.user_id, uc.checklist_id, uc.is_complete, uc.created_at, uc.updated_at FROM user_checklists uc JOIN checklists c ON c.id = uc.checklist_id WHERE uc.user_id = ?1 AND c.name = ?2 ORDER BY uc.id DESC LIMIT 1";
const SELECT_USER_ITEMS_SQL: &str = "SELECT uci.id, uci.user_checklist_id, uci.checklist_item_id, uci.is_complete, ci.display_text, ci.is_required, ci.display_index FROM user_checklist_items uci JOIN checklist_items ci ON ci.id = uci.checklist_item_id WHERE uci.user_checklist_id = ?1 ORDER BY ci.display_index";
const SELECT_USER_ITEM_OWNER_SQL: &str =
    "SELECT user_checklist_id FROM user_checklist_items WHERE id = ?1";
const UPDATE_USER_ITEM_SQL: &str =
    "UPDATE user_checklist_items SET is_complete = ?1, updated_at = ?2 WHERE id = ?3";

// A user checklist is complete when none of its required items is open.
const REFRESH_COMPLETION_BY_CHECKLIST_SQL: &str = "UPDATE user_checklists SET is_complete = NOT EXISTS (SELECT 1 FROM user_checklist_items uci JOIN checklist_items ci ON ci.id = uci.checklist_item_id WHERE uci.user_checklist_id = user_checklists.id AND ci.is_required = 1 AND uci.is_complete = 0), updated_at = ?1 WHERE checklist_id = ?2";
const REFRESH_COMPLETION_BY_ID_SQL: &str = "UPDATE user_checklists SET is_complete = NOT EXISTS (SELECT 1 FROM user_checklist_items uci JOIN checklist_items ci ON ci.id = uci.checklist_item_id WHERE uci.user_checklist_id = user_checklists.id AND ci.is_required = 1 AND uci.is_complete = 0), updated_at = ?1 WHERE id = ?2";

fn build_user_checklist_from_row(row: &Row) -> rusqlite::Result<UserChecklist> {
    Ok(UserChecklist {
        id: id_column(row, 0)?,
        user_id: id_column(row, 1)?,
        checklist_id: id_column(row, 2)?,
        is_complete: row.get(3)?,
        created_at: timestamp_column(row, 4)?,
        updated_at: timestamp_column(row, 5)?,
        items: Vec::new(),
    })
}

fn build_user_item_from_row(row: &Row) -> rusqlite::Result<UserChecklistItem> {
    Ok(UserChecklistItem {
        id: id_column(row, 0)?,
        user_checklist_id: id_column(row, 1)?,
        checklist_item_id: id_column(row, 2)?,
        is_complete: row.get(3)?,
        display_text: row.get(4)?,
        is_required: row.get(5)?,
        display_index: row.get(6)?,
    })
}

/// Adds an open progress row for a newly created checklist item to every
/// user checklist tracking that checklist.
pub(super) fn backfill_user_items(
    connection: &Connection,
    checklist_id: u64,
    checklist_item_id: u64,
    now: &str,
) -> Result<()> {
    connection
        .execute(
            BACKFILL_USER_ITEMS_SQL,
            params![checklist_item_id as i64, now, checklist_id as i64],
        )
        .db_context("Failed to add progress rows for new checklist item")?;
    Ok(())
}

/// Recomputes completion of every user checklist tracking a checklist.
pub(super) fn refresh_completion_for_checklist(
    connection: &Connection,
    checklist_id: u64,
    now: &str,
) -> Result<()> {
    connection
        .execute(REFRESH_COMPLETION_BY_CHECKLIST_SQL, params![now, checklist_id as i64])
        .db_context("Failed to refresh user checklist completion")?;
    Ok(())
}

fn load_user_items(connection: &Connection, user_checklist_id: u64) -> Result<Vec<UserChecklistItem>> {
    let mut stmt = connection
        .prepare(SELECT_USER_ITEMS_SQL)
        .db_context("Failed to prepare user item query")?;

    let items = stmt
        .query_map(params![user_checklist_id as i64], build_user_item_from_row)
        .db_context("Failed to query user checklist items")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch user checklist items")?;

    Ok(items)
}

impl super::Database {
    /// Starts tracking a user's progress against a checklist.
    ///
    /// One open progress row is created per checklist item.
    pub fn create_user_checklist(&mut self, user_id: u64, checklist_id: u64) -> Result<UserChecklist> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let checklist_exists: bool = tx
            .query_row(CHECK_CHECKLIST_EXISTS_SQL, params![checklist_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check checklist existence")?;

        if !checklist_exists {
            return Err(SeedError::ChecklistNotFound { id: checklist_id });
        }

        let now_str = Timestamp::now().to_string();

        tx.execute(
            INSERT_USER_CHECKLIST_SQL,
            params![user_id as i64, checklist_id as i64, &now_str, &now_str],
        )
        .db_context("Failed to insert user checklist")?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(
            INSERT_USER_ITEMS_FOR_CHECKLIST_SQL,
            params![id as i64, &now_str, checklist_id as i64],
        )
        .db_context("Failed to insert user checklist items")?;

        // A checklist without required items starts out complete
        tx.execute(REFRESH_COMPLETION_BY_ID_SQL, params![&now_str, id as i64])
            .db_context("Failed to refresh user checklist completion")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_user_checklist(id)?
            .ok_or(SeedError::ChecklistNotFound { id: checklist_id })
    }

    /// Retrieves a user checklist and its progress rows by ID.
    pub fn get_user_checklist(&self, id: u64) -> Result<Option<UserChecklist>> {
        let user_checklist = self
            .connection
            .query_row(
                SELECT_USER_CHECKLIST_SQL,
                params![id as i64],
                build_user_checklist_from_row,
            )
            .optional()
            .db_context("Failed to query user checklist")?;

        match user_checklist {
            Some(mut user_checklist) => {
                user_checklist.items = load_user_items(&self.connection, user_checklist.id)?;
                Ok(Some(user_checklist))
            }
            None => Ok(None),
        }
    }

    /// Finds the user's most recently created user checklist whose checklist
    /// carries `name`, whichever version it points at.
    pub fn find_latest_user_checklist_by_name(
        &self,
        user_id: u64,
        name: &str,
    ) -> Result<Option<UserChecklist>> {
        let user_checklist = self
            .connection
            .query_row(
                SELECT_LATEST_USER_CHECKLIST_BY_NAME_SQL,
                params![user_id as i64, name],
                build_user_checklist_from_row,
            )
            .optional()
            .db_context("Failed to query user checklist by name")?;

        match user_checklist {
            Some(mut user_checklist) => {
                user_checklist.items = load_user_items(&self.connection, user_checklist.id)?;
                Ok(Some(user_checklist))
            }
            None => Ok(None),
        }
    }

    /// Marks one progress row complete or open and recomputes the owning
    /// user checklist's completion.
    pub fn set_user_checklist_item_complete(
        &mut self,
        user_item_id: u64,
        is_complete: bool,
    ) -> Result<UserChecklist> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let user_checklist_id: u64 = tx
            .query_row(SELECT_USER_ITEM_OWNER_SQL, params![user_item_id as i64], |row| {
                id_column(row, 0)
            })
            .optional()
            .db_context("Failed to query user checklist item")?
            .ok_or(SeedError::UserChecklistItemNotFound { id: user_item_id })?;

        let now_str = Timestamp::now().to_string();

        tx.execute(
            UPDATE_USER_ITEM_SQL,
            params![is_complete, &now_str, user_item_id as i64],
        )
        .db_context("Failed to update user checklist item")?;

        tx.execute(
            REFRESH_COMPLETION_BY_ID_SQL,
            params![&now_str, user_checklist_id as i64],
        )
        .db_context("Failed to refresh user checklist completion")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_user_checklist(user_checklist_id)?
            .ok_or(SeedError::UserChecklistItemNotFound { id: user_item_id })
    }
}
