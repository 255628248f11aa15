//! Votable persistence.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Row};

use super::utils::{encode_list, id_column, list_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Votable, VotableSeed, VotableType},
};

const INSERT_VOTABLE_SQL: &str = "INSERT INTO votables (type, name, description, tags, prestige_score, vote_count, registered_user_votes, guest_votes, website, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_VOTABLES_SQL: &str = "SELECT id, type, name, description, tags, prestige_score, vote_count, registered_user_votes, guest_votes, website, created_at FROM votables ORDER BY id";

fn build_votable_from_row(row: &Row) -> rusqlite::Result<Votable> {
    let type_str: String = row.get(1)?;
    let votable_type = type_str.parse::<VotableType>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, e.into())
    })?;

    Ok(Votable {
        id: id_column(row, 0)?,
        votable_type,
        name: row.get(2)?,
        description: row.get(3)?,
        tags: list_column(row, 4)?,
        prestige_score: row.get(5)?,
        vote_count: row.get(6)?,
        registered_user_votes: row.get(7)?,
        guest_votes: row.get(8)?,
        website: row.get(9)?,
        created_at: timestamp_column(row, 10)?,
    })
}

impl super::Database {
    /// Inserts a votable from a seed record whose type was already parsed.
    ///
    /// Absent counters are stored as zero.
    pub fn create_votable(&mut self, votable_type: VotableType, seed: &VotableSeed) -> Result<Votable> {
        let now = Timestamp::now();
        let tags = seed.tags.clone().unwrap_or_default();
        let encoded_tags = encode_list(&tags)?;

        self.connection
            .execute(
                INSERT_VOTABLE_SQL,
                params![
                    votable_type.as_str(),
                    &seed.name,
                    seed.description.as_deref(),
                    encoded_tags.as_deref(),
                    seed.prestige_score.unwrap_or(0),
                    seed.vote_count.unwrap_or(0),
                    seed.registered_user_votes.unwrap_or(0),
                    seed.guest_votes.unwrap_or(0),
                    seed.website.as_deref(),
                    now.to_string()
                ],
            )
            .db_context("Failed to insert votable")?;

        Ok(Votable {
            id: self.connection.last_insert_rowid() as u64,
            votable_type,
            name: seed.name.clone(),
            description: seed.description.clone(),
            tags,
            prestige_score: seed.prestige_score.unwrap_or(0),
            vote_count: seed.vote_count.unwrap_or(0),
            registered_user_votes: seed.registered_user_votes.unwrap_or(0),
            guest_votes: seed.guest_votes.unwrap_or(0),
            website: seed.website.clone(),
            created_at: now,
        })
    }

    /// Lists all votables in insertion order.
    pub fn list_votables(&self) -> Result<Vec<Votable>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_VOTABLES_SQL)
            .db_context("Failed to prepare votable query")?;

        let votables = stmt
            .query_map([], build_votable_from_row)
            .db_context("Failed to query votables")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch votables")?;

        Ok(votables)
    }
}
