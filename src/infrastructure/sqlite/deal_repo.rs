use crate::domain::entities::comment::Comment;
use crate::domain::entities::deal::Deal;
use crate::domain::error::DomainError;
use crate::domain::feed::{Cursor, DealPage, FeedFilter};
use crate::domain::ports::deal_repository::{DealQuery, DealRepository};
use crate::domain::values::category::DealCategory;
use crate::domain::values::sort_key::SortKey;
use crate::domain::values::vote_direction::VoteDirection;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

const SELECT_COLS: &str = "id, title, description, category, store, current_price, original_price, hot_votes, cold_votes, comments_count, temperature, created_at, coupon_code, affiliate_url, image_url";

/// Fixed-width UTC timestamps so string order matches time order.
fn timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// ORDER BY clause reproducing `ranking::compare_deals` for each key.
fn order_clause(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Hottest => {
            "ORDER BY temperature DESC, (hot_votes - cold_votes) DESC, created_at DESC, id ASC"
        }
        SortKey::Newest => "ORDER BY created_at DESC, id ASC",
        SortKey::Commented => {
            "ORDER BY comments_count DESC, temperature DESC, (hot_votes - cold_votes) DESC, created_at DESC, id ASC"
        }
    }
}

fn parse_cursor(cursor: Option<&Cursor>) -> Result<usize, DomainError> {
    match cursor {
        None => Ok(0),
        Some(c) => c
            .as_str()
            .strip_prefix("off:")
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| DomainError::InvalidInput(format!("Malformed cursor: {c}"))),
    }
}

fn db_err(e: rusqlite::Error) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Keep the rows that decode, logging the ones that don't.
fn decoded<T>(rows: impl IntoIterator<Item = Result<T, rusqlite::Error>>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|r| match r {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("skipping undecodable row: {e}");
                None
            }
        })
        .collect()
}

pub struct SqliteDealRepo {
    conn: Mutex<Connection>,
}

impl SqliteDealRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_deal(row: &rusqlite::Row) -> Result<Deal, rusqlite::Error> {
        let cat_str: String = row.get(3)?;
        let created_str: String = row.get(11)?;

        Ok(Deal {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            category: cat_str.parse().unwrap_or_else(|_| {
                tracing::warn!("invalid category '{}' in deal, defaulting to other", cat_str);
                DealCategory::Other
            }),
            store: row.get(4)?,
            current_price: row.get(5)?,
            original_price: row.get(6)?,
            hot_votes: row.get(7)?,
            cold_votes: row.get(8)?,
            comments_count: row.get(9)?,
            temperature: row.get(10)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            coupon_code: row.get(12)?,
            affiliate_url: row.get(13)?,
            image_url: row.get(14)?,
        })
    }

    fn deal_exists(conn: &Connection, id: &str) -> Result<bool, DomainError> {
        let found: Option<i64> = conn
            .query_row("SELECT 1 FROM deals WHERE id = ?1", params![id], |r| r.get(0))
            .optional()
            .map_err(db_err)?;
        Ok(found.is_some())
    }
}

impl DealRepository for SqliteDealRepo {
    fn add(&self, deal: &Deal) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            &format!(
                "INSERT INTO deals ({SELECT_COLS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
            ),
            params![
                deal.id,
                deal.title,
                deal.description,
                deal.category.to_string(),
                deal.store,
                deal.current_price,
                deal.original_price,
                deal.hot_votes,
                deal.cold_votes,
                deal.comments_count,
                deal.temperature,
                timestamp(&deal.created_at),
                deal.coupon_code,
                deal.affiliate_url,
                deal.image_url,
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add deal: {e}")))?;
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Deal>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!("SELECT {SELECT_COLS} FROM deals WHERE id = ?1");
        conn.query_row(&sql, params![id], Self::row_to_deal)
            .optional()
            .map_err(db_err)
    }

    fn list(&self, query: &DealQuery) -> Result<Vec<Deal>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM deals WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(cat) = &query.category {
            sql.push_str(&format!(" AND category = ?{}", param_values.len() + 1));
            param_values.push(Box::new(cat.to_string()));
        }
        if let Some(store) = &query.store {
            sql.push_str(&format!(" AND LOWER(store) = LOWER(?{})", param_values.len() + 1));
            param_values.push(Box::new(store.clone()));
        }
        if let Some(text) = &query.text {
            let n = param_values.len() + 1;
            sql.push_str(&format!(
                " AND (title LIKE ?{n} ESCAPE '\\' OR description LIKE ?{n} ESCAPE '\\')"
            ));
            let escaped = text
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            param_values.push(Box::new(format!("%{escaped}%")));
        }

        sql.push_str(" ORDER BY created_at DESC");
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let rows = stmt
            .query_map(params_refs.as_slice(), Self::row_to_deal)
            .map_err(db_err)?;
        Ok(decoded(rows))
    }

    fn fetch_page(
        &self,
        filter: &FeedFilter,
        cursor: Option<&Cursor>,
        page_size: usize,
    ) -> Result<DealPage, DomainError> {
        let offset = parse_cursor(cursor)?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut sql = format!("SELECT {SELECT_COLS} FROM deals WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
        if let Some(cat) = &filter.category {
            sql.push_str(&format!(" AND category = ?{}", param_values.len() + 1));
            param_values.push(Box::new(cat.to_string()));
        }
        sql.push(' ');
        sql.push_str(order_clause(filter.sort));
        // One extra row tells us whether another page exists.
        sql.push_str(&format!(
            " LIMIT ?{} OFFSET ?{}",
            param_values.len() + 1,
            param_values.len() + 2
        ));
        param_values.push(Box::new((page_size + 1) as i64));
        param_values.push(Box::new(offset as i64));

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let rows: Vec<Result<Deal, rusqlite::Error>> = stmt
            .query_map(params_refs.as_slice(), Self::row_to_deal)
            .map_err(db_err)?
            .collect();

        // Paging counts raw rows so a row that fails to decode cannot end the feed.
        let next_cursor = (rows.len() > page_size)
            .then(|| Cursor::new(format!("off:{}", offset + page_size)));
        let deals = decoded(rows.into_iter().take(page_size));
        Ok(DealPage { deals, next_cursor })
    }

    fn record_vote(&self, deal_id: &str, user_id: &str, direction: VoteDirection) -> Result<(), DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction().map_err(db_err)?;
        let column = match direction {
            VoteDirection::Hot => "hot_votes",
            VoteDirection::Cold => "cold_votes",
        };
        let updated = tx
            .execute(
                &format!("UPDATE deals SET {column} = {column} + 1 WHERE id = ?1"),
                params![deal_id],
            )
            .map_err(db_err)?;
        if updated == 0 {
            return Err(DomainError::NotFound(format!("Deal {deal_id}")));
        }
        tx.execute(
            "INSERT INTO votes (deal_id, user_id, direction, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![deal_id, user_id, direction.to_string(), timestamp(&Utc::now())],
        )
        .map_err(db_err)?;
        tx.commit().map_err(db_err)
    }

    fn toggle_favorite(&self, deal_id: &str, user_id: &str) -> Result<bool, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        if !Self::deal_exists(&conn, deal_id)? {
            return Err(DomainError::NotFound(format!("Deal {deal_id}")));
        }
        let removed = conn
            .execute(
                "DELETE FROM favorites WHERE user_id = ?1 AND deal_id = ?2",
                params![user_id, deal_id],
            )
            .map_err(db_err)?;
        if removed > 0 {
            return Ok(false);
        }
        conn.execute(
            "INSERT INTO favorites (user_id, deal_id, created_at) VALUES (?1, ?2, ?3)",
            params![user_id, deal_id, timestamp(&Utc::now())],
        )
        .map_err(db_err)?;
        Ok(true)
    }

    fn favorites(&self, user_id: &str) -> Result<Vec<Deal>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let cols = SELECT_COLS
            .split(", ")
            .map(|c| format!("d.{c}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT {cols} FROM deals d JOIN favorites f ON f.deal_id = d.id
             WHERE f.user_id = ?1 ORDER BY f.created_at DESC, d.id ASC"
        );
        let mut stmt = conn.prepare(&sql).map_err(db_err)?;
        let rows = stmt
            .query_map(params![user_id], Self::row_to_deal)
            .map_err(db_err)?;
        Ok(decoded(rows))
    }

    fn add_comment(&self, comment: &Comment) -> Result<(), DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn.transaction().map_err(db_err)?;
        let updated = tx
            .execute(
                "UPDATE deals SET comments_count = comments_count + 1 WHERE id = ?1",
                params![comment.deal_id],
            )
            .map_err(db_err)?;
        if updated == 0 {
            return Err(DomainError::NotFound(format!("Deal {}", comment.deal_id)));
        }
        tx.execute(
            "INSERT INTO comments (id, deal_id, user_id, body, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                comment.id,
                comment.deal_id,
                comment.user_id,
                comment.body,
                timestamp(&comment.created_at),
            ],
        )
        .map_err(db_err)?;
        tx.commit().map_err(db_err)
    }

    fn comments(&self, deal_id: &str) -> Result<Vec<Comment>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, deal_id, user_id, body, created_at FROM comments
                 WHERE deal_id = ?1 ORDER BY created_at ASC, id ASC",
            )
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![deal_id], |row| {
                let created_str: String = row.get(4)?;
                Ok(Comment {
                    id: row.get(0)?,
                    deal_id: row.get(1)?,
                    user_id: row.get(2)?,
                    body: row.get(3)?,
                    created_at: DateTime::parse_from_rfc3339(&created_str)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                })
            })
            .map_err(db_err)?;
        Ok(decoded(rows))
    }
}
