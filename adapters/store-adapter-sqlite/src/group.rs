//! Option group storage
//!
//! Each group is one row holding the group document as JSON text.

use sqlx::{Row, SqlitePool};
use tracing::warn;

use optionkit_types::prelude::*;

fn parse(group: &str, text: Option<String>) -> Option<serde_json::Value> {
	let text = text?;
	serde_json::from_str(&text)
		.inspect_err(|err| warn!("Unparseable options group '{}': {}", group, err))
		.ok()
}

/// Read a group document
pub(crate) async fn read(db: &SqlitePool, group: &str) -> OptResult<Option<serde_json::Value>> {
	let row = sqlx::query("SELECT value FROM options WHERE grp = ?")
		.bind(group)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(row.and_then(|r| parse(group, r.get("value"))))
}

/// Replace a group document, returning whether it changed
pub(crate) async fn write(
	db: &SqlitePool,
	group: &str,
	value: &serde_json::Map<String, serde_json::Value>,
) -> OptResult<bool> {
	let value = serde_json::Value::Object(value.clone());
	let mut tx = db
		.begin()
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	let current = sqlx::query("SELECT value FROM options WHERE grp = ?")
		.bind(group)
		.fetch_optional(&mut *tx)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?
		.and_then(|r| parse(group, r.get("value")));

	if current.as_ref() == Some(&value) {
		return Ok(false);
	}

	sqlx::query(
		"INSERT OR REPLACE INTO options (grp, value, updated_at) VALUES (?, ?, unixepoch())",
	)
	.bind(group)
	.bind(value.to_string())
	.execute(&mut *tx)
	.await
	.inspect_err(|err| warn!("DB: {:#?}", err))
	.map_err(|_| Error::DbError)?;

	tx.commit()
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(true)
}

// vim: ts=4
