//! SQLite-backed option store adapter

#![forbid(unsafe_code)]

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;
use tracing::{debug, warn};

use optionkit_types::prelude::*;
use optionkit_types::store_adapter::OptionStore;

mod group;
mod schema;

use schema::init_db;

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	/// Open (or create) the database file at `path`
	pub async fn new(path: impl AsRef<Path>) -> OptResult<Self> {
		let path = path.as_ref();
		if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(dir).await?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		debug!("Option store opened at {}", path.display());
		Ok(Self { db })
	}
}

#[async_trait]
impl OptionStore for StoreAdapterSqlite {
	async fn read_group(&self, group: &str) -> OptResult<Option<serde_json::Value>> {
		group::read(&self.db, group).await
	}

	async fn write_group(
		&self,
		group: &str,
		value: &serde_json::Map<String, serde_json::Value>,
	) -> OptResult<bool> {
		group::write(&self.db, group, value).await
	}
}

// vim: ts=4
