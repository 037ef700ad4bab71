//! SQLite option store tests

use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

use optionkit::{OptionStore, OptionValue, OptionsBuilder};
use optionkit_store_adapter_sqlite::StoreAdapterSqlite;

async fn create_test_adapter() -> (StoreAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = StoreAdapterSqlite::new(temp_dir.path().join("options.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

fn as_map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
	value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn test_read_missing_group() {
	let (adapter, _temp) = create_test_adapter().await;

	let result = adapter.read_group("theme_options").await.expect("read should succeed");
	assert_eq!(result, None);
}

#[tokio::test]
async fn test_write_and_read_group() {
	let (adapter, _temp) = create_test_adapter().await;
	let value = as_map(json!({"color": "blue", "layout": {"cols": 2}}));

	let changed = adapter.write_group("theme_options", &value).await.expect("write should succeed");
	assert!(changed, "First write should report a change");

	let result = adapter.read_group("theme_options").await.expect("read should succeed");
	assert_eq!(result, Some(json!({"color": "blue", "layout": {"cols": 2}})));
}

#[tokio::test]
async fn test_write_same_value_reports_no_change() {
	let (adapter, _temp) = create_test_adapter().await;
	let value = as_map(json!({"a": 1}));

	assert!(adapter.write_group("g", &value).await.unwrap());
	assert!(!adapter.write_group("g", &value).await.unwrap());

	let updated = as_map(json!({"a": 2}));
	assert!(adapter.write_group("g", &updated).await.unwrap());
	assert_eq!(adapter.read_group("g").await.unwrap(), Some(json!({"a": 2})));
}

#[tokio::test]
async fn test_groups_are_independent() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.write_group("header", &as_map(json!({"k": "h"}))).await.unwrap();
	adapter.write_group("footer", &as_map(json!({"k": "f"}))).await.unwrap();

	assert_eq!(adapter.read_group("header").await.unwrap(), Some(json!({"k": "h"})));
	assert_eq!(adapter.read_group("footer").await.unwrap(), Some(json!({"k": "f"})));
}

#[tokio::test]
async fn test_persists_across_reopen() {
	let temp_dir = TempDir::new().unwrap();
	let path = temp_dir.path().join("nested").join("options.db");

	{
		let adapter = StoreAdapterSqlite::new(&path).await.unwrap();
		adapter.write_group("g", &as_map(json!({"kept": true}))).await.unwrap();
	}

	let adapter = StoreAdapterSqlite::new(&path).await.unwrap();
	assert_eq!(adapter.read_group("g").await.unwrap(), Some(json!({"kept": true})));
}

#[tokio::test]
async fn test_accessor_round_trip() {
	let (adapter, _temp) = create_test_adapter().await;
	let options = OptionsBuilder::new().store(Arc::new(adapter)).build().unwrap();

	let mut req = options.request();
	assert!(req.update_settings("title=Tom%20%26amp%3B%20Jerry&color=red", None).await);
	assert!(req.update_settings("color=unset", None).await);

	let mut req = options.request();
	assert_eq!(req.get("title", None, true).await, OptionValue::from("Tom & Jerry"));
	assert!(req.get("color", None, true).await.is_empty());
}

// vim: ts=4
