//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use optionkit::{Error, MemoryStore, OptResult, OptionStore};

/// Store wrapper counting reads and writes
#[derive(Debug, Default)]
pub struct CountingStore {
	pub inner: MemoryStore,
	reads: AtomicUsize,
	writes: AtomicUsize,
}

impl CountingStore {
	pub fn new(inner: MemoryStore) -> Arc<Self> {
		Arc::new(Self { inner, reads: AtomicUsize::new(0), writes: AtomicUsize::new(0) })
	}

	pub fn reads(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn writes(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl OptionStore for CountingStore {
	async fn read_group(&self, group: &str) -> OptResult<Option<serde_json::Value>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		self.inner.read_group(group).await
	}

	async fn write_group(
		&self,
		group: &str,
		value: &serde_json::Map<String, serde_json::Value>,
	) -> OptResult<bool> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		self.inner.write_group(group, value).await
	}
}

/// Store whose reads fail, and whose writes fail unless `writable`
#[derive(Debug, Default)]
pub struct FailingStore {
	writable: bool,
	reads: AtomicUsize,
	writes: AtomicUsize,
}

impl FailingStore {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	/// Reads fail but writes would succeed
	pub fn writable() -> Arc<Self> {
		Arc::new(Self { writable: true, ..Self::default() })
	}

	pub fn reads(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn writes(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl OptionStore for FailingStore {
	async fn read_group(&self, _group: &str) -> OptResult<Option<serde_json::Value>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		Err(Error::DbError)
	}

	async fn write_group(
		&self,
		_group: &str,
		_value: &serde_json::Map<String, serde_json::Value>,
	) -> OptResult<bool> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		if self.writable { Ok(true) } else { Err(Error::DbError) }
	}
}

/// Counter shared with a hook closure
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
	pub fn hit(&self) {
		self.0.fetch_add(1, Ordering::SeqCst);
	}

	pub fn get(&self) -> usize {
		self.0.load(Ordering::SeqCst)
	}
}

pub fn init() {
	optionkit::init_tracing();
}

// vim: ts=4
