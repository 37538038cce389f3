/* src/catalog/source.rs */

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::CatalogError;

/// Where catalog bytes come from.
#[async_trait]
pub trait Source: Send + Sync {
	/// Reads the raw bytes stored under `key`.
	async fn read(&self, key: &str) -> Result<Vec<u8>, CatalogError>;

	async fn exists(&self, key: &str) -> bool;
}

/// In-memory catalog source, for tests and embedded catalogs.
#[derive(Debug, Default)]
pub struct MemorySource {
	data: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
		self.data.insert(key.into(), value.into());
	}

	/// Builder-style [`insert`](MemorySource::insert).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
		self.insert(key, value);
		self
	}
}

#[async_trait]
impl Source for MemorySource {
	async fn read(&self, key: &str) -> Result<Vec<u8>, CatalogError> {
		self.data.get(key).cloned().ok_or(CatalogError::NotFound)
	}

	async fn exists(&self, key: &str) -> bool {
		self.data.contains_key(key)
	}
}

#[cfg(feature = "fs")]
pub use file::FileSource;

#[cfg(feature = "fs")]
mod file {
	use std::path::{Component, Path, PathBuf};

	use async_trait::async_trait;
	use tokio::fs;

	use super::Source;
	use crate::catalog::CatalogError;

	/// Reads catalogs from files under a root directory.
	///
	/// Keys are paths relative to the root and may not escape it.
	#[derive(Debug, Clone)]
	pub struct FileSource {
		root: PathBuf,
	}

	impl FileSource {
		pub fn new(root: impl Into<PathBuf>) -> Self {
			Self { root: root.into() }
		}

		async fn resolve(&self, key: &str) -> Result<PathBuf, CatalogError> {
			if Path::new(key)
				.components()
				.any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
			{
				return Err(CatalogError::SandboxViolation(key.to_string()));
			}

			let root = fs::canonicalize(&self.root).await?;
			match fs::canonicalize(self.root.join(key)).await {
				// Symlinks may still point outside the root.
				Ok(path) if path.starts_with(&root) => Ok(path),
				Ok(_) => Err(CatalogError::SandboxViolation(key.to_string())),
				Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CatalogError::NotFound),
				Err(e) => Err(CatalogError::Io(e)),
			}
		}
	}

	#[async_trait]
	impl Source for FileSource {
		async fn read(&self, key: &str) -> Result<Vec<u8>, CatalogError> {
			let path = self.resolve(key).await?;
			Ok(fs::read(path).await?)
		}

		async fn exists(&self, key: &str) -> bool {
			self.resolve(key).await.is_ok()
		}
	}
}
