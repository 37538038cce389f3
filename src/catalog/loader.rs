/* src/catalog/loader.rs */

use super::{CatalogError, CatalogFormat, EntityCatalog, Source};
use crate::entity::Entity;

/// Loads entity catalogs from a [`Source`], picking the parser by extension.
pub struct CatalogLoader {
	source: Box<dyn Source>,
	formats: Vec<CatalogFormat>,
}

pub struct CatalogLoaderBuilder {
	source: Option<Box<dyn Source>>,
	formats: Vec<CatalogFormat>,
}

impl CatalogLoaderBuilder {
	pub fn new() -> Self {
		Self {
			source: None,
			formats: Vec::new(),
		}
	}

	pub fn source(mut self, source: impl Source + 'static) -> Self {
		self.source = Some(Box::new(source));
		self
	}

	/// Registers a format. Formats are probed in registration order.
	pub fn format(mut self, format: CatalogFormat) -> Self {
		if !self.formats.contains(&format) {
			self.formats.push(format);
		}
		self
	}

	pub fn all_formats(mut self) -> Self {
		for format in CatalogFormat::ALL {
			self = self.format(*format);
		}
		self
	}

	pub fn build(self) -> Result<CatalogLoader, CatalogError> {
		let source = self
			.source
			.ok_or(CatalogError::Builder("source is required"))?;
		if self.formats.is_empty() {
			return Err(CatalogError::Builder("at least one format is required"));
		}
		Ok(CatalogLoader {
			source,
			formats: self.formats,
		})
	}
}

impl Default for CatalogLoaderBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl CatalogLoader {
	pub fn builder() -> CatalogLoaderBuilder {
		CatalogLoaderBuilder::new()
	}

	/// Finds `<base_name>.<ext>` for the registered formats and loads it.
	///
	/// The first match wins; any later match is reported and ignored.
	pub async fn load(&self, base_name: &str) -> Result<EntityCatalog, CatalogError> {
		let mut found: Option<(String, CatalogFormat)> = None;

		for format in &self.formats {
			for ext in format.extensions() {
				let key = format!("{base_name}.{ext}");
				if !self.source.exists(&key).await {
					continue;
				}
				if let Some((first, _)) = &found {
					tracing::warn!(base_name, using = %first, ignoring = %key, "multiple catalogs found");
					continue;
				}
				found = Some((key, *format));
			}
		}

		let (key, format) = found.ok_or(CatalogError::NotFound)?;
		self.load_explicit(&key, format).await
	}

	/// Loads a specific path, selecting the parser by its extension.
	pub async fn load_file(&self, path: &str) -> Result<EntityCatalog, CatalogError> {
		let ext = path
			.rsplit_once('.')
			.map(|(_, ext)| ext)
			.ok_or_else(|| CatalogError::MissingExtension(path.to_string()))?;

		let format = self
			.formats
			.iter()
			.copied()
			.find(|f| f.extensions().contains(&ext))
			.ok_or_else(|| CatalogError::UnsupportedFormat(ext.to_string()))?;

		self.load_explicit(path, format).await
	}

	/// Loads, checks and converts the catalog at `base_name` into entities.
	pub async fn load_entities(&self, base_name: &str) -> Result<Vec<Entity>, CatalogError> {
		self.load(base_name).await?.into_entities()
	}

	async fn load_explicit(&self, key: &str, format: CatalogFormat) -> Result<EntityCatalog, CatalogError> {
		let bytes = self.source.read(key).await?;
		let mut catalog: EntityCatalog = format.parse(&bytes)?;

		catalog.normalize();
		catalog.check()?;
		catalog.origin = Some(key.to_string());

		tracing::debug!(key, entities = catalog.entities.len(), "entity catalog loaded");
		Ok(catalog)
	}
}

impl std::fmt::Debug for CatalogLoader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CatalogLoader")
			.field("formats", &self.formats)
			.finish_non_exhaustive()
	}
}
