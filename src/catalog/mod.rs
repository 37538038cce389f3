/* src/catalog/mod.rs */

//!
//! Declarative entity definitions loaded from JSON, TOML or YAML.
//!
//! ```toml
//! [[entity]]
//! name = "vision"
//! features = ["voice_over", "bold_text"]
//! ```

mod error;
pub mod format;
mod loader;
mod source;

pub use error::CatalogError;
pub use format::CatalogFormat;
pub use loader::{CatalogLoader, CatalogLoaderBuilder};
pub use source::{MemorySource, Source};

#[cfg(feature = "fs")]
pub use source::FileSource;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
#[cfg(feature = "validate")]
use validator::Validate;

use crate::entity::Entity;

/// One entity as declared in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validate", derive(validator::Validate))]
pub struct EntityDef {
	#[cfg_attr(feature = "validate", validate(length(min = 1)))]
	pub name: String,
	#[serde(default)]
	pub features: Vec<String>,
}

/// A list of entity declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validate", derive(validator::Validate))]
pub struct EntityCatalog {
	#[serde(default, alias = "entity")]
	#[cfg_attr(feature = "validate", validate(nested))]
	pub entities: Vec<EntityDef>,
	/// Key the catalog was loaded from, if any.
	#[serde(skip)]
	pub origin: Option<String>,
}

impl EntityCatalog {
	/// Trims names and feature keys and drops blank feature keys.
	pub fn normalize(&mut self) {
		for def in &mut self.entities {
			def.name = def.name.trim().to_string();
			def.features = def
				.features
				.iter()
				.map(|f| f.trim())
				.filter(|f| !f.is_empty())
				.map(str::to_string)
				.collect();
		}
	}

	/// Rejects duplicate names and, with `validate`, blank names.
	pub fn check(&self) -> Result<(), CatalogError> {
		#[cfg(feature = "validate")]
		self.validate()?;

		let mut names = HashSet::new();
		for def in &self.entities {
			if !names.insert(def.name.as_str()) {
				return Err(CatalogError::DuplicateEntity {
					name: def.name.clone(),
				});
			}
		}
		Ok(())
	}

	pub fn into_entities(self) -> Result<Vec<Entity>, CatalogError> {
		self.check()?;
		Ok(self
			.entities
			.into_iter()
			.map(|def| Entity::new(def.name, def.features))
			.collect())
	}
}
