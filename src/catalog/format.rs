/* src/catalog/format.rs */

use serde::de::DeserializeOwned;

use super::CatalogError;

/// Catalog file formats, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
}

impl CatalogFormat {
	/// Every format compiled into this build.
	pub const ALL: &'static [CatalogFormat] = &[
		#[cfg(feature = "json")]
		CatalogFormat::Json,
		#[cfg(feature = "toml")]
		CatalogFormat::Toml,
		#[cfg(feature = "yaml")]
		CatalogFormat::Yaml,
	];

	pub fn extensions(&self) -> &'static [&'static str] {
		match *self {
			#[cfg(feature = "json")]
			Self::Json => &["json"],
			#[cfg(feature = "toml")]
			Self::Toml => &["toml"],
			#[cfg(feature = "yaml")]
			Self::Yaml => &["yaml", "yml"],
		}
	}

	pub fn from_extension(ext: &str) -> Option<Self> {
		Self::ALL
			.iter()
			.copied()
			.find(|format| format.extensions().contains(&ext))
	}

	pub fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, CatalogError> {
		match *self {
			#[cfg(feature = "json")]
			Self::Json => serde_json::from_slice(input).map_err(|e| CatalogError::Parse(e.to_string())),
			#[cfg(feature = "toml")]
			Self::Toml => {
				let s = std::str::from_utf8(input).map_err(|e| CatalogError::Parse(e.to_string()))?;
				toml::from_str(s).map_err(|e| CatalogError::Parse(e.to_string()))
			}
			#[cfg(feature = "yaml")]
			Self::Yaml => serde_yaml::from_slice(input).map_err(|e| CatalogError::Parse(e.to_string())),
		}
	}
}
