/* src/catalog/error.rs */

/// Errors raised while loading an entity catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	/// No catalog exists at the given key.
	#[error("catalog not found")]
	NotFound,

	/// The catalog could not be parsed by its format.
	#[error("parse error: {0}")]
	Parse(String),

	/// The path has no extension to pick a format from.
	#[error("missing extension: {0}")]
	MissingExtension(String),

	/// No registered format handles the extension.
	#[error("unsupported format: {0}")]
	UnsupportedFormat(String),

	/// Two entities in the catalog share a name.
	#[error("duplicate entity name: {name}")]
	DuplicateEntity { name: String },

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// A key resolved outside the file source root.
	#[cfg(feature = "fs")]
	#[error("sandbox violation: {0}")]
	SandboxViolation(String),

	#[cfg(feature = "validate")]
	#[error("validation failed: {0}")]
	Validation(#[from] validator::ValidationErrors),

	#[error("builder error: {0}")]
	Builder(&'static str),
}
