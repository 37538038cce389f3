/* src/lib.rs */

//!
//! A change-detecting status publisher.
//!
//! Entities are named and tagged with the feature keys they depend on. When a
//! raw signal source reports a (re)computed status for a feature, the
//! [`ChangePublisher`] re-checks every entity observing that feature and emits
//! exactly one [`ChangeEvent`] per entity whose status actually changed.
//! Redundant signals are suppressed.
//!
//! - **entity**: `Entity`, `FeatureKey`, `StatusString`.
//! - **memo**: `StatusMemo`, the last-known status per entity.
//! - **publisher**: `ChangePublisher`, the diff-and-emit step.
//! - **traits**: the `StatusQuery`, `EnablementRegistry` and `EventBus` contracts.
//! - **bus**: `BroadcastBus` over a tokio broadcast channel.
//! - **signal**: `SignalRelay`, async fan-in of raw signals.
//! - **catalog**: entity declarations loaded from JSON, TOML or YAML.
//!
//! ## Feature Flags
//!
//! - `full` (default): Enables all features.
//! - `bus`: Enables the `bus` module.
//! - `stream`: Enables `ChangeStream` on top of `bus`.
//! - `relay`: Enables the `signal` module.
//! - `catalog`: Enables the `catalog` module.
//! - `fs`, `json`, `toml`, `yaml`: Catalog source/format features.
//! - `validate`: Catalog validation.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod entity;
pub mod memo;
pub mod publisher;
pub mod registry;
pub mod traits;

#[cfg(feature = "bus")]
pub mod bus;

#[cfg(feature = "relay")]
pub mod signal;

#[cfg(feature = "catalog")]
pub mod catalog;

pub use entity::{Entity, FeatureKey, StatusString};
pub use memo::StatusMemo;
pub use publisher::{ChangeEvent, ChangePublisher, PublishError, RawSignal};
pub use registry::InMemoryRegistry;
pub use traits::{EnablementRegistry, EventBus, StatusQuery};

#[cfg(feature = "bus")]
pub use bus::BroadcastBus;
