/* demos/basic.rs */

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use statuscast::catalog::{CatalogLoader, MemorySource};
use statuscast::signal::{Config as RelayConfig, SignalRelay};
use statuscast::{BroadcastBus, ChangePublisher, InMemoryRegistry, StatusString};

const CATALOG: &str = r#"
[[entity]]
name = "vision"
features = ["voice_over", "bold_text"]

[[entity]]
name = "hearing"
features = ["mono_audio"]
"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 1. Declare entities in a catalog
	let loader = CatalogLoader::builder()
		.source(MemorySource::new().with("entities.toml", CATALOG))
		.all_formats()
		.build()?;
	let entities = loader.load_entities("entities").await?;

	// 2. Feature states; an entity is enabled when any of its features is
	let features: Arc<RwLock<HashMap<&'static str, bool>>> = Arc::default();
	let query = {
		let features = features.clone();
		move |entity: &str| {
			let Ok(f) = features.read() else {
				return StatusString::from(false);
			};
			let on = |key: &str| f.get(key).copied().unwrap_or(false);
			StatusString::from(match entity {
				"vision" => on("voice_over") || on("bold_text"),
				"hearing" => on("mono_audio"),
				_ => false,
			})
		}
	};

	// 3. Wire the publisher to a bus
	let bus = BroadcastBus::new();
	let mut rx = bus.subscribe();
	let registry = InMemoryRegistry::new();
	let publisher = Arc::new(ChangePublisher::new(
		entities,
		Arc::new(query),
		Arc::new(bus),
		&registry,
	)?);
	println!("Observing features: {:?}", registry.enabled());

	// 4. Feed raw signals through the relay
	let relay = SignalRelay::spawn(publisher.clone(), RelayConfig::default());
	for (feature, on) in [("voice_over", true), ("bold_text", true), ("voice_over", false), ("mono_audio", true)] {
		if let Ok(mut f) = features.write() {
			f.insert(feature, on);
		}
		relay.post(feature, StatusString::from(on)).await?;
		tokio::time::sleep(Duration::from_millis(10)).await;
	}

	// 5. Print the transitions
	while let Ok(Ok(event)) = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await {
		println!("{} -> {}", event.name(), event.status);
	}

	println!("Done.");
	Ok(())
}
