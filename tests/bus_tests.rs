/* tests/bus_tests.rs */

#![cfg(feature = "stream")]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::Statuses;
use futures_util::StreamExt;
use statuscast::{BroadcastBus, ChangePublisher, Entity, EventBus, FeatureKey, InMemoryRegistry};

fn setup(statuses: &Arc<Statuses>, bus: &BroadcastBus) -> ChangePublisher {
	ChangePublisher::new(
		vec![Entity::new("A", ["F"]), Entity::new("B", ["F"])],
		statuses.clone(),
		Arc::new(bus.clone()),
		&InMemoryRegistry::new(),
	)
	.unwrap()
}

#[tokio::test]
async fn test_broadcast_delivers_in_emission_order() {
	let statuses = Statuses::new(&[]);
	let bus = BroadcastBus::new();
	let mut rx = bus.subscribe();
	let publisher = setup(&statuses, &bus);

	statuses.set("A", "on");
	statuses.set("B", "on");
	publisher.post_notification(&FeatureKey::from("F"), "on");

	let first = rx.recv().await.unwrap();
	let second = rx.recv().await.unwrap();
	assert_eq!(first.name(), "A");
	assert_eq!(second.name(), "B");
	assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_emit_without_subscribers_is_not_an_error() {
	let bus = BroadcastBus::with_capacity(4);
	assert_eq!(bus.receiver_count(), 0);

	let statuses = Statuses::new(&[]);
	let publisher = setup(&statuses, &bus);
	statuses.set("A", "on");

	assert_eq!(publisher.post_notification(&FeatureKey::from("F"), "on"), 1);
}

#[tokio::test]
async fn test_every_subscriber_gets_each_event() {
	let bus = BroadcastBus::default();
	let mut first = bus.subscribe();
	let mut second = bus.subscribe();
	assert_eq!(bus.receiver_count(), 2);

	let statuses = Statuses::new(&[]);
	let publisher = setup(&statuses, &bus);
	statuses.set("B", "on");
	publisher.post_notification(&FeatureKey::from("F"), "on");

	assert_eq!(first.recv().await.unwrap().name(), "B");
	assert_eq!(second.recv().await.unwrap().name(), "B");
}

#[tokio::test]
async fn test_change_stream() {
	let statuses = Statuses::new(&[]);
	let bus = BroadcastBus::new();
	let mut stream = bus.stream();
	let publisher = setup(&statuses, &bus);

	statuses.set("A", "on");
	publisher.post_notification(&FeatureKey::from("F"), "on");

	let event = tokio::time::timeout(Duration::from_secs(1), stream.next())
		.await
		.unwrap()
		.unwrap()
		.unwrap();
	assert_eq!(event.name(), "A");
	assert_eq!(event.status, "on");
}

#[tokio::test]
async fn test_closure_bus() {
	let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
	let bus = move |event: statuscast::ChangeEvent| {
		let _ = tx.send(event);
	};
	bus.emit(statuscast::ChangeEvent {
		entity: Arc::new(Entity::new("A", ["F"])),
		status: "on".into(),
		cause: None,
		version: 1,
	});

	assert_eq!(rx.recv().await.unwrap().name(), "A");
}
