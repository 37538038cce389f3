/* tests/relay_tests.rs */

#![cfg(all(feature = "relay", feature = "bus"))]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::Statuses;
use statuscast::signal::{Config, SignalError, SignalRelay};
use statuscast::{BroadcastBus, ChangeEvent, ChangePublisher, Entity, InMemoryRegistry};
use tokio::sync::broadcast;

fn setup(entities: Vec<Entity>, statuses: &Arc<Statuses>) -> (Arc<ChangePublisher>, broadcast::Receiver<ChangeEvent>) {
	let bus = BroadcastBus::new();
	let rx = bus.subscribe();
	let publisher = ChangePublisher::new(
		entities,
		statuses.clone(),
		Arc::new(bus),
		&InMemoryRegistry::new(),
	)
	.unwrap();
	(Arc::new(publisher), rx)
}

async fn next(rx: &mut broadcast::Receiver<ChangeEvent>) -> ChangeEvent {
	tokio::time::timeout(Duration::from_secs(5), rx.recv())
		.await
		.expect("timed out waiting for event")
		.expect("bus closed")
}

#[tokio::test]
async fn test_relay_forwards_signals() {
	let statuses = Statuses::new(&[("X", "off")]);
	let (publisher, mut rx) = setup(vec![Entity::new("X", ["F"])], &statuses);
	let relay = SignalRelay::spawn(publisher.clone(), Config::default());
	assert!(relay.is_running());

	statuses.set("X", "on");
	relay.post("F", "on").await.unwrap();
	relay.post("F", "on").await.unwrap();
	let first = next(&mut rx).await;

	statuses.set("X", "off");
	relay.post("F", "off").await.unwrap();
	let second = next(&mut rx).await;

	assert_eq!((first.name(), first.status.as_str()), ("X", "on"));
	assert_eq!((second.name(), second.status.as_str()), ("X", "off"));
	assert_eq!(publisher.status("X").unwrap(), "off");
}

#[tokio::test]
async fn test_relay_serializes_concurrent_producers() {
	let statuses = Statuses::new(&[]);
	let entities = (0..4).map(|i| Entity::new(format!("e{i}"), [format!("f{i}")])).collect();
	let (publisher, mut rx) = setup(entities, &statuses);
	let relay = SignalRelay::spawn(publisher, Config { capacity: 2 });

	for i in 0..4 {
		statuses.set(&format!("e{i}"), "on");
	}

	let producers: Vec<_> = (0..4)
		.map(|i| {
			let sender = relay.sender();
			tokio::spawn(async move {
				for _ in 0..10 {
					sender.post(format!("f{i}"), "on").await.unwrap();
				}
			})
		})
		.collect();
	for producer in producers {
		producer.await.unwrap();
	}

	let mut names = Vec::new();
	for _ in 0..4 {
		names.push(next(&mut rx).await.name().to_string());
	}
	names.sort();
	assert_eq!(names, ["e0", "e1", "e2", "e3"]);

	// Redundant signals must not have produced more events.
	tokio::time::sleep(Duration::from_millis(50)).await;
	assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_stopped_relay_rejects_signals() {
	let statuses = Statuses::new(&[]);
	let (publisher, _rx) = setup(vec![Entity::new("X", ["F"])], &statuses);
	let relay = SignalRelay::spawn(publisher, Config::default());
	let sender = relay.sender();

	relay.stop();
	for _ in 0..50 {
		if sender.is_closed() {
			break;
		}
		tokio::time::sleep(Duration::from_millis(10)).await;
	}

	assert!(sender.is_closed());
	assert_eq!(sender.try_post("F", "on"), Err(SignalError::Closed));
	assert_eq!(sender.post("F", "on").await, Err(SignalError::Closed));
}

#[tokio::test]
async fn test_try_post_reports_full_queue() {
	let statuses = Statuses::new(&[]);
	let (publisher, _rx) = setup(vec![Entity::new("X", ["F"])], &statuses);

	// A current-thread runtime never runs the worker while this test holds
	// the thread, so the queue fills up.
	let relay = SignalRelay::spawn(publisher, Config { capacity: 1 });
	let sender = relay.sender();

	assert_eq!(sender.try_post("F", "on"), Ok(()));
	assert_eq!(sender.try_post("F", "on"), Err(SignalError::Full));
}

#[tokio::test]
async fn test_dropped_relay_discards_queued_signals() {
	let statuses = Statuses::new(&[("X", "off")]);
	let (publisher, _rx) = setup(vec![Entity::new("X", ["F"])], &statuses);

	let relay = SignalRelay::spawn(publisher.clone(), Config { capacity: 4 });
	let sender = relay.sender();
	statuses.set("X", "on");
	sender.try_post("F", "on").unwrap();
	sender.try_post("F", "on").unwrap();
	assert_eq!(relay.pending(), 2);

	drop(relay);
	for _ in 0..50 {
		if sender.is_closed() {
			break;
		}
		tokio::time::sleep(Duration::from_millis(10)).await;
	}

	assert!(sender.is_closed());
	assert_eq!(publisher.status("X").unwrap(), "off");
}
