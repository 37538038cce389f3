/* src/signal/worker.rs */

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::publisher::{ChangePublisher, RawSignal};

pub(crate) async fn forward_signals(mut rx: mpsc::Receiver<RawSignal>, publisher: Arc<ChangePublisher>) {
	while let Some(signal) = rx.recv().await {
		publisher.post_notification(&signal.feature, signal.status);
	}

	tracing::debug!("signal relay drained, all senders dropped");
}
