use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use classifier_core::{Generation, JobRecord};
use classifier_logging::{classifier_error, classifier_info};

use crate::client::{Classifier, ClientSettings, ReqwestClassifier};
use crate::{EngineDisconnected, EngineEvent, TransportError, TransportErrorKind};

enum EngineCommand {
    Classify {
        generation: Generation,
        record: JobRecord,
    },
}

/// Runs classification requests on a background tokio runtime.
///
/// Commands go in over a channel; each request reports back exactly one
/// [`EngineEvent::Settled`], even when the classifier panics. Once the
/// engine thread is gone the event side reports [`EngineDisconnected`].
pub struct EngineHandle {
    cmd_tx: Option<mpsc::Sender<EngineCommand>>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        Self::with_classifier(Arc::new(ReqwestClassifier::new(settings)))
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    // Dropping the channels here surfaces as a disconnected engine.
                    classifier_error!("Failed to start classifier runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let classifier = classifier.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(handle_command(classifier, command, event_tx));
            }
            classifier_info!("Classifier engine shutting down");
        });

        Self {
            cmd_tx: Some(cmd_tx),
            event_rx,
        }
    }

    /// Returns false if the engine thread is gone.
    pub fn classify(&self, generation: Generation, record: JobRecord) -> bool {
        self.cmd_tx.as_ref().is_some_and(|cmd_tx| {
            cmd_tx
                .send(EngineCommand::Classify { generation, record })
                .is_ok()
        })
    }

    /// Stops accepting commands. The engine thread then exits, abandoning
    /// whatever is still running, and the event side disconnects.
    pub fn shutdown(&mut self) {
        self.cmd_tx = None;
    }

    /// `Ok(None)` when nothing has settled yet.
    pub fn try_recv(&self) -> Result<Option<EngineEvent>, EngineDisconnected> {
        match self.event_rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(EngineDisconnected),
        }
    }

    /// `Ok(None)` when `timeout` elapsed without a settle.
    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<Option<EngineEvent>, EngineDisconnected> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EngineDisconnected),
        }
    }
}

async fn handle_command(
    classifier: Arc<dyn Classifier>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Classify { generation, record } => {
            // A panicking classifier still has to settle its generation.
            let task = tokio::spawn(async move { classifier.classify(&record).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    classifier_error!("Classification task {} failed: {}", generation, err);
                    Err(TransportError::new(
                        TransportErrorKind::NetworkFailure,
                        format!("classification task failed: {err}"),
                    ))
                }
            };
            let _ = event_tx.send(EngineEvent::Settled { generation, result });
        }
    }
}
