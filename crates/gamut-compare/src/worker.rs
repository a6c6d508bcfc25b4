//! Sweep worker thread.
//!
//! Sweeps are long and synchronous, so they run off the caller's thread.
//! [`SweepWorker`] owns the thread and both channels; the handler inside
//! loops on commands until `Shutdown` or until the handle is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use gamut_map::Registry;

use crate::config::SweepConfig;
use crate::error::{CompareError, CompareResult};
use crate::messages::{Command, Snapshot, SweepEvent, WorkerMsg};
use crate::sweep::{Outcome, Sweep};

/// Worker loop state.
struct SweepHandler {
    rx: Receiver<WorkerMsg>,
    tx: Sender<SweepEvent>,
    registry: Arc<Registry>,
    cancel: Arc<AtomicBool>,
}

impl SweepHandler {
    fn run(self) {
        while let Ok(msg) = self.rx.recv() {
            match msg {
                WorkerMsg::Shutdown => break,
                WorkerMsg::Run(config) => self.run_sweep(config),
            }
        }
        debug!("sweep worker shutdown");
    }

    fn send(&self, event: SweepEvent) {
        let _ = self.tx.send(event);
    }

    fn run_sweep(&self, config: SweepConfig) {
        let result = Sweep::new(&self.registry, config)
            .and_then(|sweep| sweep.run(&self.cancel, |snap| self.send(SweepEvent::Progress(snap.clone()))));
        // Cancellation applies to one run only.
        self.cancel.store(false, Ordering::Relaxed);

        match result {
            Ok(Outcome::Finished(snap)) => self.send(SweepEvent::Finished(snap)),
            Ok(Outcome::Cancelled(snap)) => self.send(SweepEvent::Cancelled(snap)),
            Err(e) => {
                warn!(error = %e, "sweep failed");
                self.send(SweepEvent::Failed(e.to_string()));
            }
        }
    }
}

/// Handle to a sweep worker thread.
///
/// Dropping the handle stops the worker and joins it.
pub struct SweepWorker {
    tx: Sender<WorkerMsg>,
    rx: Receiver<SweepEvent>,
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl SweepWorker {
    /// Spawns a worker mapping with `registry`.
    pub fn spawn(registry: Arc<Registry>) -> Self {
        let (tx_to_worker, rx_in_worker) = channel();
        let (tx_to_caller, rx_from_worker) = channel();
        let cancel = Arc::new(AtomicBool::new(false));

        let handler = SweepHandler {
            rx: rx_in_worker,
            tx: tx_to_caller,
            registry,
            cancel: Arc::clone(&cancel),
        };
        let worker = thread::Builder::new()
            .name("gamut-sweep".into())
            .spawn(move || handler.run());

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "failed to spawn sweep worker");
                None
            }
        };

        Self {
            tx: tx_to_worker,
            rx: rx_from_worker,
            cancel,
            worker,
        }
    }

    /// Queues a sweep.
    pub fn run(&self, config: SweepConfig) -> CompareResult<()> {
        self.tx
            .send(WorkerMsg::Run(config))
            .map_err(|_| CompareError::WorkerDisconnected)
    }

    /// Queues a sweep from an external command.
    pub fn send_command(&self, command: Command) -> CompareResult<()> {
        self.run(command.into_config())
    }

    /// Asks the current (or next) sweep to stop at the next candidate.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Blocks for the next event.
    pub fn recv(&self) -> CompareResult<SweepEvent> {
        self.rx.recv().map_err(|_| CompareError::WorkerDisconnected)
    }

    /// Next event if one is ready.
    pub fn try_recv(&self) -> CompareResult<Option<SweepEvent>> {
        match self.rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(CompareError::WorkerDisconnected),
        }
    }

    /// Queues `config` and blocks until the run ends, forwarding progress
    /// snapshots to `on_progress`.
    pub fn run_blocking(&self, config: SweepConfig, mut on_progress: impl FnMut(&Snapshot)) -> CompareResult<SweepEvent> {
        self.run(config)?;
        loop {
            match self.recv()? {
                SweepEvent::Progress(snap) => on_progress(&snap),
                terminal => return Ok(terminal),
            }
        }
    }
}

impl Drop for SweepWorker {
    fn drop(&mut self) {
        self.cancel();
        let _ = self.tx.send(WorkerMsg::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
