//! Background worker for running sweeps without blocking the UI.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use birthday_core::{SweepConfig, SweepError, SweepResult, TrialCount};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Request sent to the background worker
#[derive(Debug)]
pub enum SweepRequest {
    /// Run a full sweep tagged with the controller's generation
    Run {
        generation: u64,
        trials: TrialCount,
        config: SweepConfig,
    },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum SweepResponse {
    /// Progress update after each group size
    Progress {
        generation: u64,
        current: usize,
        total: usize,
    },
    /// Sweep completed
    Complete { generation: u64, result: SweepResult },
    /// A newer request superseded this sweep
    Cancelled { generation: u64 },
    /// Sweep failed; nothing was produced
    Error { generation: u64, message: String },
}

/// Background worker that runs sweeps on a separate thread
pub struct SweepWorker {
    request_tx: Sender<SweepRequest>,
    response_rx: Receiver<SweepResponse>,
    /// Generation of the most recent request; anything older is stale
    latest_generation: Arc<AtomicU64>,
    thread: Option<JoinHandle<()>>,
}

impl SweepWorker {
    /// Create a new sweep worker with a background thread
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        let latest_generation = Arc::new(AtomicU64::new(0));

        let ctx = WorkerContext {
            response_tx,
            latest_generation: latest_generation.clone(),
        };

        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            latest_generation,
            thread: Some(thread),
        }
    }

    /// Send a request to the worker.
    ///
    /// A `Run` request marks every earlier generation as superseded, which
    /// cancels an in-flight sweep at its next group size.
    pub fn send(&self, request: SweepRequest) -> bool {
        if let SweepRequest::Run { generation, .. } = &request {
            self.latest_generation.store(*generation, Ordering::SeqCst);
        }
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<SweepResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Shutdown the worker thread
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(SweepRequest::Shutdown);
    }
}

impl Default for SweepWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SweepWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Shared state for the background worker thread.
struct WorkerContext {
    response_tx: Sender<SweepResponse>,
    latest_generation: Arc<AtomicU64>,
}

impl WorkerContext {
    fn run(&self, request_rx: Receiver<SweepRequest>) {
        while let Ok(request) = request_rx.recv() {
            match request {
                SweepRequest::Shutdown => break,

                SweepRequest::Run {
                    generation,
                    trials,
                    config,
                } => {
                    if self.is_superseded(generation) {
                        let _ = self.response_tx.send(SweepResponse::Cancelled { generation });
                        continue;
                    }

                    tracing::info!(generation, trials = trials.get(), "Starting sweep");
                    let response = match self.run_sweep(generation, trials, &config) {
                        Ok(result) => {
                            tracing::info!(generation, "Sweep complete");
                            SweepResponse::Complete { generation, result }
                        }
                        Err(SweepError::Cancelled) => {
                            tracing::info!(generation, "Sweep superseded");
                            SweepResponse::Cancelled { generation }
                        }
                        Err(e) => {
                            tracing::error!(generation, error = %e, "Sweep failed");
                            SweepResponse::Error {
                                generation,
                                message: e.to_string(),
                            }
                        }
                    };
                    let _ = self.response_tx.send(response);
                }
            }
        }
    }

    fn run_sweep(
        &self,
        generation: u64,
        trials: TrialCount,
        config: &SweepConfig,
    ) -> Result<SweepResult, SweepError> {
        // Reseeded once per sweep so identical requests draw identical streams
        let mut rng = SmallRng::seed_from_u64(config.seed);
        birthday_core::run_sweep_with_rng(&mut rng, config, trials, |progress| {
            if self.is_superseded(generation) {
                return ControlFlow::Break(());
            }
            let _ = self.response_tx.send(SweepResponse::Progress {
                generation,
                current: progress.completed,
                total: progress.total,
            });
            ControlFlow::Continue(())
        })
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.latest_generation.load(Ordering::SeqCst) != generation
    }
}
