//! Background worker for reading the locations payload without blocking the UI.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use covid_tracker_core::{Location, load_locations};

/// Request sent to the background worker
#[derive(Debug)]
pub enum LoadRequest {
    /// Read and parse the payload at `path`
    Load { path: PathBuf },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum LoadResponse {
    /// Payload parsed, locations in display order
    Loaded { locations: Vec<Location> },
    /// Error occurred
    Error(String),
}

/// Background worker that loads location data on a separate thread
#[derive(Debug)]
pub struct LoadWorker {
    request_tx: Sender<LoadRequest>,
    response_rx: Receiver<LoadResponse>,
    thread: Option<JoinHandle<()>>,
}

impl LoadWorker {
    /// Create a new load worker with a background thread
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let thread = thread::spawn(move || {
            run(&request_rx, &response_tx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Send a request to the worker
    ///
    /// Returns false if the worker thread has gone away
    pub fn send(&self, request: LoadRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<LoadResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Shutdown the worker thread
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(LoadRequest::Shutdown);
    }
}

impl Default for LoadWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoadWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run(request_rx: &Receiver<LoadRequest>, response_tx: &Sender<LoadResponse>) {
    while let Ok(request) = request_rx.recv() {
        match request {
            LoadRequest::Shutdown => break,

            LoadRequest::Load { path } => {
                tracing::info!(path = %path.display(), "Loading locations");
                let started = Instant::now();

                let response = match load_locations(&path) {
                    Ok(locations) => {
                        tracing::info!(
                            count = locations.len(),
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "Locations loaded"
                        );
                        LoadResponse::Loaded { locations }
                    }
                    Err(e) => {
                        tracing::error!("Failed to load locations: {e}");
                        LoadResponse::Error(e.to_string())
                    }
                };

                if response_tx.send(response).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("Load worker stopped");
}
