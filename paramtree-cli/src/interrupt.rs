//! Removal of scratch space when the process is interrupted.
//!
//! Dropping a [`WorkDir`] cleans it up on normal and error exits. A SIGINT or
//! SIGTERM terminates without running destructors, so the path of the live
//! scratch directory is also registered here and removed by the signal
//! handler before exiting.

use paramtree::WorkDir;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Exit code used after an interrupt.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Tracks the scratch directory that must be removed on interrupt.
#[derive(Debug, Clone, Default)]
pub struct ScratchRegistry {
    current: Arc<Mutex<Option<PathBuf>>>,
}

impl ScratchRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the SIGINT/SIGTERM handler.
    pub fn install(&self) -> Result<(), ctrlc::Error> {
        let registry = self.clone();
        ctrlc::set_handler(move || {
            registry.remove_current();
            eprintln!("ERROR: interrupted");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        })
    }

    /// Register `scratch` as the live scratch directory.
    pub fn track(&self, scratch: &WorkDir) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some(scratch.path().to_path_buf());
        }
    }

    /// Forget the live scratch directory (it is about to be dropped).
    pub fn release(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }

    /// Currently registered scratch directory, if any.
    pub fn current(&self) -> Option<PathBuf> {
        self.current.lock().ok().and_then(|current| current.clone())
    }

    fn remove_current(&self) {
        if let Some(path) = self.current() {
            let _ = fs::remove_dir_all(path);
        }
    }
}
