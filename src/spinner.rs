// src/spinner.rs
use colored::Colorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const INTERVAL: u64 = 80;
const MAX_LABEL: usize = 60;

#[derive(Clone)]
pub struct Spinner {
    running: Arc<AtomicBool>,
    label: Arc<Mutex<String>>,
    // Shared so clones can stop it; only the first `stop` joins.
    handle: Arc<Mutex<Option<thread::JoinHandle<()>>>>,
}

impl Spinner {
    pub fn start(label: impl Into<String>) -> Self {
        let label_mtx = Arc::new(Mutex::new(label.into()));
        let running = Arc::new(AtomicBool::new(true));

        let r_clone = running.clone();
        let l_clone = label_mtx.clone();

        let handle = thread::spawn(move || {
            let mut i = 0;
            while r_clone.load(Ordering::Relaxed) {
                let frame = FRAMES.get(i % FRAMES.len()).unwrap_or(&"+");
                let text = l_clone
                    .lock()
                    .map(|t| truncate(&t))
                    .unwrap_or_default();

                print!("\r\x1B[2K   {} {}", frame.cyan(), text.dimmed());
                let _ = io::stdout().flush();
                thread::sleep(Duration::from_millis(INTERVAL));
                i += 1;
            }
        });

        Self {
            running,
            label: label_mtx,
            handle: Arc::new(Mutex::new(Some(handle))),
        }
    }

    pub fn stop(&self, success: bool) {
        if !self.running.swap(false, Ordering::Relaxed) {
            return;
        }

        if let Ok(mut guard) = self.handle.lock() {
            if let Some(h) = guard.take() {
                let _ = h.join();
            }
        }

        let icon = if success { "ok".green().bold() } else { "err".red().bold() };
        let text = self
            .label
            .lock()
            .map(|t| truncate(&t))
            .unwrap_or_default();
        println!("\r\x1B[2K   {} {}", icon, text.dimmed());
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_LABEL).collect()
}
