//! Shared closers and setup for closerset integration tests

#![allow(dead_code)]

use closerset::{BoxError, Closer};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness writer
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Closer that counts its releases and optionally fails or stalls
pub struct CountingCloser {
    counter: Arc<AtomicUsize>,
    fail_with: Option<&'static str>,
    delay: Option<Duration>,
}

impl CountingCloser {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let counter = Arc::new(AtomicUsize::new(0));
        (
            Self {
                counter: Arc::clone(&counter),
                fail_with: None,
                delay: None,
            },
            counter,
        )
    }

    pub fn failing(message: &'static str) -> (Self, Arc<AtomicUsize>) {
        let (mut closer, counter) = Self::new();
        closer.fail_with = Some(message);
        (closer, counter)
    }

    pub fn slow(delay: Duration) -> (Self, Arc<AtomicUsize>) {
        let (mut closer, counter) = Self::new();
        closer.delay = Some(delay);
        (closer, counter)
    }
}

impl Closer for CountingCloser {
    fn close(&mut self) -> Result<(), BoxError> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.counter.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(message) => Err(io::Error::other(message).into()),
            None => Ok(()),
        }
    }
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
