//! Test doubles for encoders

use async_trait::async_trait;
use lingvec_common::{LingvecError, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::encoder::TextEncoder;

/// Deterministic bag-of-words encoder: each token bumps one bucket
pub struct StubEncoder {
    name: String,
    dimension: AtomicUsize,
    fail: AtomicBool,
    inputs: Mutex<Vec<String>>,
}

impl StubEncoder {
    pub fn new(name: &str, dimension: usize) -> Self {
        Self {
            name: name.to_string(),
            dimension: AtomicUsize::new(dimension),
            fail: AtomicBool::new(false),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(name: &str) -> Self {
        let encoder = Self::new(name, 1);
        encoder.set_failing();
        encoder
    }

    pub fn set_failing(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn set_dimension(&self, dimension: usize) {
        self.dimension.store(dimension, Ordering::SeqCst);
    }

    /// Every text this encoder was asked to encode
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextEncoder for StubEncoder {
    fn model_name(&self) -> &str {
        &self.name
    }

    async fn encode(&self, text: &str) -> Result<Vec<f32>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(LingvecError::encoding("stub failure"));
        }
        self.inputs.lock().unwrap().push(text.to_string());

        let dimension = self.dimension.load(Ordering::SeqCst);
        let mut vector = vec![0.0; dimension];
        for token in text.split_whitespace() {
            let hash = token
                .bytes()
                .fold(0xcbf29ce484222325u64, |h, b| (h ^ b as u64).wrapping_mul(0x100000001b3));
            vector[(hash % dimension as u64) as usize] += 1.0;
        }
        Ok(vector)
    }
}
