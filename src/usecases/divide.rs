//! # Divide
//!
//! Halves a value after a short delay, standing in for slow work (a network
//! call, a database write) that a store has to await.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

#[async_trait]
pub trait DivideUseCase: Send + Sync {
    async fn execute(&self, value: i64) -> i64;
}

/// The production implementation: waits `delay`, then returns `value / 2`.
pub struct HalvingUseCase {
    delay: Duration,
}

impl HalvingUseCase {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for HalvingUseCase {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::core::config::DEFAULT_DIVIDE_DELAY_MS))
    }
}

#[async_trait]
impl DivideUseCase for HalvingUseCase {
    async fn execute(&self, value: i64) -> i64 {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        debug!("Halved {} after {:?}", value, self.delay);
        value / 2
    }
}
