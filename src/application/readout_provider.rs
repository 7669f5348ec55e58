// Provider trait for the operational readouts
use crate::domain::readouts::Readouts;
use async_trait::async_trait;

#[async_trait]
pub trait ReadoutProvider: Send + Sync {
    /// Latest draught, bit depth and position readouts
    async fn readouts(&self) -> anyhow::Result<Readouts>;
}
