//! Shared fixtures for catalog integration tests

#![allow(dead_code)]

pub mod builders;
pub mod mocks;

pub use builders::*;
pub use mocks::*;

/// Give spawned synchronizer tasks a few scheduler passes to catch up
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
