//! Fetch orchestration: tagged requests and loading-indicator pacing.

mod orchestrator;
mod pacing;

pub use orchestrator::{execute, FetchOrchestrator, FetchOutcome, RequestTag};
pub use pacing::LoadingPacer;
