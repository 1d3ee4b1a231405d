use thiserror::Error;

/// Reasons an input is rejected. The trainer treats every one of these as a no-op.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrainerError {
    #[error("Shots can only be identified while playing")]
    NotPlaying,
    #[error("Shot index {index} out of range for {len} shots")]
    InvalidIndex { index: usize, len: usize },
    #[error("Not holding a pattern in memory")]
    NotMemorizing,
    #[error("Advance ticket {ticket} is stale, current ticket is {current}")]
    StaleAdvance { ticket: u32, current: u32 },
}

pub type Result<T> = core::result::Result<T, TrainerError>;
