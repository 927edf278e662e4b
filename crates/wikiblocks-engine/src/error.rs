use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Allocation failed while growing parse buffer: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("No collision-free separator found after {attempts} attempts")]
    SeparatorCollision { attempts: u32 },
}
