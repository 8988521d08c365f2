use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("pump thread exited abnormally")]
    PumpPanicked,
}
