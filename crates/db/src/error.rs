use spms_core::error::CoreError;

/// Error returned by repository methods that enforce domain rules inside a
/// transaction (status transitions, roster writes).
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
