use std::error::Error;

/// Unwrapping for results whose error type is descriptive enough to panic with.
pub(crate) trait ResultExtension<T> {
    /// Returns the contained value, or panics with the [`Display`](std::fmt::Display) message of
    /// the error.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
