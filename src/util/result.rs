use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`], or panics with the [`Display`](std::fmt::Display) message of the error.
    ///
    /// The reflection API uses this for its panicking accessors, so that their panics read the
    /// same as the errors returned by the fallible versions.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`], reporting the caller's location.
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
