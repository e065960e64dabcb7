//! Captured panic payloads.

use std::any::Any;
use std::fmt;

/// The payload of a panic caught by [`either`](super::either).
///
/// The payload is kept exactly as it was raised. String payloads (the ones
/// produced by `panic!`) are exposed through [`message`](Self::message);
/// anything raised with [`std::panic::panic_any`] can be recovered with
/// [`downcast`](Self::downcast).
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, if the payload is a string.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Borrows the payload as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Takes the payload out as `T`, or gives the `Panic` back.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the payload is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        self.payload
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(Self::new)
    }

    /// Releases the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => formatter.debug_tuple("Panic").field(&message).finish(),
            None => formatter.write_str("Panic(<non-string payload>)"),
        }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message().unwrap_or("panic with a non-string payload"))
    }
}

impl std::error::Error for Panic {}
