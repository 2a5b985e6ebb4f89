//! Errors raised while converting a value.
//!
//! Conversions of built-in types cannot fail; every [`Error`] originates in a
//! user-supplied [`ToValue`](crate::ToValue) hook and reaches the caller of
//! [`value_from`](crate::value_from) unchanged, however deeply it was nested.

use core::fmt;

use crate::{Box, String, ToString};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hook rejected its input with a message.
    #[error("{0}")]
    Custom(String),

    /// A hook failed with an underlying error, available as the source.
    #[error("conversion hook failed")]
    Hook(#[source] Box<dyn core::error::Error + Send + Sync + 'static>),
}

impl Error {
    pub fn custom(msg: impl fmt::Display) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn hook<E>(err: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Error::Hook(Box::new(err))
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
