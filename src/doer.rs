use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoerError {
    #[error("error: {label} != {count}")]
    Mismatch { label: String, count: i64 },
    #[error("{0}")]
    Failed(String),
}

/// With the `mock` feature (and in tests) mockall generates `MockDoer` from this trait.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Doer {
    fn do_something(&self, count: i64, label: &str) -> Result<(), DoerError>;
}

impl<D: Doer + ?Sized> Doer for &D {
    fn do_something(&self, count: i64, label: &str) -> Result<(), DoerError> {
        (**self).do_something(count, label)
    }
}

impl<D: Doer + ?Sized> Doer for Box<D> {
    fn do_something(&self, count: i64, label: &str) -> Result<(), DoerError> {
        (**self).do_something(count, label)
    }
}

/// Succeeds only when `label` is the decimal form of `count`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealDoer {}

impl RealDoer {
    pub fn new() -> Self {
        RealDoer {}
    }
}

impl Doer for RealDoer {
    fn do_something(&self, count: i64, label: &str) -> Result<(), DoerError> {
        debug!("DoSomething {} {} times", label, count);

        if count.to_string() == label {
            return Ok(());
        }

        Err(DoerError::Mismatch {
            label: label.to_string(),
            count,
        })
    }
}
