use crate::doer::{Doer, DoerError};

pub const USE_COUNT: i64 = 123;
pub const USE_LABEL: &str = "Hello GoMock";

/// Consumer of a [`Doer`]. Always delegates to the doer it was built with.
pub struct User<'a, D: Doer + ?Sized> {
    doer: &'a D,
}

impl<'a, D> User<'a, D>
where
    D: Doer + ?Sized,
{
    pub fn new(doer: &'a D) -> Self {
        User { doer }
    }

    pub fn doer(&self) -> &'a D {
        self.doer
    }

    /// Calls the doer with `(123, "Hello GoMock")` and hands back its outcome as is.
    pub fn use_doer(&self) -> Result<(), DoerError> {
        self.doer.do_something(USE_COUNT, USE_LABEL)
    }
}
