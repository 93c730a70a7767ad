pub mod constants;
pub mod dates;
pub mod error;
pub mod format;

pub use error::{AppError, AuthFailure, Result};
pub use format::ResponseFormat;
