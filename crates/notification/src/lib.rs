mod config;
mod email;
mod error;
#[cfg(any(test, feature = "testing"))]
mod memory;
mod resend;
mod service;
mod smtp;

pub use config::*;
pub use email::*;
pub use error::*;
#[cfg(any(test, feature = "testing"))]
pub use memory::*;
pub use resend::*;
pub use service::*;
pub use smtp::*;
