mod command;
mod email;
mod submission;
mod types;

pub use command::*;
pub use email::*;
pub use submission::*;
pub use types::*;
