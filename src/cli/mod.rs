mod email;
mod server;

pub use email::send_test_email;
pub use server::serve;
