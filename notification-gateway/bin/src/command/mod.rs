mod send_test_email;
mod server;

pub use self::{send_test_email::send_test_email, server::run_server};
