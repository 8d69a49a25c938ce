pub mod oneshot;
pub mod session;

pub use oneshot::run_once;
pub use session::{parse_command, run_session, Command};
