mod check;
mod config;
mod init;

pub use check::run_check;
pub use config::run_config;
pub use init::run_init;
