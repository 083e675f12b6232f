// Application modules
pub mod web_server;

pub use web_server::run_web_server;
