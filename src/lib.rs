pub mod config;
pub mod error;
pub mod frontend;
pub mod relay;
pub mod tutor_core;

pub use config::Settings;
pub use error::{TutorError, TutorResult};
pub use frontend::start_server;
