mod app;
mod components;
mod server_liveview;
mod tutor;

pub use server_liveview::{router, start_server};
