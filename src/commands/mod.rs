//! CLI commands for netroute

pub mod compare;
pub mod dispatch;
pub mod generate;
pub mod io;
pub mod request;
pub mod route;
pub mod simulate;
pub mod topology;
