//! Integration tests for the netroute CLI

mod compare;
mod errors;
mod generate;
mod request;
mod route;
mod simulate;
mod support;
mod topology;
