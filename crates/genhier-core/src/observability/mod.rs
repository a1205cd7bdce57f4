//! Tracing initialization.

mod setup;

pub use setup::{
    init_tracing, init_tracing_json, init_tracing_with_config, init_tracing_with_filter,
};
