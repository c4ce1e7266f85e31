pub mod noop;
pub mod tracing_sink;
