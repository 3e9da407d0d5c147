//! Capture adapters

mod noop;

pub use noop::NoOpCaptureDriver;
