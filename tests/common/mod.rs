#![allow(dead_code)]

pub mod mock_core;
pub mod ring_logger;

pub use mock_core::{
    Call, CallLog, FailingSink, MockCore, MockUpscaler, RecordingSink, RejectingSink,
    mock_upscalers,
};
pub use ring_logger::{init_logger, take_log};

use gumak_bench::config::HarnessConfig;

/// Default scenario writing into `out/`, reference grid included.
pub fn test_config() -> HarnessConfig {
    HarnessConfig {
        output_dir: "out".into(),
        ..HarnessConfig::default()
    }
}
