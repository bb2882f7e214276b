pub mod check;

pub use check::{FAILURE_MESSAGE, apply_cli_overrides, load_config, run, run_check};
