//! End-to-end tests for the `lv` binary

mod cli_basic;
mod config_cli;
