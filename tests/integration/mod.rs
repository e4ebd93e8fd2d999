//! Integration tests for the sltable listing pipeline

mod config_integration;
mod list_pipeline;
mod test_utils;
