//! Unit tests for the prediction SDK

pub mod presenter_tests;
