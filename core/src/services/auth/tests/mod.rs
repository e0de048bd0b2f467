//! Tests for the authentication session facade

mod service_tests;
