mod core_error_tests;
