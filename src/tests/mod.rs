mod support;

mod error_tests;
