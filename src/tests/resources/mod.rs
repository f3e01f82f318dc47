mod report_tests;
mod session_tests;
