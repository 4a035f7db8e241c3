mod fetch_tests;
mod utils;
