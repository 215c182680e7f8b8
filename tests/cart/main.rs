mod config;
mod file_session_cart;
mod run_command;
mod test_utils;
