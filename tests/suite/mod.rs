//! Integration test modules

mod session;
mod toast;
