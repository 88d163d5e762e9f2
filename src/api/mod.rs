// Provider API modules
pub mod client;
pub mod droplets;

// Re-export commonly used items
pub use client::{is_verbose, request_echo, response_echo, set_verbose, ApiClient};
pub use droplets::{list_droplets, DROPLETS_PER_PAGE};
