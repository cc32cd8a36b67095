/// GitHub API layer: blocking events client and typed fetch errors.
pub mod client;
pub mod errors;

pub use client::EventsClient;
pub use errors::FetchError;
