// Local client plumbing: lockfile credentials, lifecycle watching, and the
// authenticated API adapter.

pub mod client;
pub mod connector;
pub mod lockfile;

// Re-export public types and functions
pub use client::ClientApi;
pub use connector::ClientConnector;
pub use lockfile::Credentials;
