pub mod api;
pub mod client;
pub mod error;
pub mod traits;

pub use api::PROVIDER_PAGE_SIZE;
pub use client::OmdbClient;
pub use error::TransportError;
pub use traits::{OmdbRequest, OmdbTransport};
