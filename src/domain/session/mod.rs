mod lifecycle;
mod registry;

pub use lifecycle::{SessionCreated, create_session_endpoint, end_session_endpoint};
pub use registry::{SessionError, Sessions, StorefrontSession};
