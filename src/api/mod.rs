//! Client side of the remote scheduling service.

pub mod envelope;
pub mod session;
pub mod transport;
pub mod wire;

pub use session::{Credentials, LoginInfo, Session};
pub use transport::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpTransport, Transport};
