//! Application core: configuration, auth session, routing, polling

pub mod config;
pub mod poller;
pub mod routing;
pub mod session;

pub use config::Config;
pub use poller::Poller;
pub use routing::{resolve, role_home, RouteDecision};
pub use session::{AuthSession, SessionStore};
