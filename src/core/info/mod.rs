//! Information about the project itself.

pub mod version;

pub use self::version::{name, user_agent, version};
