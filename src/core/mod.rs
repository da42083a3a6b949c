pub mod config;
pub mod describe;
pub mod error;
pub mod info;
pub mod policy;
pub mod resolver;

pub use config::Config;
pub use describe::{Describe, Distance};
pub use error::{DescribeError, Error, Result};
pub use info::version::version;
pub use resolver::{Fallback, Resolution, Resolver, resolve};
