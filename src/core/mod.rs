pub mod builder;
pub mod render;

pub use crate::domain::model::{Address, Port, ServiceName};
pub use crate::domain::ports::ServiceSource;
pub use crate::utils::error::Result;
