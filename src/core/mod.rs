pub mod engine;
pub mod pipeline;
pub mod primes;

pub use crate::domain::model::{PrimeSequence, RunConfig, RunReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
