pub mod extract;
pub mod fetcher;
pub mod retry;
pub mod search;
pub mod validator;

pub use crate::domain::model::{ErrorResult, VesselQuery, VesselRecord};
pub use crate::domain::ports::{Chooser, Sleeper};
pub use crate::utils::error::Result;
