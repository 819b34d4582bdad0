pub mod engine;
pub mod matcher;
pub mod pipeline;

pub use crate::domain::model::{Assignment, DrawResult, Participant, PriorAssignments, Roster};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
