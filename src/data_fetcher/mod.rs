pub mod api;
pub mod models;

pub use api::{ApiClient, RetryPolicy, Sleeper, TokioSleeper};
pub use models::{Completeness, Event, Paginated, SkillRecord, SkillType, Team};
