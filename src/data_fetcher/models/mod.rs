pub mod page;
pub mod records;

pub use page::{Completeness, Page, PageMeta, Paginated};
pub use records::{Event, IdInfo, SkillRecord, SkillType, Team};
