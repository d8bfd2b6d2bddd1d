pub mod blogs;
pub mod users;

pub use blogs::{BlogDto, BlogWithHistoryDto, FeedbackDto, TimelineEntryDto, VersionDto};
pub use users::UserDto;
