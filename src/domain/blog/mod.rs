pub mod entity;
pub mod feedback;
pub mod repository;
pub mod timeline;
pub mod value_objects;
pub mod version;

pub use entity::{Blog, BlogWithHistory, NewBlog};
pub use feedback::{FeedbackEvent, FeedbackPolarity, NewFeedbackEvent};
pub use repository::{
    BlogReadRepository, BlogWriteRepository, FeedbackRepository, VersionRepository,
};
pub use timeline::{TimelineEntry, reconcile};
pub use value_objects::{BlogId, BlogTopic, FeedbackId, VersionId};
pub use version::{NewVersion, Version};
