pub mod list;
pub mod service;
pub mod timeline;

pub use list::ListBlogsQuery;
pub use service::BlogQueryService;
pub use timeline::BlogTimelineQuery;
