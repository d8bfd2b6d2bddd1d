pub mod generate;
pub mod improve;
pub mod save_feedback;
pub mod save_version;
pub mod service;

pub use generate::GenerateDraftCommand;
pub use improve::ImproveContentCommand;
pub use save_feedback::SaveFeedbackCommand;
pub use save_version::SaveVersionCommand;
pub use service::BlogCommandService;
