pub mod register;
pub mod service;

pub use register::RegisterUserCommand;
pub use service::UserCommandService;
