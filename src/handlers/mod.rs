pub mod health;
pub mod create;
pub mod get;
pub mod list;
pub mod fallback;

pub use health::health_handler;
pub use create::create_handler;
pub use get::get_handler;
pub use list::list_handler;
pub use fallback::not_found_handler;
