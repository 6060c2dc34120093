mod command;
mod query;

pub use self::command::TshirtCommandService;
pub use self::query::TshirtQueryService;
