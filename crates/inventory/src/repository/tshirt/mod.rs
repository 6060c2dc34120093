mod command;
mod query;

pub use self::command::TshirtCommandRepository;
pub use self::query::TshirtQueryRepository;
