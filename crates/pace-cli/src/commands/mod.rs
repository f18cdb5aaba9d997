pub mod compare;
pub mod dispatch;
pub mod log;
pub mod news;
pub mod roster;
pub mod schema;
pub mod shared;
pub mod teams;
pub mod time;
