pub mod account;
pub mod apportionment;
pub mod daily_hours;
pub mod event;
pub mod event_kind;
