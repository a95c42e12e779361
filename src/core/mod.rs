//! Core utilities shared by the parser front-end.

mod datetime;

pub use datetime::{format_task_datetime, parse_task_datetime, DATE_TIME_FORMAT, DATE_TIME_PATTERN};
