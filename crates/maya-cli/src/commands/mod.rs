pub mod analyze;
pub mod delete;
pub mod dispatch;
pub mod history;
pub mod logs;
pub mod pages;
pub mod shared;
pub mod show;
