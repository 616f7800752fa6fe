//! View models for the two screens of the planner
//!
//! They hold what a screen would keep on its own (a selected day, a displayed month, the state of the add dialog),
//! and read every activity from the shared [`ActivityStore`](crate::ActivityStore).

mod form;
pub use form::ActivityForm;
pub mod daily;
pub use daily::DailyView;
pub mod calendar;
pub use calendar::CalendarView;
