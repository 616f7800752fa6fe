//! This crate provides a daily and monthly activity planner.
//!
//! Activities (a title, a description, a date and a completion flag) are kept in an [`ActivityStore`](store::ActivityStore). \
//! The store is the single in-memory source of truth: it persists the whole collection through an [`ActivityRepository`](repository::ActivityRepository)
//! after every mutation, and notifies its subscribers.
//!
//! The repository writes to any [`KeyValueStorage`](traits::KeyValueStorage), such as a [`FileStorage`](storage::FileStorage)
//! or a [`MemoryStorage`](storage::MemoryStorage).
//!
//! Two view models read from the store:
//! * a [`DailyView`](view::DailyView), that shows the checklist of a single day,
//! * a [`CalendarView`](view::CalendarView), that shows a month grid built by the [`calendar`] module.

pub mod traits;

mod activity;
pub use activity::{Activity, ActivityId};
pub mod date;
pub mod calendar;
pub use calendar::MonthCursor;

pub mod storage;
pub mod repository;
pub use repository::ActivityRepository;
pub mod store;
pub use store::ActivityStore;
pub mod view;

pub mod config;
pub mod utils;
