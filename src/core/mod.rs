pub mod batch;
pub mod blocks;
pub mod calendar;
pub mod days;
pub mod events;
