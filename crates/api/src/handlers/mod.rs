pub mod task;
pub mod view;
