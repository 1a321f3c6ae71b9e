pub mod batch;
pub mod focus_ops;
pub mod task_ops;
pub mod view;
