pub mod repository;
pub mod service;

pub use repository::{SeaOrmTaskRepository, TaskRepository};
pub use service::{TaskFilter, TaskService};
