//! Service layer providing the task-list operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Depends on a repository trait, never on a concrete database client.

pub mod errors;
pub mod task;
#[cfg(test)]
pub mod test_support;
