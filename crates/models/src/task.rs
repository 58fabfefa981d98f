use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Maximum body length, counted in characters.
pub const MAX_BODY_CHARS: usize = 500;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub body: String,
    pub archive: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body must be present (non-blank) and at most [`MAX_BODY_CHARS`] characters.
pub fn validate_body(body: &str) -> Result<(), errors::ModelError> {
    if body.trim().is_empty() {
        return Err(errors::ModelError::Validation("body: required".into()));
    }
    if body.chars().count() > MAX_BODY_CHARS {
        return Err(errors::ModelError::Validation(format!(
            "body: max-length {} exceeded",
            MAX_BODY_CHARS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_body_within_limit() {
        assert!(validate_body("buy milk").is_ok());
        assert!(validate_body(&"x".repeat(MAX_BODY_CHARS)).is_ok());
    }

    #[test]
    fn rejects_empty_and_blank_body() {
        assert!(matches!(validate_body(""), Err(errors::ModelError::Validation(_))));
        assert!(matches!(validate_body("   "), Err(errors::ModelError::Validation(_))));
    }

    #[test]
    fn rejects_body_over_limit() {
        let long = "x".repeat(MAX_BODY_CHARS + 1);
        assert!(matches!(validate_body(&long), Err(errors::ModelError::Validation(_))));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 500 multibyte chars is within the limit even though it is 1500 bytes.
        let multibyte = "あ".repeat(MAX_BODY_CHARS);
        assert!(validate_body(&multibyte).is_ok());
    }
}
