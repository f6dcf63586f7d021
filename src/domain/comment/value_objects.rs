use crate::domain::errors::{DomainError, DomainResult};

/// Commenter name, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAuthor(String);

impl CommentAuthor {
    pub fn new(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidComment("name cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Comment body, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidComment("text cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_trimmed() {
        assert_eq!(CommentAuthor::new("  Ana ").unwrap().as_str(), "Ana");
        assert_eq!(CommentText::new("\nGreat read\t").unwrap().as_str(), "Great read");
    }

    #[test]
    fn blank_values_are_rejected() {
        assert!(CommentAuthor::new("   ").is_err());
        assert!(CommentText::new("").is_err());
    }
}
