//! Error types for the skills subsystem.

/// Skill-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    /// The document does not open and close with bare `---` delimiter
    /// lines. Non-fatal: the loader treats such files as "not a skill"
    /// and skips them.
    #[error("document has no frontmatter header")]
    NotFrontmatter,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkillError>;
