//! Skill discovery: walks a skills directory and produces tool
//! descriptors.
//!
//! Skills live one per subdirectory, each holding a `SKILL.md` file.
//! Discovery is best-effort: subdirectories without that file, or whose
//! file is not a frontmatter document, are skipped rather than
//! reported as errors.

use std::path::{Path, PathBuf};

use crate::error::{Result, SkillError};
use crate::parser::parse_frontmatter;
use crate::types::ToolDescriptor;

/// Name of the skill definition file inside each skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Load all skills under `dir` into tool descriptors.
///
/// A missing root directory yields an empty list: the project simply
/// has no skills yet. Order follows filesystem enumeration and is not
/// sorted.
pub fn load_all(dir: &Path) -> Result<Vec<ToolDescriptor>> {
    if !dir.exists() {
        tracing::debug!(path = %dir.display(), "skills directory does not exist");
        return Ok(Vec::new());
    }

    let mut descriptors = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(SkillError::Io)? {
        let entry = entry.map_err(SkillError::Io)?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        let skill_md = path.join(SKILL_FILE);
        if !skill_md.exists() {
            tracing::trace!(path = %path.display(), "no SKILL.md, skipping");
            continue;
        }

        match load_skill(&skill_md, &path) {
            Ok(descriptor) => {
                tracing::info!(name = %descriptor.name, "loaded skill");
                descriptors.push(descriptor);
            }
            Err(e) => {
                tracing::warn!(
                    path = %skill_md.display(),
                    error = %e,
                    "failed to load skill"
                );
            }
        }
    }

    tracing::info!(count = descriptors.len(), dir = %dir.display(), "skills loaded");
    Ok(descriptors)
}

/// Parse one skill file. The descriptor records the skill's directory
/// as its source location.
fn load_skill(skill_md: &Path, skill_dir: &Path) -> Result<ToolDescriptor> {
    let content = std::fs::read_to_string(skill_md)?;
    let metadata = parse_frontmatter(&content)?;
    Ok(ToolDescriptor::from_metadata(&metadata, skill_dir))
}

/// Default skills directory.
///
/// `$AGENT_SKILLS_DIR` when set, otherwise `.claude/skills` relative to
/// the working directory.
pub fn default_skills_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("AGENT_SKILLS_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from(".claude/skills")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
