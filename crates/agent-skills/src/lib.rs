//! Skill system for an agent chat backend.
//!
//! Skills are hand-authored markdown documents named `SKILL.md`, one
//! per subdirectory of a skills root, each opening with a frontmatter
//! header. This crate turns such a directory into tool descriptors an
//! agent runtime can list, select, and invoke.
//!
//! This crate provides:
//!
//! - **Frontmatter parser**: reads the minimal YAML subset skill
//!   headers use (flat scalar keys plus `>`/`|` block folding for long
//!   descriptions).
//!
//! - **Skill loader**: discovers `SKILL.md` files one level below a
//!   skills root, skipping anything that does not parse.
//!
//! - **Skill registry**: an explicit value offering `describe` and
//!   `invoke` over the loaded descriptors. Built-in tools carry native
//!   handler functions; disk skills carry a stub handler that confirms
//!   the skill is addressable without executing its body.
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_skills::{SkillInvocation, SkillRegistry};
//!
//! let registry = SkillRegistry::load("skills").unwrap();
//! for tool in registry.descriptors() {
//!     println!("{}: {}", tool.name, tool.description);
//! }
//!
//! let reply = registry.invoke(
//!     "pothole-report",
//!     &SkillInvocation {
//!         query: Some("Elm St and 3rd Ave".into()),
//!     },
//! );
//! println!("{reply}");
//! ```

pub mod error;
pub mod loader;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::{Result, SkillError};
pub use loader::{SKILL_FILE, default_skills_dir, load_all};
pub use parser::parse_frontmatter;
pub use registry::{SkillHandler, SkillRegistry};
pub use types::{SkillInvocation, SkillMetadata, ToolDescriptor, query_input_schema};
