//! Skill registry: holds the loaded tool descriptors and the handler
//! used to invoke each one.
//!
//! The registry is an explicit value built by [`SkillRegistry::load`]
//! and passed to whatever component issues tool calls; there is no
//! process-wide singleton. Built-in tools are pre-registered with a
//! native handler; skills discovered on disk get the stub handler,
//! which confirms the skill is addressable without executing its body
//! instructions.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::load_all;
use crate::types::{SkillInvocation, ToolDescriptor};

/// Handler dispatched when the agent runtime calls a tool by name.
pub enum SkillHandler {
    /// A native function backing a built-in tool.
    Native(Box<dyn Fn(&ToolDescriptor, &SkillInvocation) -> String + Send + Sync>),

    /// Placeholder execution for skills loaded from disk: reports the
    /// skill's description and source instead of running its body.
    Stub,
}

impl fmt::Debug for SkillHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(_) => f.write_str("Native"),
            Self::Stub => f.write_str("Stub"),
        }
    }
}

struct RegisteredSkill {
    descriptor: ToolDescriptor,
    handler: SkillHandler,
}

/// The set of tools currently addressable by name.
pub struct SkillRegistry {
    /// Directory re-scanned on [`SkillRegistry::reload`].
    skills_dir: PathBuf,

    /// Registered tools, built-ins first, then disk skills in
    /// enumeration order.
    entries: Vec<RegisteredSkill>,
}

impl SkillRegistry {
    /// Build a registry from the skills under `dir`.
    ///
    /// A missing directory produces an empty registry.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self> {
        let mut registry = Self {
            skills_dir: dir.into(),
            entries: Vec::new(),
        };
        registry.reload()?;
        Ok(registry)
    }

    /// Re-scan the skills directory from disk.
    ///
    /// Every stub entry is replaced by the fresh scan; native
    /// registrations are kept.
    pub fn reload(&mut self) -> Result<()> {
        self.entries
            .retain(|e| matches!(e.handler, SkillHandler::Native(_)));

        for descriptor in load_all(&self.skills_dir)? {
            self.entries.push(RegisteredSkill {
                descriptor,
                handler: SkillHandler::Stub,
            });
        }

        Ok(())
    }

    /// Pre-register a built-in tool with a native handler.
    pub fn register_native(
        &mut self,
        descriptor: ToolDescriptor,
        handler: impl Fn(&ToolDescriptor, &SkillInvocation) -> String + Send + Sync + 'static,
    ) {
        self.entries.push(RegisteredSkill {
            descriptor,
            handler: SkillHandler::Native(Box::new(handler)),
        });
    }

    /// All registered descriptors, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    /// Look up a descriptor by tool name. First match wins when names
    /// collide.
    pub fn describe(&self, name: &str) -> Option<&ToolDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.name == name)
            .map(|e| &e.descriptor)
    }

    /// Invoke a tool by name.
    ///
    /// Never fails: an unknown name yields a diagnostic string naming
    /// the missing skill, suitable for returning into the conversation
    /// as a tool result.
    pub fn invoke(&self, name: &str, input: &SkillInvocation) -> String {
        let Some(entry) = self.entries.iter().find(|e| e.descriptor.name == name) else {
            tracing::debug!(skill = %name, "invoke of unknown skill");
            return format!("Skill '{name}' not found.");
        };

        match &entry.handler {
            SkillHandler::Native(handler) => handler(&entry.descriptor, input),
            SkillHandler::Stub => stub_response(&entry.descriptor, input),
        }
    }

    /// The directory this registry scans.
    pub fn skills_dir(&self) -> &Path {
        &self.skills_dir
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format the placeholder response for a stub skill. Pure string
/// formatting: the skill body is never executed.
fn stub_response(descriptor: &ToolDescriptor, input: &SkillInvocation) -> String {
    let query = input.query.as_deref().unwrap_or("");
    format!(
        "Skill '{}' executed.\n\n\
         Query: {}\n\n\
         Skill Description: {}\n\n\
         Note: this skill is loaded from {}. \
         The skill body was not executed.",
        descriptor.name,
        query,
        descriptor.description,
        descriptor.skill_source_path.display(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
