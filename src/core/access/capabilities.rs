//! Derived per-request capabilities

use serde::Serialize;

/// What a user may do regarding one task's comment thread.
///
/// Recomputed per request from live records; never cached or persisted.
/// Composition is additive-OR: any one qualifying role grants a
/// capability, and the most permissive applicable role wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Global admin or super admin
    pub is_global_admin: bool,
    /// Assignee of the task
    pub is_assignee: bool,
    /// Lead of the task's category
    pub is_category_lead: bool,
    /// Creator of the task
    pub is_creator: bool,
}

impl Capabilities {
    /// Whether the user may create comments in an open thread.
    ///
    /// The task creator gets no commenting rights from creation alone.
    pub fn can_comment(&self) -> bool {
        self.is_assignee || self.is_global_admin || self.is_category_lead
    }

    /// Whether the user may put the first comment on an empty thread.
    pub fn can_open_thread(&self) -> bool {
        self.is_assignee
    }
}
