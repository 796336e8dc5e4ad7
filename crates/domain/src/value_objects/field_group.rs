//! Ordered set of upstream field identifiers

use std::fmt;

/// A named list of fields requested from upstream (e.g. the `hourly` group)
///
/// Field lists are fixed at compile time, so the group borrows `'static` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldGroup(&'static [&'static str]);

impl FieldGroup {
    /// Wrap a fixed field list
    #[must_use]
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self(fields)
    }

    /// A group that requests nothing
    #[must_use]
    pub const fn empty() -> Self {
        Self(&[])
    }

    /// Whether the group requests no fields
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The fields in request order
    #[must_use]
    pub const fn fields(&self) -> &'static [&'static str] {
        self.0
    }

    /// Comma-joined fields, or `None` for an empty group
    #[must_use]
    pub fn joined(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}
