use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 1-based template identifier, always `catalog index + 1`.
///
/// This is the only place the two numbering conventions meet: every
/// conversion between a catalog index and a template id goes through
/// [`TemplateId::from_index`] or [`TemplateId::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TemplateId(u32);

impl TemplateId {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidTemplateId(value));
        }
        Ok(Self(value))
    }

    pub fn from_index(index: usize) -> Self {
        let value = u32::try_from(index)
            .ok()
            .and_then(|value| value.checked_add(1))
            .unwrap_or(u32::MAX);
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn label(self) -> String {
        format!("Template {}", self.0)
    }
}

impl TryFrom<u32> for TemplateId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemplateId> for u32 {
    fn from(value: TemplateId) -> Self {
        value.0
    }
}

impl Display for TemplateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caption shared by the selector button and the preview overlay.
pub fn template_label(index: usize) -> String {
    TemplateId::from_index(index).label()
}

/// Whether the cell at `index` is the selected template.
///
/// Thumbnail and selector highlighting both read this one predicate.
pub fn is_active(selection: Option<TemplateId>, index: usize) -> bool {
    selection == Some(TemplateId::from_index(index))
}
