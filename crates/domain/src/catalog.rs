use crate::{DomainError, ImageResource, TemplateId};

/// Fixed, ordered set of selectable images. Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageResource>,
}

impl Catalog {
    pub fn new(images: Vec<ImageResource>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.images.len()
    }

    pub fn get(&self, index: usize) -> Result<&ImageResource, DomainError> {
        self.images.get(index).ok_or(DomainError::InvalidIndex {
            index,
            len: self.images.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ImageResource)> {
        self.images.iter().enumerate()
    }

    pub fn template_id_for(&self, index: usize) -> Result<TemplateId, DomainError> {
        self.get(index)?;
        Ok(TemplateId::from_index(index))
    }

    pub fn index_for(&self, id: TemplateId) -> Result<usize, DomainError> {
        let index = id.index();
        if !self.contains_index(index) {
            return Err(DomainError::UnknownTemplate {
                id: id.get(),
                len: self.images.len(),
            });
        }
        Ok(index)
    }
}
