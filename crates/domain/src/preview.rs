use crate::{template_label, Catalog, DomainError, ImageResource};

/// Full-screen preview overlay state owned by a gallery controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Whether a preview transition altered the observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTransition {
    Changed,
    Unchanged,
}

impl PreviewTransition {
    pub fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl PreviewState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn image_index(&self) -> Option<usize> {
        match self {
            Self::Open { index } => Some(*index),
            Self::Closed => None,
        }
    }

    /// Opens the overlay on `index`, re-targeting in place if already open.
    ///
    /// An out-of-range index leaves the state untouched.
    pub fn open(
        &mut self,
        index: usize,
        catalog: &Catalog,
    ) -> Result<PreviewTransition, DomainError> {
        catalog.get(index)?;
        let next = Self::Open { index };
        if *self == next {
            return Ok(PreviewTransition::Unchanged);
        }
        *self = next;
        Ok(PreviewTransition::Changed)
    }

    /// Closes the overlay. Closing an already closed overlay is a no-op.
    pub fn close(&mut self) -> PreviewTransition {
        if *self == Self::Closed {
            return PreviewTransition::Unchanged;
        }
        *self = Self::Closed;
        PreviewTransition::Changed
    }

    /// Overlay content for the current state, `None` when closed.
    pub fn overlay<'a>(&self, catalog: &'a Catalog) -> Option<PreviewOverlay<'a>> {
        let index = self.image_index()?;
        let image = catalog.get(index).ok()?;
        Some(PreviewOverlay {
            index,
            image,
            caption: template_label(index),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOverlay<'a> {
    pub index: usize,
    pub image: &'a ImageResource,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| ImageResource::new(format!("img/{i}.png")))
                .collect(),
        )
    }

    #[test]
    fn starts_closed() {
        let state = PreviewState::default();
        assert!(!state.is_open());
        assert_eq!(state.image_index(), None);
    }

    #[test]
    fn open_then_close_returns_to_closed() {
        let catalog = catalog_of(3);
        for index in 0..3 {
            let mut state = PreviewState::default();
            state.open(index, &catalog).expect("open");
            assert_eq!(state, PreviewState::Open { index });
            assert!(state.close().changed());
            assert_eq!(state, PreviewState::Closed);
        }
    }

    #[test]
    fn close_while_closed_is_a_no_op() {
        let mut state = PreviewState::default();
        assert_eq!(state.close(), PreviewTransition::Unchanged);
        assert_eq!(state.close(), PreviewTransition::Unchanged);
        assert_eq!(state, PreviewState::Closed);
    }

    #[test]
    fn open_retargets_directly() {
        let catalog = catalog_of(3);
        let mut state = PreviewState::default();
        state.open(0, &catalog).expect("open");
        let transition = state.open(2, &catalog).expect("retarget");
        assert!(transition.changed());
        assert_eq!(state, PreviewState::Open { index: 2 });
    }

    #[test]
    fn reopening_same_index_is_unchanged() {
        let catalog = catalog_of(2);
        let mut state = PreviewState::default();
        state.open(1, &catalog).expect("open");
        assert_eq!(
            state.open(1, &catalog).expect("open again"),
            PreviewTransition::Unchanged
        );
    }

    #[test]
    fn open_out_of_range_fails_and_keeps_state() {
        let catalog = catalog_of(2);
        let mut state = PreviewState::default();
        state.open(1, &catalog).expect("open");
        assert!(matches!(
            state.open(2, &catalog),
            Err(DomainError::InvalidIndex { index: 2, len: 2 })
        ));
        assert_eq!(state, PreviewState::Open { index: 1 });
    }

    #[test]
    fn overlay_caption_is_one_based() {
        let catalog = catalog_of(3);
        let mut state = PreviewState::default();
        assert!(state.overlay(&catalog).is_none());
        state.open(2, &catalog).expect("open");
        let overlay = state.overlay(&catalog).expect("overlay");
        assert_eq!(overlay.index, 2);
        assert_eq!(overlay.caption, "Template 3");
        assert_eq!(overlay.image.location(), "img/2.png");
    }
}
