use crate::style::Style;
use airshow_common::MapCoord;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Unique identifier of a feature within the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(pub Uuid);

impl FeatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeatureId {
    fn default() -> Self {
        Self::new()
    }
}

/// A point feature: a position on the map plane plus its style.
#[derive(Debug, Clone)]
struct Feature {
    id: FeatureId,
    position: MapCoord,
    style: Style,
}

/// Shared handle to a feature.
///
/// Handles are cheap to clone; all clones refer to the same feature, so a
/// registry and a vector source can both hold the feature while a model
/// subscriber moves it. Single-threaded by construction (`Rc<RefCell>`).
#[derive(Debug, Clone)]
pub struct FeatureHandle(Rc<RefCell<Feature>>);

impl FeatureHandle {
    /// Create a new feature at `position` with the given style.
    pub fn new(position: MapCoord, style: Style) -> Self {
        Self(Rc::new(RefCell::new(Feature {
            id: FeatureId::new(),
            position,
            style,
        })))
    }

    pub fn id(&self) -> FeatureId {
        self.0.borrow().id
    }

    pub fn position(&self) -> MapCoord {
        self.0.borrow().position
    }

    pub fn set_position(&self, position: MapCoord) {
        self.0.borrow_mut().position = position;
    }

    /// Current style, cloned out of the cell.
    pub fn style(&self) -> Style {
        self.0.borrow().style.clone()
    }

    pub fn set_style(&self, style: Style) {
        self.0.borrow_mut().style = style;
    }

    /// Whether two handles refer to the same underlying feature.
    pub fn ptr_eq(&self, other: &FeatureHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for FeatureHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for FeatureHandle {}
