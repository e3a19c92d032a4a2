use nalgebra::{Point3, UnitQuaternion};

/// Identity of a tracked hand or controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Number of tracked hands.
    pub const COUNT: usize = 2;

    /// Dense index for per-hand storage.
    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }
}

/// A tracked pose: fingertip position and hand orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPose {
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl HandPose {
    pub fn at(position: Point3<f64>) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
        }
    }
}

/// The events the XR layer delivers to a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Fingers closed; carries the fingertip world position.
    PinchStart { hand: Hand, tip: Point3<f64> },
    /// Fingers opened.
    PinchEnd { hand: Hand },
}
