use crate::geometry::Point;
use crate::layers::{IconFrame, RingFrame, SparkFrame};

/// Everything a renderer needs to paint the button at one instant,
/// in surface coordinates. Paint order: icon, ring, sparks.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonFrame<'a> {
    pub center: Point,
    pub icon_size: f64,
    pub icon: IconFrame<'a>,
    pub ring: Option<RingFrame>,
    pub sparks: Vec<SparkFrame>,
}

impl ButtonFrame<'_> {
    pub fn is_resting(&self) -> bool {
        self.ring.is_none() && self.sparks.is_empty()
    }
}
