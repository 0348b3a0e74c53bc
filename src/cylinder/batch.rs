//! Ordered group of requests sharing one track.

use super::types::Cylinder;

/// Requests pulled out of a queue together, in their original relative order.
///
/// Returned by [`CircularScan::extract_same_track`](crate::queue::CircularScan::extract_same_track).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CylinderBatch {
    cylinders: Vec<Cylinder>,
}

impl CylinderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the back, keeping extraction order.
    pub fn push_back(&mut self, cylinder: Cylinder) {
        self.cylinders.push(cylinder);
    }

    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    pub fn as_slice(&self) -> &[Cylinder] {
        &self.cylinders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cylinder> {
        self.cylinders.iter()
    }
}

impl IntoIterator for CylinderBatch {
    type Item = Cylinder;
    type IntoIter = std::vec::IntoIter<Cylinder>;

    fn into_iter(self) -> Self::IntoIter {
        self.cylinders.into_iter()
    }
}

impl<'a> IntoIterator for &'a CylinderBatch {
    type Item = &'a Cylinder;
    type IntoIter = std::slice::Iter<'a, Cylinder>;

    fn into_iter(self) -> Self::IntoIter {
        self.cylinders.iter()
    }
}
