use crate::{Transform, Vector};

/// Declared or observed extents, in coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest x, y and z.
    pub min: Vector<f64>,

    /// Largest x, y and z.
    pub max: Vector<f64>,
}

impl Bounds {
    /// Widens each side by one scale unit of its axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Bounds, Transform, Vector};
    /// let bounds = Bounds {
    ///     min: Vector { x: 0., y: 0., z: 0. },
    ///     max: Vector { x: 1., y: 1., z: 1. },
    /// };
    /// let transform = Transform { scale: 0.5, offset: 0. };
    /// let padded = bounds.pad(&Vector { x: transform, y: transform, z: transform });
    /// assert_eq!(-0.5, padded.min.x);
    /// assert_eq!(1.5, padded.max.z);
    /// ```
    pub fn pad(&self, transforms: &Vector<Transform>) -> Bounds {
        let scales: [f64; 3] = transforms.map(|transform| transform.scale).into();
        let min: [f64; 3] = self.min.into();
        let max: [f64; 3] = self.max.into();
        Bounds {
            min: Vector::from([0, 1, 2].map(|i| min[i] - scales[i])),
            max: Vector::from([0, 1, 2].map(|i| max[i] + scales[i])),
        }
    }

    /// Is the coordinate inside, edges included?
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Bounds, Vector};
    /// let bounds = Bounds {
    ///     min: Vector { x: 0., y: 0., z: 0. },
    ///     max: Vector { x: 1., y: 1., z: 1. },
    /// };
    /// assert!(bounds.contains(&Vector { x: 1., y: 0., z: 0.5 }));
    /// assert!(!bounds.contains(&Vector { x: 1.1, y: 0., z: 0.5 }));
    /// ```
    pub fn contains(&self, coordinates: &Vector<f64>) -> bool {
        let min: [f64; 3] = self.min.into();
        let max: [f64; 3] = self.max.into();
        let coordinates: [f64; 3] = (*coordinates).into();
        (0..3).all(|i| (min[i]..=max[i]).contains(&coordinates[i]))
    }
}
