use crate::Vector;

/// Scale and offset of one axis, `coordinate = raw * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// The scale factor.
    pub scale: f64,
    /// The offset.
    pub offset: f64,
}

impl Transform {
    /// Turns a raw record value into a coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Transform;
    /// let transform = Transform { scale: 2., offset: 1. };
    /// assert_eq!(3., transform.direct(1));
    /// ```
    pub fn direct(&self, n: i32) -> f64 {
        self.scale * f64::from(n) + self.offset
    }

    /// Half a scale unit, how far declared bounds may sit inside the points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Transform;
    /// let transform = Transform { scale: 0.01, offset: 0. };
    /// assert_eq!(0.005, transform.half_scale());
    /// ```
    pub fn half_scale(&self) -> f64 {
        0.5 * self.scale
    }
}

impl Vector<Transform> {
    /// Turns raw xyz record values into coordinates, axis by axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Transform, Vector};
    /// let transforms = Vector {
    ///     x: Transform { scale: 0.1, offset: 0. },
    ///     y: Transform { scale: 1., offset: 10. },
    ///     z: Transform { scale: 0.5, offset: 0. },
    /// };
    /// let coordinates = transforms.direct(&Vector { x: 10, y: 10, z: 10 });
    /// assert_eq!(Vector { x: 1., y: 20., z: 5. }, coordinates);
    /// ```
    pub fn direct(&self, raw: &Vector<i32>) -> Vector<f64> {
        Vector {
            x: self.x.direct(raw.x),
            y: self.y.direct(raw.y),
            z: self.z.direct(raw.z),
        }
    }
}
