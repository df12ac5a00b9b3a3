/// An xyz collection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector<T> {
    /// X
    pub x: T,
    /// Y
    pub y: T,
    /// Z
    pub z: T,
}

impl<T> Vector<T> {
    /// Returns the components next to their axis names, in x, y, z order.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Vector;
    /// let vector = Vector { x: 1, y: 2, z: 3 };
    /// let [(name, value), _, _] = vector.named();
    /// assert_eq!(("x", &1), (name, value));
    /// ```
    pub fn named(&self) -> [(&'static str, &T); 3] {
        [("x", &self.x), ("y", &self.y), ("z", &self.z)]
    }
}

impl<T: Copy> Vector<T> {
    /// Applies `f` to each component.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Vector;
    /// let vector = Vector { x: 1, y: 2, z: 3 }.map(|n| n * 10);
    /// assert_eq!(Vector { x: 10, y: 20, z: 30 }, vector);
    /// ```
    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> Vector<U> {
        Vector {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl<T> From<[T; 3]> for Vector<T> {
    fn from([x, y, z]: [T; 3]) -> Vector<T> {
        Vector { x, y, z }
    }
}

impl<T> From<Vector<T>> for [T; 3] {
    fn from(vector: Vector<T>) -> [T; 3] {
        [vector.x, vector.y, vector.z]
    }
}
