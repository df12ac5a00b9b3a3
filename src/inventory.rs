//! Statistics gathered from a single pass over the points.

use crate::{Color, Point, Transform, Vector};

/// The number of return number slots, enough for the four bit return numbers of las 1.4.
pub const RETURN_SLOTS: usize = 16;

/// Counts and extrema over every point added so far.
///
/// Adding points is commutative, so the order in which points arrive doesn't change the result.
///
/// # Examples
///
/// ```
/// use las_validate::{Inventory, Point};
/// let mut inventory = Inventory::default();
/// assert!(!inventory.is_active());
/// inventory.add(&Point { x: 1, return_number: 1, number_of_returns: 1, ..Default::default() });
/// inventory.add(&Point { x: -1, return_number: 1, number_of_returns: 1, ..Default::default() });
/// assert_eq!(2, inventory.number_of_points);
/// assert_eq!(2, inventory.points_by_return[1]);
/// assert_eq!(-1, inventory.min.x);
/// assert_eq!(1, inventory.max.x);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Inventory {
    /// The number of points.
    pub number_of_points: u64,

    /// Points counted by their return number.
    ///
    /// Slot zero holds points with a return number of zero, which are never legal.
    pub points_by_return: [u64; RETURN_SLOTS],

    /// Points counted by their number of returns of given pulse.
    pub points_by_number_of_returns: [u64; RETURN_SLOTS],

    /// The smallest raw coordinates.
    pub min: Vector<i32>,

    /// The largest raw coordinates.
    pub max: Vector<i32>,

    /// The earliest gps time, if any point had one.
    pub min_gps_time: Option<f64>,

    /// The latest gps time, if any point had one.
    pub max_gps_time: Option<f64>,

    /// The channel-wise smallest color, if any point had one.
    pub min_color: Option<Color>,

    /// The channel-wise largest color, if any point had one.
    pub max_color: Option<Color>,
}

impl Inventory {
    /// Adds a point to the inventory.
    ///
    /// Return numbers past the last slot are counted as points but not by return.
    pub fn add(&mut self, point: &Point) {
        if let Some(count) = self
            .points_by_return
            .get_mut(usize::from(point.return_number))
        {
            *count += 1;
        }
        if let Some(count) = self
            .points_by_number_of_returns
            .get_mut(usize::from(point.number_of_returns))
        {
            *count += 1;
        }
        if self.is_active() {
            self.min.x = self.min.x.min(point.x);
            self.min.y = self.min.y.min(point.y);
            self.min.z = self.min.z.min(point.z);
            self.max.x = self.max.x.max(point.x);
            self.max.y = self.max.y.max(point.y);
            self.max.z = self.max.z.max(point.z);
        } else {
            self.min = Vector {
                x: point.x,
                y: point.y,
                z: point.z,
            };
            self.max = self.min;
        }
        if let Some(gps_time) = point.gps_time {
            self.min_gps_time = Some(self.min_gps_time.map_or(gps_time, |t| t.min(gps_time)));
            self.max_gps_time = Some(self.max_gps_time.map_or(gps_time, |t| t.max(gps_time)));
        }
        if let Some(color) = point.color {
            self.min_color = Some(self.min_color.map_or(color, |c| c.channel_min(color)));
            self.max_color = Some(self.max_color.map_or(color, |c| c.channel_max(color)));
        }
        self.number_of_points += 1;
    }

    /// Has at least one point been added?
    pub fn is_active(&self) -> bool {
        self.number_of_points > 0
    }

    /// Returns the smallest coordinates, transformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Inventory, Point, Transform, Vector};
    /// let mut inventory = Inventory::default();
    /// inventory.add(&Point { x: 10, ..Default::default() });
    /// let transform = Transform { scale: 0.1, offset: 100. };
    /// let transforms = Vector { x: transform, y: transform, z: transform };
    /// assert_eq!(101., inventory.transformed_min(&transforms).x);
    /// ```
    pub fn transformed_min(&self, transforms: &Vector<Transform>) -> Vector<f64> {
        transforms.direct(&self.min)
    }

    /// Returns the largest coordinates, transformed.
    pub fn transformed_max(&self, transforms: &Vector<Transform>) -> Vector<f64> {
        transforms.direct(&self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        vec![
            Point {
                x: 5,
                y: -3,
                z: 100,
                return_number: 1,
                number_of_returns: 2,
                gps_time: Some(10.),
                color: Some(Color::new(5, 10, 15)),
            },
            Point {
                x: -7,
                y: 12,
                z: 90,
                return_number: 2,
                number_of_returns: 2,
                gps_time: Some(2.5),
                color: Some(Color::new(50, 1, 15)),
            },
            Point {
                x: 0,
                y: 0,
                z: 95,
                return_number: 0,
                number_of_returns: 0,
                gps_time: Some(7.),
                color: Some(Color::new(7, 7, 7)),
            },
        ]
    }

    #[test]
    fn counts() {
        let mut inventory = Inventory::default();
        for point in points() {
            inventory.add(&point);
        }
        assert_eq!(3, inventory.number_of_points);
        assert_eq!([1, 1, 1], inventory.points_by_return[..3]);
        assert_eq!([1, 0, 2], inventory.points_by_number_of_returns[..3]);
    }

    #[test]
    fn extrema() {
        let mut inventory = Inventory::default();
        for point in points() {
            inventory.add(&point);
        }
        assert_eq!(Vector { x: -7, y: -3, z: 90 }, inventory.min);
        assert_eq!(Vector { x: 5, y: 12, z: 100 }, inventory.max);
        assert_eq!(Some(2.5), inventory.min_gps_time);
        assert_eq!(Some(10.), inventory.max_gps_time);
        assert_eq!(Some(Color::new(5, 1, 7)), inventory.min_color);
        assert_eq!(Some(Color::new(50, 10, 15)), inventory.max_color);
    }

    #[test]
    fn order_does_not_matter() {
        let mut forward = Inventory::default();
        let mut reverse = Inventory::default();
        for point in points() {
            forward.add(&point);
        }
        for point in points().iter().rev() {
            reverse.add(point);
        }
        assert_eq!(forward, reverse);
    }

    #[test]
    fn return_numbers_past_the_last_slot() {
        let mut inventory = Inventory::default();
        inventory.add(&Point {
            return_number: 200,
            number_of_returns: 16,
            ..Default::default()
        });
        assert_eq!(1, inventory.number_of_points);
        assert_eq!(0, inventory.points_by_return.iter().sum::<u64>());
        assert_eq!(0, inventory.points_by_number_of_returns.iter().sum::<u64>());
    }

    #[test]
    fn no_gps_time_or_color() {
        let mut inventory = Inventory::default();
        inventory.add(&Point::default());
        assert!(inventory.is_active());
        assert_eq!(None, inventory.min_gps_time);
        assert_eq!(None, inventory.max_color);
    }
}
