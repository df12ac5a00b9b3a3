/// A RGB color value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub red: u16,

    /// Green channel.
    pub green: u16,

    /// Blue channel.
    pub blue: u16,
}

impl Color {
    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Color;
    /// let color = Color::new(1, 2, 3);
    /// assert_eq!(1, color.red);
    /// assert_eq!(2, color.green);
    /// assert_eq!(3, color.blue);
    /// ```
    pub fn new(red: u16, green: u16, blue: u16) -> Color {
        Color { red, green, blue }
    }

    /// Returns the channel-wise minimum of two colors.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Color;
    /// let color = Color::new(1, 20, 3).channel_min(Color::new(10, 2, 30));
    /// assert_eq!(Color::new(1, 2, 3), color);
    /// ```
    pub fn channel_min(self, other: Color) -> Color {
        Color::new(
            self.red.min(other.red),
            self.green.min(other.green),
            self.blue.min(other.blue),
        )
    }

    /// Returns the channel-wise maximum of two colors.
    pub fn channel_max(self, other: Color) -> Color {
        Color::new(
            self.red.max(other.red),
            self.green.max(other.green),
            self.blue.max(other.blue),
        )
    }
}
