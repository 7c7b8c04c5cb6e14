/// A text colour, expressed in the DeviceRGB or DeviceGray colour space
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, and b range from 0.0 to 1.0
    Rgb { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 (black) to 1.0 (white)
    Grey { g: f32 },
}

impl Colour {
    /// Create an RGB colour from components ranging from 0.0 to 1.0
    pub fn rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::Rgb { r, g, b }
    }

    /// Create an RGB colour from components ranging from 0 to 255
    pub fn rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::Rgb {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a grey colour, g ranging from 0.0 to 1.0
    pub fn grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a grey colour, g ranging from 0 to 255
    pub fn grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }
}

/// Pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_constructors_normalize() {
        assert_eq!(Colour::grey_bytes(0), colours::BLACK);
        assert_eq!(Colour::grey_bytes(255), colours::WHITE);
        assert_eq!(
            Colour::rgb_bytes(255, 0, 0),
            Colour::Rgb {
                r: 1.0,
                g: 0.0,
                b: 0.0
            }
        );
    }
}
