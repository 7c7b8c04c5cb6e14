use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign};

/// A length in PDF points (1/72 of an inch). All layout within the crate is
/// done in points; [Mm] and [In] exist so human-friendly values can be
/// converted at the edges.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl std::iter::Sum for Pt {
    fn sum<I: Iterator<Item = Pt>>(iter: I) -> Pt {
        iter.fold(Pt(0.0), |a, b| a + b)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;
    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// The ratio of two lengths, e.g. an image scale factor
impl std::ops::Div<Pt> for Pt {
    type Output = f32;
    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into)]
pub struct Mm(pub f32);

impl From<Mm> for Pt {
    fn from(value: Mm) -> Pt {
        Pt(value.0 * 72.0 / 25.4)
    }
}

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millimetres_and_inches_convert_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert_eq!(Pt::from(Mm(25.4)), Pt(72.0));
        assert_eq!(Pt::from(Mm(210.0)).0.round(), 595.0);
    }

    #[test]
    fn point_arithmetic() {
        assert_eq!(Pt(10.0) + Pt(2.5), Pt(12.5));
        assert_eq!(Pt(10.0) - Pt(2.5), Pt(7.5));
        assert_eq!(Pt(10.0) * 0.5, Pt(5.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));
        assert_eq!(Pt(10.0) / Pt(40.0), 0.25);
        assert!(Pt(1.0) < Pt(2.0));

        let widths = [Pt(1.0), Pt(2.0), Pt(3.0)];
        let total: Pt = widths.into_iter().sum();
        assert_eq!(total, Pt(6.0));
    }
}
