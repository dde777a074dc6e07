use std::ops::{Add, AddAssign, Deref, Div, Mul, Neg, Sub, SubAssign};

/// PDF points, 1/72 of an inch. All layout happens in points.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Pt(pub f32);

/// Millimetres, converted to points on use.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Mm(pub f32);

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * POINTS_PER_INCH / MM_PER_INCH)
    }
}

impl Pt {
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

impl Deref for Pt {
    type Target = f32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add for Pt {
    type Output = Pt;

    fn add(self, rhs: Pt) -> Pt {
        Pt(self.0 + rhs.0)
    }
}

impl Sub for Pt {
    type Output = Pt;

    fn sub(self, rhs: Pt) -> Pt {
        Pt(self.0 - rhs.0)
    }
}

impl AddAssign for Pt {
    fn add_assign(&mut self, rhs: Pt) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Pt {
    fn sub_assign(&mut self, rhs: Pt) {
        self.0 -= rhs.0;
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

/// Paper sizes as `(width, height)`.
pub mod pagesize {
    use super::Pt;

    /// ISO A4, 210 x 297 mm.
    pub const A4: (Pt, Pt) = (Pt(595.275_6), Pt(841.889_8));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Pt, b: f32) -> bool {
        (a.0 - b).abs() < 0.001
    }

    #[test]
    fn can_convert_units() {
        assert!(close(Mm(25.4).into(), 72.0));
        assert!(close(Mm(210.0).into(), *pagesize::A4.0));
        assert!(close(Mm(297.0).into(), *pagesize::A4.1));
    }

    #[test]
    fn can_do_point_arithmetic() {
        let mut p = Pt(10.0) + Pt(5.0) * 2.0 - Pt(4.0) / 2.0;
        assert!(close(p, 18.0));
        p -= Pt(8.0);
        p += Pt(1.0);
        assert!(close(p, 11.0));
        assert_eq!(Pt(6.0) / Pt(3.0), 2.0);
        assert_eq!(-Pt(1.0), Pt(-1.0));
        assert_eq!(Pt(1.0).max(Pt(2.0)), Pt(2.0));
        assert_eq!(Pt(1.0).min(Pt(2.0)), Pt(1.0));
    }
}
