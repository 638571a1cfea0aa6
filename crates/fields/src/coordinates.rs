//! Coordinate system tags and slice geometry types

use std::str::FromStr;

use crate::error::Error;

/// The coordinate system a simulation grid was defined in
///
/// This is the *native* system, i.e. the one the solver discretised its
/// domain in. It decides which physical quantity each grid axis carries:
///
/// | Native          | x axis | y axis | z axis |
/// | --------------- | ------ | ------ | ------ |
/// | `Cartesian`     | x      | y      | z      |
/// | `Cylindrical`   | φ      | r      | z      |
/// | `Spherical`     | φ      | r      | θ      |
///
/// Parsed from the lowercase names used in run metadata:
///
/// ```rust
/// # use htools_fields::CoordinateSystem;
/// let csys: CoordinateSystem = "cylindrical".parse().unwrap();
/// assert_eq!(csys, CoordinateSystem::Cylindrical);
/// assert!("polar".parse::<CoordinateSystem>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Cartesian (x, y, z) grid
    Cartesian,
    /// Cylindrical (φ, r, z) grid
    Cylindrical,
    /// Spherical (φ, r, θ) grid
    Spherical,
}

impl CoordinateSystem {
    /// Full name, i.e. 'Cartesian', 'Cylindrical', 'Spherical'
    pub fn long_name(&self) -> &str {
        match self {
            CoordinateSystem::Cartesian => "Cartesian",
            CoordinateSystem::Cylindrical => "Cylindrical",
            CoordinateSystem::Spherical => "Spherical",
        }
    }

    /// Axis-based name, i.e. 'XYZ', 'PRZ', 'PRT'
    pub fn axes_name(&self) -> &str {
        match self {
            CoordinateSystem::Cartesian => "XYZ",
            CoordinateSystem::Cylindrical => "PRZ",
            CoordinateSystem::Spherical => "PRT",
        }
    }

    /// The symbol a grid axis carries in this system, as LaTeX source
    pub(crate) fn axis_symbol(&self, axis: Axis) -> &'static str {
        match self {
            CoordinateSystem::Cartesian => match axis {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            },
            CoordinateSystem::Cylindrical => match axis {
                Axis::X => r"\phi",
                Axis::Y => "r",
                Axis::Z => "z",
            },
            CoordinateSystem::Spherical => match axis {
                Axis::X => r"\phi",
                Axis::Y => "r",
                Axis::Z => r"\theta",
            },
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cartesian" => Ok(CoordinateSystem::Cartesian),
            "cylindrical" => Ok(CoordinateSystem::Cylindrical),
            "spherical" => Ok(CoordinateSystem::Spherical),
            _ => Err(Error::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

/// The axes a slice should be expressed on for display
///
/// `Polar` leaves coordinates on the native curvilinear axes, `Cartesian`
/// converts them with the standard polar/spherical relations. Display of
/// cartesian-native data on polar axes is not supported.
///
/// ```rust
/// # use htools_fields::Projection;
/// let target: Projection = "polar".parse().unwrap();
/// assert_eq!(target, Projection::Polar);
/// assert!("invalid".parse::<Projection>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Native curvilinear axes, untransformed
    Polar,
    /// Cartesian axes, converting native coordinates as needed
    Cartesian,
}

impl FromStr for Projection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polar" => Ok(Projection::Polar),
            "cartesian" => Ok(Projection::Cartesian),
            _ => Err(Error::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Projection::Polar => write!(f, "polar"),
            Projection::Cartesian => write!(f, "cartesian"),
        }
    }
}

/// One of the three grid axes
///
/// Also used as the component tag for vector fields: `gasvx1.dat` holds the
/// x (or φ) component of the velocity at snapshot 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First axis (x or φ)
    X,
    /// Second axis (y or r)
    Y,
    /// Third axis (z or θ)
    Z,
}

impl Axis {
    /// The lowercase letter used in file names and dims strings
    pub fn as_char(&self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered pair of distinct axes selecting a data plane
///
/// The order decides display orientation only: `yx` selects the same plane of
/// data as `xy` with the returned meshes transposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plane {
    /// Axis along the rows of the returned meshes
    pub abscissa: Axis,
    /// Axis along the columns of the returned meshes
    pub ordinate: Axis,
}

impl Plane {
    /// The axis perpendicular to the plane, i.e. the one held fixed
    pub fn normal(&self) -> Axis {
        match (self.abscissa, self.ordinate) {
            (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Axis::Z,
            (Axis::X, Axis::Z) | (Axis::Z, Axis::X) => Axis::Y,
            _ => Axis::X,
        }
    }

    /// Whether the axes are given in reverse of the natural x < y < z order
    pub fn is_reversed(&self) -> bool {
        matches!(
            (self.abscissa, self.ordinate),
            (Axis::Y, Axis::X) | (Axis::Z, Axis::X) | (Axis::Z, Axis::Y)
        )
    }

    /// The same plane with axes in natural order
    pub fn canonical(&self) -> Plane {
        if self.is_reversed() {
            Plane {
                abscissa: self.ordinate,
                ordinate: self.abscissa,
            }
        } else {
            *self
        }
    }
}

/// A parsed dims string, deciding between a 1D lane and a 2D plane
///
/// ```rust
/// # use htools_fields::{Axis, Dims, Plane};
/// assert_eq!("y".parse::<Dims>().unwrap(), Dims::Lane(Axis::Y));
/// assert_eq!(
///     "xz".parse::<Dims>().unwrap(),
///     Dims::Plane(Plane { abscissa: Axis::X, ordinate: Axis::Z })
/// );
/// assert!("ij".parse::<Dims>().is_err());
/// assert!("xx".parse::<Dims>().is_err());
/// assert!("xyz".parse::<Dims>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dims {
    /// A single varying axis
    Lane(Axis),
    /// An ordered pair of axes
    Plane(Plane),
}

impl FromStr for Dims {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDims(s.to_string());
        let mut chars = s.chars();
        let abscissa = chars
            .next()
            .and_then(Axis::from_char)
            .ok_or_else(invalid)?;

        match chars.next() {
            None => Ok(Dims::Lane(abscissa)),
            Some(c) => {
                let ordinate = Axis::from_char(c).ok_or_else(invalid)?;
                if ordinate == abscissa || chars.next().is_some() {
                    return Err(invalid());
                }
                Ok(Dims::Plane(Plane { abscissa, ordinate }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_system_names() {
        assert_eq!(CoordinateSystem::Cylindrical.long_name(), "Cylindrical");
        assert_eq!(CoordinateSystem::Spherical.axes_name(), "PRT");
    }

    #[test]
    fn axis_symbols_follow_native_vocabulary() {
        let cyl = CoordinateSystem::Cylindrical;
        let sph = CoordinateSystem::Spherical;
        assert_eq!(cyl.axis_symbol(Axis::X), r"\phi");
        assert_eq!(cyl.axis_symbol(Axis::Z), "z");
        assert_eq!(sph.axis_symbol(Axis::Z), r"\theta");
        assert_eq!(CoordinateSystem::Cartesian.axis_symbol(Axis::Y), "y");
    }

    #[test]
    fn plane_normal_and_orientation() {
        let xy: Dims = "xy".parse().unwrap();
        let yx: Dims = "yx".parse().unwrap();
        let (Dims::Plane(xy), Dims::Plane(yx)) = (xy, yx) else {
            panic!("expected planes");
        };

        assert_eq!(xy.normal(), Axis::Z);
        assert_eq!(yx.normal(), Axis::Z);
        assert!(!xy.is_reversed());
        assert!(yx.is_reversed());
        assert_eq!(yx.canonical(), xy);
    }

    #[test]
    fn unknown_strings_are_rejected() {
        assert!(matches!(
            "orbital".parse::<Projection>(),
            Err(Error::UnknownCoordinateSystem(_))
        ));
        assert!(matches!(
            "ij".parse::<Dims>(),
            Err(Error::InvalidDims(_))
        ));
    }
}
