use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A single named coordinate of a [`Point`].
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub name: String,
    pub value: f64,
}

/// A point in n-dimensional space with dimension-neutral coordinate names.
///
/// Coordinates are kept in insertion order. [`x`](Self::x), [`y`](Self::y)
/// and [`z`](Self::z) read the first, second and third coordinate whatever
/// the dimension is called, so a point built from `Economic` and `Social`
/// scores plots the same way as one built from `dim_1` and `dim_2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Vec<Coordinate>,
    pub index: Option<usize>,
    pub name: String,
    pub label: String,
    pub color: String,
    pub size: u32,
    pub style: String,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            coords: Vec::new(),
            index: None,
            name: String::new(),
            label: String::new(),
            color: "black".to_owned(),
            size: 1,
            style: "dot".to_owned(),
        }
    }
}

impl Point {
    /// Creates a point from positional coordinates named `dim_1`, `dim_2`, ...
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let coords = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Coordinate {
                name: format!("dim_{}", i + 1),
                value,
            })
            .collect();
        Self {
            coords,
            ..Self::default()
        }
    }

    /// Creates a two-dimensional point.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(&[x, y])
    }

    /// Creates a point from named coordinates, keeping their order.
    #[must_use]
    pub fn named<S: Into<String>>(coords: impl IntoIterator<Item = (S, f64)>) -> Self {
        let coords = coords
            .into_iter()
            .map(|(name, value)| Coordinate {
                name: name.into(),
                value,
            })
            .collect();
        Self {
            coords,
            ..Self::default()
        }
    }

    /// Sets a coordinate by name, replacing it in place if it already exists.
    #[must_use]
    pub fn with_coordinate(mut self, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        match self.coords.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.value = value,
            None => self.coords.push(Coordinate { name, value }),
        }
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// First coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPoint`] if the point has no coordinates.
    pub fn x(&self) -> Result<f64> {
        self.required(0)
    }

    /// Second coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPoint`] if the point has fewer than two coordinates.
    pub fn y(&self) -> Result<f64> {
        self.required(1)
    }

    /// Third coordinate, if present.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        self.get_index(2)
    }

    /// Looks up a coordinate by dimension name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.coords.iter().find(|c| c.name == name).map(|c| c.value)
    }

    /// Looks up a coordinate by position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<f64> {
        self.coords.get(index).map(|c| c.value)
    }

    /// Returns the coordinates in insertion order.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Projects the first two coordinates onto a plot-plane point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPoint`] if the point has fewer than two coordinates.
    pub fn to_point2(&self) -> Result<Point2> {
        Ok(Point2::new(self.x()?, self.y()?))
    }

    fn required(&self, index: usize) -> Result<f64> {
        self.get_index(index).ok_or_else(|| {
            GeometryError::InvalidPoint {
                requested: index + 1,
                available: self.coords.len(),
            }
            .into()
        })
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::xy(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:.3}", c.name, c.value)?;
        }
        write!(f, ")")
    }
}
