//! Points and ordered point sets.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// An immutable 2-D location.
///
/// # Examples
///
/// ```
/// use tsp_seed::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered, immutable collection of points indexed `0..N`.
///
/// A point is identified only by its position in the set.
///
/// # Examples
///
/// ```
/// use tsp_seed::models::PointSet;
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
/// assert_eq!(points.len(), 3);
/// assert_eq!(points.get(1).map(|p| p.y()), Some(3.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set from points in index order.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a point set from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Parses one `x,y` pair per line. Blank lines are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_seed::models::PointSet;
    ///
    /// let points = PointSet::parse_csv("1.5,2\n3,4.25\n").unwrap();
    /// assert_eq!(points.len(), 2);
    /// assert_eq!(points.get(1).map(|p| p.x()), Some(3.0));
    /// ```
    pub fn parse_csv(input: &str) -> Result<Self> {
        let mut points = Vec::new();
        for (i, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != 2 {
                return Err(TourError::Parse {
                    line: i + 1,
                    message: format!("expected 2 fields, found {}", fields.len()),
                });
            }
            let x = parse_coordinate(fields[0], i + 1)?;
            let y = parse_coordinate(fields[1], i + 1)?;
            points.push(Point::new(x, y));
        }
        log::debug!("point_set.parse: points={}", points.len());
        Ok(Self::new(points))
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All points in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

fn parse_coordinate(field: &str, line: usize) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| TourError::Parse {
        line,
        message: format!("invalid coordinate {field:?}"),
    })?;
    if !value.is_finite() {
        return Err(TourError::Parse {
            line,
            message: format!("non-finite coordinate {field:?}"),
        });
    }
    Ok(value)
}
