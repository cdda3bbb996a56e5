//! Shapes behind a single area contract
//!
//! Native shapes implement [`AreaCalculator`] directly. Third-party geometry with
//! its own method names is wrapped by the adapters in [`adapter`], and the
//! [`bridge`] module separates drawable shapes from the renderer that draws them.

use crate::error::KitError;
use std::f64::consts::PI;

pub trait AreaCalculator: Send + Sync {
    fn shape_name(&self) -> &str;

    fn calculate_area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl AreaCalculator for Circle {
    fn shape_name(&self) -> &str {
        "Circle"
    }

    fn calculate_area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl AreaCalculator for Square {
    fn shape_name(&self) -> &str {
        "Square"
    }

    fn calculate_area(&self) -> f64 {
        self.side * self.side
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl AreaCalculator for Rectangle {
    fn shape_name(&self) -> &str {
        "Rectangle"
    }

    fn calculate_area(&self) -> f64 {
        self.width * self.height
    }
}

/// Area calculations that don't belong to any single shape
pub struct ShapeCalculator;

impl ShapeCalculator {
    pub fn calculate_area(shape: &dyn AreaCalculator) -> f64 {
        shape.calculate_area()
    }

    pub fn total_area(shapes: &[&dyn AreaCalculator]) -> f64 {
        shapes.iter().map(|s| s.calculate_area()).sum()
    }
}

/// Checks arity and that every dimension is a positive finite number
pub fn dimensions<const N: usize>(shape: &str, dims: &[f64]) -> Result<[f64; N], KitError> {
    if dims.len() != N {
        return Err(KitError::invalid_argument(
            shape,
            format!("expected {} dimension(s), got {}", N, dims.len()),
        ));
    }
    if let Some(bad) = dims.iter().find(|d| !d.is_finite() || **d <= 0.0) {
        return Err(KitError::invalid_argument(
            shape,
            format!("dimension {} must be a positive number", bad),
        ));
    }

    let mut out = [0.0; N];
    out.copy_from_slice(dims);
    Ok(out)
}

pub fn circle(dims: &[f64]) -> Result<Box<dyn AreaCalculator>, KitError> {
    let [radius] = dimensions::<1>("circle", dims)?;
    Ok(Box::new(Circle { radius }))
}

pub fn square(dims: &[f64]) -> Result<Box<dyn AreaCalculator>, KitError> {
    let [side] = dimensions::<1>("square", dims)?;
    Ok(Box::new(Square { side }))
}

pub fn rectangle(dims: &[f64]) -> Result<Box<dyn AreaCalculator>, KitError> {
    let [width, height] = dimensions::<2>("rectangle", dims)?;
    Ok(Box::new(Rectangle { width, height }))
}

pub fn triangle(dims: &[f64]) -> Result<Box<dyn AreaCalculator>, KitError> {
    let [base, height] = dimensions::<2>("triangle", dims)?;
    Ok(Box::new(adapter::TriangleAdapter::new(
        adapter::legacy::Triangle::new(base, height),
    )))
}

pub mod adapter;
pub mod bridge;

pub use adapter::{DiscAdapter, TriangleAdapter};
pub use bridge::{
    drawable, BridgedCircle, BridgedSquare, DesktopRenderer, Drawable, Renderer, WebRenderer,
};
