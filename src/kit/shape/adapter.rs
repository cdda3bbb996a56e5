//! Adapters from third-party geometry to [`AreaCalculator`]

use super::AreaCalculator;

/// Geometry types with their own, incompatible area methods
pub mod legacy {
    use std::f64::consts::PI;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Triangle {
        base: f64,
        height: f64,
    }

    impl Triangle {
        pub fn new(base: f64, height: f64) -> Self {
            Self { base, height }
        }

        pub fn triangle_area(&self) -> f64 {
            0.5 * self.base * self.height
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Disc {
        radius: f64,
    }

    impl Disc {
        pub fn new(radius: f64) -> Self {
            Self { radius }
        }

        pub fn disc_area(&self) -> f64 {
            PI * self.radius.powi(2)
        }
    }
}

pub struct TriangleAdapter {
    triangle: legacy::Triangle,
}

impl TriangleAdapter {
    pub fn new(triangle: legacy::Triangle) -> Self {
        Self { triangle }
    }
}

impl AreaCalculator for TriangleAdapter {
    fn shape_name(&self) -> &str {
        "Triangle"
    }

    fn calculate_area(&self) -> f64 {
        self.triangle.triangle_area()
    }
}

pub struct DiscAdapter {
    disc: legacy::Disc,
}

impl DiscAdapter {
    pub fn new(disc: legacy::Disc) -> Self {
        Self { disc }
    }
}

impl AreaCalculator for DiscAdapter {
    fn shape_name(&self) -> &str {
        "Circle"
    }

    fn calculate_area(&self) -> f64 {
        self.disc.disc_area()
    }
}
