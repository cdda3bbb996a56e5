//! Drawable shapes decoupled from the platform that renders them

use crate::error::KitError;
use std::sync::Arc;

pub trait Renderer: Send + Sync {
    fn platform(&self) -> &str;

    fn render_circle(&self, radius: f64) -> String;

    fn render_square(&self, side: f64) -> String;
}

pub struct WebRenderer;

impl Renderer for WebRenderer {
    fn platform(&self) -> &str {
        "web"
    }

    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing a circle with radius {} on the web", radius)
    }

    fn render_square(&self, side: f64) -> String {
        format!("Drawing a square with side {} on the web", side)
    }
}

pub struct DesktopRenderer;

impl Renderer for DesktopRenderer {
    fn platform(&self) -> &str {
        "desktop"
    }

    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing a circle with radius {} on the desktop", radius)
    }

    fn render_square(&self, side: f64) -> String {
        format!("Drawing a square with side length {} on the desktop", side)
    }
}

pub trait Drawable: Send + Sync {
    fn draw(&self) -> String;
}

pub struct BridgedCircle {
    radius: f64,
    renderer: Arc<dyn Renderer>,
}

impl BridgedCircle {
    pub fn new(radius: f64, renderer: Arc<dyn Renderer>) -> Self {
        Self { radius, renderer }
    }
}

impl Drawable for BridgedCircle {
    fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }
}

pub struct BridgedSquare {
    side: f64,
    renderer: Arc<dyn Renderer>,
}

impl BridgedSquare {
    pub fn new(side: f64, renderer: Arc<dyn Renderer>) -> Self {
        Self { side, renderer }
    }
}

impl Drawable for BridgedSquare {
    fn draw(&self) -> String {
        self.renderer.render_square(self.side)
    }
}

/// Builds a drawable shape by name ("circle" or "square") on the given renderer
pub fn drawable(
    shape: &str,
    size: f64,
    renderer: Arc<dyn Renderer>,
) -> Result<Box<dyn Drawable>, KitError> {
    let [size] = super::dimensions::<1>(shape, &[size])?;
    match shape {
        "circle" => Ok(Box::new(BridgedCircle::new(size, renderer))),
        "square" => Ok(Box::new(BridgedSquare::new(size, renderer))),
        other => Err(KitError::invalid_argument(
            "draw",
            format!("unsupported shape '{}', expected circle or square", other),
        )),
    }
}
