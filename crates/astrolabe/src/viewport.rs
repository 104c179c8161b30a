//! Fitting a finished drawing to the device viewport.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The drawing surface, as far as scaling is concerned.
pub trait Canvas {
    /// Natural width of what has been drawn; 0 when nothing is drawn.
    fn width(&self) -> f64;
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
    fn set_zoom(&mut self, zoom: f64);
}

/// Host environment that reports viewport metrics once layout is settled.
#[async_trait]
pub trait ViewportHost: Send + Sync {
    /// Viewport width, or `None` when metrics are unavailable.
    async fn ready(&self) -> Option<f64>;
}

/// Host with a known width.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub Option<f64>);

#[async_trait]
impl ViewportHost for FixedViewport {
    async fn ready(&self) -> Option<f64> {
        self.0
    }
}

/// In-memory canvas that records what it was told.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlessCanvas {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

impl HeadlessCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            zoom: 1.0,
        }
    }
}

impl Canvas for HeadlessCanvas {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }
}

/// Zoom needed to fit `natural_width` into the viewport, if any.
///
/// Never upscales: `None` unless the zoom is below 1.
pub fn zoom_for(natural_width: f64, viewport_width: f64, margin: f64) -> Option<f64> {
    if natural_width <= 0.0 {
        return None;
    }
    let zoom = (viewport_width - margin) / natural_width;
    (zoom < 1.0).then_some(zoom)
}

/// Shrink `canvas` to the viewport once the host is ready.
///
/// Returns the applied zoom. Nothing happens when the host has no metrics
/// or the drawing already fits.
pub async fn fit_to_viewport<C, H>(canvas: &mut C, host: &H, margin: f64) -> Option<f64>
where
    C: Canvas + Send + ?Sized,
    H: ViewportHost + ?Sized,
{
    let Some(viewport_width) = host.ready().await else {
        log::debug!("Viewport metrics unavailable, skipping scale");
        return None;
    };

    let zoom = zoom_for(canvas.width(), viewport_width, margin)?;
    canvas.set_width(viewport_width);
    canvas.set_height(viewport_width);
    canvas.set_zoom(zoom);
    Some(zoom)
}

/// Image and font size after fitting a wheel to the viewport before layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSize {
    pub size: f64,
    pub font_size: f64,
}

/// Shrink the image to the viewport width, scaling the font with it.
pub fn fit_wheel_size(size: f64, font_size: f64, viewport_width: f64) -> WheelSize {
    if size > viewport_width {
        WheelSize {
            size: viewport_width,
            font_size: font_size * viewport_width / size,
        }
    } else {
        WheelSize { size, font_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_for() {
        assert_eq!(zoom_for(800.0, 410.0, 10.0), Some(0.5));
        assert_eq!(zoom_for(800.0, 1200.0, 10.0), None);
        assert_eq!(zoom_for(800.0, 810.0, 10.0), None);
        assert_eq!(zoom_for(0.0, 400.0, 10.0), None);
    }

    #[test]
    fn test_fit_wheel_size() {
        assert_eq!(
            fit_wheel_size(800.0, 20.0, 400.0),
            WheelSize {
                size: 400.0,
                font_size: 10.0
            }
        );
        assert_eq!(
            fit_wheel_size(800.0, 20.0, 1024.0),
            WheelSize {
                size: 800.0,
                font_size: 20.0
            }
        );
    }

    #[tokio::test]
    async fn test_fit_to_viewport_shrinks() {
        let mut canvas = HeadlessCanvas::new(800.0, 800.0);
        let zoom = fit_to_viewport(&mut canvas, &FixedViewport(Some(410.0)), 10.0).await;
        assert_eq!(zoom, Some(0.5));
        assert_eq!(canvas, HeadlessCanvas { width: 410.0, height: 410.0, zoom: 0.5 });
    }

    #[tokio::test]
    async fn test_fit_to_viewport_never_upscales() {
        let mut canvas = HeadlessCanvas::new(300.0, 300.0);
        assert_eq!(fit_to_viewport(&mut canvas, &FixedViewport(Some(1000.0)), 10.0).await, None);
        assert_eq!(canvas, HeadlessCanvas::new(300.0, 300.0));
    }

    #[tokio::test]
    async fn test_fit_to_viewport_without_metrics() {
        let mut canvas = HeadlessCanvas::new(800.0, 800.0);
        assert_eq!(fit_to_viewport(&mut canvas, &FixedViewport(None), 10.0).await, None);
        assert_eq!(canvas.zoom, 1.0);
    }
}
