//! Chart-wheel layout for western and seven-governors horoscopes.
//!
//! Ephemeris data comes in from a calculation service; out go canvas
//! coordinates for every ring, label, indicator line and tooltip.

pub mod angle;
pub mod chart;
pub mod dms;
pub mod layout;
pub mod qizheng;
pub mod session;
pub mod tooltip;
pub mod viewport;
pub mod western;

pub use angle::{normalize, solve, ConvergenceError};
pub use chart::{ChartInput, ChartKind, ChartSettings};
pub use dms::{degree_to_dms, Dms};
pub use layout::{layout_chart, layout_chart_default, ChartLayout};
pub use session::{ChartSession, HoroscopeService, SessionError};
pub use tooltip::{describe, place_tooltip, Entity};
pub use viewport::{fit_to_viewport, fit_wheel_size, Canvas, ViewportHost};
