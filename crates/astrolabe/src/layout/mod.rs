pub mod anchor;
pub mod aspect_grid;
pub mod assembler;
pub mod frame;
pub mod mansions;
pub mod moving_toward;
pub mod planets;
pub mod rings;
pub mod types;
pub mod wheel;

pub use anchor::{clip_to_circle, intersect_circle};
pub use aspect_grid::{layout_aspect_grid, AspectCell, AspectGrid};
pub use assembler::{layout_chart, layout_chart_default, ChartLayout, WheelParts};
pub use frame::{GovernorsFrame, HouseSector, PalaceLabel, SignSector, WesternFrame};
pub use mansions::{layout_mansions, MansionSegment};
pub use moving_toward::{layout_moving_toward, CurrentMarker, MovingTowardBand, YearSegment};
pub use planets::{layout_planets, spread_angles, PlanetBand};
pub use rings::{GovernorRadii, WesternRadii};
pub use types::{ArcSegment, BodyState, LabelPlacement, Line, Point, Ring, TextLabel};
pub use wheel::WheelFrame;
