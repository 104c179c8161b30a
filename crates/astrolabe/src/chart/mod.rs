pub mod data;
pub mod loader;
pub mod settings;
pub mod step;

pub use data::{AscHouse, Aspect, Body, ChartInput, ChartKind, House, MovingToward};
pub use loader::{load_chart_input_from_json, validate_chart_input, ChartInputError};
pub use settings::{ChartSettings, GovernorRings, SettingsError};
pub use step::{ProcessDate, Step, StepError};
