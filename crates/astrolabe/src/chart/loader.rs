use crate::chart::data::{ChartInput, ChartKind};
use thiserror::Error;

/// Errors that can occur when loading chart input
#[derive(Error, Debug)]
pub enum ChartInputError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
    #[error("Expected {expected} {what}, got {got}")]
    WrongCount {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Load chart input from a JSON string
pub fn load_chart_input_from_json(json: &str) -> Result<ChartInput, ChartInputError> {
    let input: ChartInput =
        serde_json::from_str(json).map_err(|e| ChartInputError::InvalidJson(e.to_string()))?;
    validate_chart_input(&input)?;
    Ok(input)
}

/// Validate a parsed chart input
pub fn validate_chart_input(input: &ChartInput) -> Result<(), ChartInputError> {
    let bodies = input.bodies.iter().chain(input.outer_bodies.iter());
    for body in bodies {
        check_finite(&format!("{}.long", body.name), body.longitude)?;
        check_finite(&format!("{}.speed", body.name), body.speed)?;
    }

    for (index, cusp) in input.house_cusps.iter().enumerate() {
        check_finite(&format!("house_cusps[{}]", index), *cusp)?;
    }
    for (index, house) in input.houses.iter().enumerate() {
        check_finite(&format!("houses[{}].long", index), house.long)?;
    }
    for (index, boundary) in input.mansions.iter().enumerate() {
        check_finite(&format!("mansions[{}].long", index), boundary.long)?;
    }
    if let Some(asc) = &input.asc {
        check_finite("asc.asc_long", asc.asc_long)?;
    }
    if let Some(moving) = &input.moving_toward {
        check_finite("moving_toward.long", moving.long)?;
        for (index, long) in moving.long_of_per_year.iter().enumerate() {
            check_finite(&format!("moving_toward.long_of_per_year[{}]", index), *long)?;
        }
    }

    if input.kind.is_western() && !input.house_cusps.is_empty() && input.house_cusps.len() != 12 {
        return Err(ChartInputError::WrongCount {
            what: "house cusps",
            expected: 12,
            got: input.house_cusps.len(),
        });
    }

    if input.kind == ChartKind::SevenGovernors && input.houses.len() != 12 {
        return Err(ChartInputError::WrongCount {
            what: "palaces",
            expected: 12,
            got: input.houses.len(),
        });
    }

    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), ChartInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartInputError::InvalidFieldValue(format!(
            "{} must be a finite number, got {}",
            field, value
        )))
    }
}
