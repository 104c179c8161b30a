//! Hover text for chart entities and placement of the tooltip box.

use crate::chart::{AscHouse, Body, House, MovingToward};
use crate::dms::degree_to_dms;
use crate::layout::types::Point;
use crate::qizheng::{branch_of, MansionBoundary};
use crate::western::{zodiac_long, DignitiesService, Planet};
use serde::{Deserialize, Serialize};

/// Anything the view can hover over.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Ascendant(&'a AscHouse),
    House(&'a House),
    /// Body on the seven-governors wheel
    Body(&'a Body),
    /// Body on a western wheel
    WesternBody(&'a Body),
    Mansion {
        boundary: &'a MansionBoundary,
        width: f64,
    },
    MovingToward(&'a MovingToward),
    Cusp {
        number: usize,
        longitude: f64,
    },
}

/// Branch palace and degree of a longitude, e.g. `戌宫：12度30分0秒`.
fn palace_position(longitude: f64) -> String {
    let position = zodiac_long(longitude);
    let dms = degree_to_dms(position.long);
    format!("{}宫：{}度{}分{}秒", branch_of(longitude), dms.d, dms.m, dms.s)
}

fn mansion_position(mansion: impl std::fmt::Display, degree: f64) -> String {
    let dms = degree_to_dms(degree);
    format!("{}宿：{}度{}分{}秒", mansion, dms.d, dms.m, dms.s)
}

fn western_position(longitude: f64) -> String {
    let position = zodiac_long(longitude);
    format!("{} {}", position.zodiac, degree_to_dms(position.long))
}

/// Ordered display lines for `entity`.
pub fn describe(entity: Entity<'_>) -> Vec<String> {
    match entity {
        Entity::Ascendant(asc) => {
            let position = zodiac_long(asc.asc_long);
            let dms = degree_to_dms(position.long);
            vec![
                format!("命度：{}{}度", asc.xiu, asc.xiu_degree.floor()),
                format!(
                    "上升：{}宫{:02}度{:02}分{:02}秒",
                    branch_of(asc.asc_long),
                    dms.d,
                    dms.m,
                    dms.s
                ),
            ]
        }
        Entity::House(house) => vec![mansion_position(house.xiu, house.xiu_degree)],
        Entity::Body(body) => {
            let mut lines = vec![body.name.clone(), palace_position(body.longitude)];
            if let (Some(mansion), Some(degree)) = (body.mansion, body.mansion_degree) {
                lines.push(mansion_position(mansion, degree));
            }

            let mut motion: Vec<&str> = Vec::new();
            if let Some(state) = body.speed_state.as_deref() {
                motion.push(state);
            }
            motion.push(if body.speed < 0.0 { "逆" } else { "顺" });
            if body.is_stationary {
                motion.push("留");
            }
            lines.push(motion.join("、"));
            lines
        }
        Entity::WesternBody(body) => {
            let mut lines = vec![body.name.clone(), western_position(body.longitude)];

            let mut motion = if body.speed < 0.0 { "retrograde" } else { "direct" }.to_string();
            if body.is_stationary {
                motion.push_str(", stationary");
            }
            lines.push(motion);

            if let Ok(planet) = body.name.parse::<Planet>() {
                let exact = DignitiesService::get_default_exact_exaltations();
                let dignities: Vec<String> = DignitiesService
                    .get_dignities(planet, body.longitude, Some(&exact))
                    .iter()
                    .map(|d| format!("{:?}", d.dignity_type))
                    .collect();
                if !dignities.is_empty() {
                    lines.push(dignities.join(", "));
                }
            }
            lines
        }
        Entity::Mansion { boundary, width } => {
            let dms = degree_to_dms(width);
            vec![
                boundary.mansion.to_string(),
                palace_position(boundary.long),
                format!("宿宽：{}度{}分{}秒", dms.d, dms.m, dms.s),
            ]
        }
        Entity::MovingToward(moving) => vec![
            palace_position(moving.long),
            mansion_position(moving.xiu, moving.xiu_degree),
        ],
        Entity::Cusp { number, longitude } => {
            vec![format!("House {}", number), western_position(longitude)]
        }
    }
}

/// Tooltip rectangle in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub lines: Vec<String>,
}

/// Size the box from the text and keep it on a square surface of side
/// `surface`: it opens to the left of the pointer when it would run off the
/// right edge and above it when it would run off the bottom.
pub fn place_tooltip(anchor: Point, lines: Vec<String>, font_size: f64, surface: f64) -> TooltipBox {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = longest as f64 * font_size;
    let height = lines.len() as f64 * font_size;

    let mut x = anchor.x;
    let mut y = anchor.y;
    if x + width > surface {
        x -= width;
    }
    if y + height > surface {
        y -= height;
    }

    TooltipBox {
        x,
        y,
        width,
        height,
        lines,
    }
}

/// Hover region produced by the chart layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub at: Point,
    pub lines: Vec<String>,
}

impl HoverTarget {
    pub fn new(at: Point, entity: Entity<'_>) -> Self {
        Self {
            at,
            lines: describe(entity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qizheng::{Mansion, Palace};

    #[test]
    fn test_describe_ascendant_pads_fields() {
        let asc = AscHouse {
            asc_long: 35.5,
            xiu: Mansion::Stomach,
            xiu_degree: 4.9,
        };
        assert_eq!(
            describe(Entity::Ascendant(&asc)),
            vec!["命度：胃4度", "上升：酉宫05度30分00秒"]
        );
    }

    #[test]
    fn test_describe_house() {
        let house = House {
            name: Palace::Wealth,
            long: 30.0,
            xiu: Mansion::Bond,
            xiu_degree: 2.25,
        };
        assert_eq!(describe(Entity::House(&house)), vec!["娄宿：2度15分0秒"]);
    }

    #[test]
    fn test_describe_body_motion() {
        let body = Body {
            speed_state: Some("迟".to_string()),
            ..Body::new("火", 200.5)
                .with_speed(-0.2)
                .stationary()
                .in_mansion(Mansion::Neck, 1.5)
        };
        assert_eq!(
            describe(Entity::Body(&body)),
            vec!["火", "辰宫：20度30分0秒", "亢宿：1度30分0秒", "迟、逆、留"]
        );

        let plain = Body::new("日", 10.0).with_speed(1.0);
        let lines = describe(Entity::Body(&plain));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "顺");
    }

    #[test]
    fn test_describe_western_body_lists_dignities() {
        let sun = Body::new("Sun", 19.0).with_speed(1.0);
        let lines = describe(Entity::WesternBody(&sun));
        assert_eq!(lines[0], "Sun");
        assert_eq!(lines[1], "Aries 19°0'0\"");
        assert_eq!(lines[2], "direct");
        assert!(lines[3].contains("Exaltation"));
        assert!(lines[3].contains("ExactExaltation"));
    }

    #[test]
    fn test_describe_mansion_and_moving_toward() {
        let boundary = MansionBoundary {
            mansion: Mansion::Horn,
            long: 190.0,
        };
        let lines = describe(Entity::Mansion {
            boundary: &boundary,
            width: 12.5,
        });
        assert_eq!(lines, vec!["角", "辰宫：10度0分0秒", "宿宽：12度30分0秒"]);

        let moving = MovingToward {
            long_of_per_year: vec![],
            long: 95.0,
            xiu: Mansion::Well,
            xiu_degree: 3.0,
        };
        assert_eq!(
            describe(Entity::MovingToward(&moving)),
            vec!["未宫：5度0分0秒", "井宿：3度0分0秒"]
        );
    }

    #[test]
    fn test_place_tooltip_flips() {
        let lines = vec!["ab".to_string(), "abcd".to_string()];
        let inside = place_tooltip(Point::new(10.0, 10.0), lines.clone(), 20.0, 800.0);
        assert_eq!((inside.x, inside.y, inside.width, inside.height), (10.0, 10.0, 80.0, 40.0));

        let corner = place_tooltip(Point::new(780.0, 790.0), lines, 20.0, 800.0);
        assert_eq!((corner.x, corner.y), (700.0, 750.0));
    }
}
