pub mod dignities;
pub mod types;
pub mod zodiac;

pub use dignities::{
    detriment, exaltation, face_ruler, faces, fall, rulership, term_ruler, terms, triplicity,
    DignitiesService, DignityResult, DignityType, ExactExaltation, Term, Triplicity,
};
pub use types::Planet;
pub use zodiac::{zodiac_long, Element, Sign, ZodiacLong};
