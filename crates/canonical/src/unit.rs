//! Unit canonicalization.
//!
//! Units arrive from two places: the user's catalog, typed by hand, and the
//! transcribed quote, where "each", "ea." and "pcs" all show up for the same
//! thing. Two units are compatible when their canonical forms are equal.

use crate::normalize::normalize;

/// Normalized, space-free form of a unit, without alias folding.
///
/// Blank units (empty, whitespace or punctuation only) return `None`,
/// which callers treat as "no unit constraint".
///
/// ```rust
/// use canonical::unit_key;
///
/// assert_eq!(unit_key(" Sq. Ft. ").as_deref(), Some("sqft"));
/// assert_eq!(unit_key("  "), None);
/// ```
pub fn unit_key(raw: &str) -> Option<String> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }
    Some(normalized.split(' ').collect())
}

/// Canonical form of a unit: [`unit_key`] with common spellings folded to a
/// single token. Unknown units are returned in their [`unit_key`] form.
///
/// ```rust
/// use canonical::canonical_unit;
///
/// assert_eq!(canonical_unit("Each").as_deref(), Some("ea"));
/// assert_eq!(canonical_unit("pcs").as_deref(), Some("ea"));
/// assert_eq!(canonical_unit("ft²").as_deref(), Some("sqft"));
/// assert_eq!(canonical_unit("bundle").as_deref(), Some("bundle"));
/// assert_eq!(canonical_unit(""), None);
/// ```
pub fn canonical_unit(raw: &str) -> Option<String> {
    let key = unit_key(raw)?;
    let folded = match key.as_str() {
        "ea" | "each" | "pc" | "pcs" | "piece" | "pieces" | "unit" | "units" | "item"
        | "items" | "ct" | "count" => "ea",
        "h" | "hr" | "hrs" | "hour" | "hours" => "hr",
        "day" | "days" => "day",
        "sqft" | "sf" | "ft2" | "squarefoot" | "squarefeet" | "sqfoot" | "sqfeet" => "sqft",
        "lf" | "linft" | "linearft" | "linearfoot" | "linearfeet" => "lf",
        "ft" | "foot" | "feet" => "ft",
        "m" | "meter" | "meters" | "metre" | "metres" => "m",
        "m2" | "sqm" | "squaremeter" | "squaremeters" | "squaremetre" | "squaremetres" => "m2",
        "m3" | "cubicmeter" | "cubicmeters" | "cubicmetre" | "cubicmetres" => "m3",
        "yd" | "yard" | "yards" => "yd",
        "cy" | "yd3" | "cuyd" | "cubicyard" | "cubicyards" => "cy",
        "gal" | "gallon" | "gallons" => "gal",
        "l" | "liter" | "liters" | "litre" | "litres" => "l",
        "kg" | "kilo" | "kilos" | "kilogram" | "kilograms" => "kg",
        "lb" | "lbs" | "pound" | "pounds" => "lb",
        "ls" | "lumpsum" | "job" | "jobs" => "job",
        "set" | "sets" => "set",
        _ => return Some(key),
    };
    Some(folded.to_string())
}
