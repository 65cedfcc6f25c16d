//! Kitchen-friendly rendering of decimal quantities.
//!
//! `2.5` becomes `"2 ½"`, `0.333` becomes `"⅓"`, `3.0` becomes `"3"` and
//! anything that is not close to a common fraction falls back to one decimal.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KitchenFraction {
    pub value: f64,
    pub glyph: &'static str,
}

/// Sorted ascending by value.
pub const KITCHEN_FRACTIONS: [KitchenFraction; 9] = [
    KitchenFraction { value: 0.125, glyph: "⅛" },
    KitchenFraction { value: 0.25, glyph: "¼" },
    KitchenFraction { value: 1.0 / 3.0, glyph: "⅓" },
    KitchenFraction { value: 0.375, glyph: "⅜" },
    KitchenFraction { value: 0.5, glyph: "½" },
    KitchenFraction { value: 0.625, glyph: "⅝" },
    KitchenFraction { value: 2.0 / 3.0, glyph: "⅔" },
    KitchenFraction { value: 0.75, glyph: "¾" },
    KitchenFraction { value: 0.875, glyph: "⅞" },
];

/// Absolute distance within which a remainder snaps to a table entry (or to a whole number).
pub const FRACTION_TOLERANCE: f64 = 0.02;

const SMALLEST_DISPLAY_AMOUNT: &str = "0.01";

/// Closest table entry within tolerance of `remainder`, if any.
pub fn nearest_fraction(remainder: f64) -> Option<&'static KitchenFraction> {
    KITCHEN_FRACTIONS
        .iter()
        .map(|fraction| (fraction, (fraction.value - remainder).abs()))
        .filter(|(_, distance)| *distance <= FRACTION_TOLERANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(fraction, _)| fraction)
}

pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return "0".to_string();
    }

    let whole = amount.floor();
    let remainder = amount - whole;

    if remainder <= FRACTION_TOLERANCE {
        if whole == 0.0 {
            // Tiny but non-zero: never show a real quantity as "0".
            return trim_decimal(amount, 2).unwrap_or_else(|| SMALLEST_DISPLAY_AMOUNT.to_string());
        }
        return format!("{}", whole as u64);
    }
    if remainder >= 1.0 - FRACTION_TOLERANCE {
        return format!("{}", whole as u64 + 1);
    }

    if let Some(fraction) = nearest_fraction(remainder) {
        return if whole > 0.0 {
            format!("{} {}", whole as u64, fraction.glyph)
        } else {
            fraction.glyph.to_string()
        };
    }

    // One decimal place, or two when one would round a real quantity down to 0.
    trim_decimal(amount, 1)
        .or_else(|| trim_decimal(amount, 2))
        .unwrap_or_else(|| SMALLEST_DISPLAY_AMOUNT.to_string())
}

fn trim_decimal(amount: f64, digits: usize) -> Option<String> {
    let rendered = format!("{:.*}", digits, amount);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    (!trimmed.is_empty() && trimmed != "0").then(|| trimmed.to_string())
}
