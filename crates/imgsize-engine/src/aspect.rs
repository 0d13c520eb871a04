//! Aspect ratio labels
//!
//! Turns raw pixel dimensions into a label such as `16:9`. Well-known
//! ratios are matched first, within a fixed tolerance and in table order;
//! anything else is reduced by the gcd when the reduced terms stay small.

use std::fmt;

/// Absolute tolerance on `width / height` for a table match
pub const RATIO_TOLERANCE: f64 = 0.02;

/// Largest reduced term still shown in reduced form
pub const MAX_REDUCED_TERM: u32 = 50;

/// A well-known ratio and its label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonRatio {
    pub ratio: f64,
    pub display: &'static str,
    pub tolerance: f64,
}

impl CommonRatio {
    pub const fn new(width: u32, height: u32, display: &'static str) -> Self {
        Self {
            ratio: width as f64 / height as f64,
            display,
            tolerance: RATIO_TOLERANCE,
        }
    }

    /// Entry with an explicit ratio value
    pub const fn exact(ratio: f64, display: &'static str) -> Self {
        Self {
            ratio,
            display,
            tolerance: RATIO_TOLERANCE,
        }
    }

    fn accepts(&self, ratio: f64) -> bool {
        (ratio - self.ratio).abs() <= self.tolerance
    }
}

/// Canonical ratios, in match order. Order decides overlapping matches.
pub const CANONICAL_RATIOS: [CommonRatio; 12] = [
    CommonRatio::new(16, 9, "16:9"),
    CommonRatio::new(4, 3, "4:3"),
    CommonRatio::new(3, 2, "3:2"),
    CommonRatio::new(5, 4, "5:4"),
    CommonRatio::new(1, 1, "1:1"),
    CommonRatio::new(2, 1, "2:1"),
    CommonRatio::new(3, 1, "3:1"),
    CommonRatio::new(21, 9, "21:9"),
    CommonRatio::new(16, 10, "16:10"),
    CommonRatio::new(9, 16, "9:16"),
    CommonRatio::new(3, 4, "3:4"),
    CommonRatio::new(2, 3, "2:3"),
];

/// Ordered ratio table with first-match lookup
#[derive(Debug, Clone, Copy)]
pub struct RatioTable<'a> {
    entries: &'a [CommonRatio],
}

impl RatioTable<'static> {
    pub const CANONICAL: Self = Self::new(&CANONICAL_RATIOS);
}

impl<'a> RatioTable<'a> {
    pub const fn new(entries: &'a [CommonRatio]) -> Self {
        Self { entries }
    }

    /// First entry accepting `ratio`, in table order
    pub fn lookup(&self, ratio: f64) -> Option<&'a CommonRatio> {
        self.entries.iter().find(|entry| entry.accepts(ratio))
    }

    /// Label for `width` x `height`
    pub fn simplify(&self, width: u32, height: u32) -> AspectRatioLabel {
        if let Some(ratio) = aspect_ratio(width, height) {
            if let Some(entry) = self.lookup(ratio) {
                return AspectRatioLabel(entry.display.to_string());
            }
        }

        let divisor = gcd(width, height);
        if divisor == 0 {
            return AspectRatioLabel::from_terms(width, height);
        }

        let (w, h) = (width / divisor, height / divisor);
        if w <= MAX_REDUCED_TERM && h <= MAX_REDUCED_TERM {
            AspectRatioLabel::from_terms(w, h)
        } else {
            AspectRatioLabel::from_terms(width, height)
        }
    }
}

/// Label for `width` x `height` against the canonical table
pub fn simplify(width: u32, height: u32) -> AspectRatioLabel {
    RatioTable::CANONICAL.simplify(width, height)
}

/// `width / height`, undefined for a zero height
pub fn aspect_ratio(width: u32, height: u32) -> Option<f64> {
    (height != 0).then(|| width as f64 / height as f64)
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Display label for an aspect ratio, `W:H` or a canonical name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AspectRatioLabel(String);

impl AspectRatioLabel {
    fn from_terms(width: u32, height: u32) -> Self {
        Self(format!("{width}:{height}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AspectRatioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for AspectRatioLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
