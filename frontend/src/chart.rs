//! Donut chart dataset projection, tooltip text and SVG slice geometry.

use std::f64::consts::{FRAC_PI_2, TAU};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::format_en_in;
use crate::statistics::CategoryExpenses;

/// Fixed slice palette. Entries 0 and 6 are the same colour.
pub const PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#C9CBCF",
];
pub const FALLBACK_COLOR: &str = "#C9CBCF";
pub const BORDER_ALPHA: &str = "80";
pub const BORDER_WIDTH: u32 = 2;
pub const HOVER_OFFSET: u32 = 4;
/// Inner radius as a fraction of the outer one.
pub const CUTOUT: f64 = 0.6;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartDataset {
    pub data: Vec<Decimal>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
    pub hover_offset: u32,
}

impl Default for ChartDataset {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            background_color: Vec::new(),
            border_color: Vec::new(),
            border_width: BORDER_WIDTH,
            hover_offset: HOVER_OFFSET,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl Default for ChartData {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            datasets: vec![ChartDataset::default()],
        }
    }
}

impl ChartData {
    pub fn dataset(&self) -> Option<&ChartDataset> {
        self.datasets.first()
    }

    pub fn color_at(&self, idx: usize) -> Option<&str> {
        self.dataset()
            .and_then(|dataset| dataset.background_color.get(idx))
            .map(String::as_str)
    }

    pub fn total(&self) -> Decimal {
        self.dataset()
            .map(|dataset| {
                dataset
                    .data
                    .iter()
                    .fold(Decimal::ZERO, |acc, value| acc.saturating_add(*value))
            })
            .unwrap_or(Decimal::ZERO)
    }
}

pub fn slice_color(idx: usize) -> &'static str {
    PALETTE[idx % PALETTE.len()]
}

pub fn project_chart(expenses: &CategoryExpenses) -> ChartData {
    let mut labels = Vec::with_capacity(expenses.len());
    let mut dataset = ChartDataset::default();
    for (idx, (name, sum)) in expenses.iter().enumerate() {
        let color = slice_color(idx);
        labels.push(name.to_string());
        dataset.data.push(sum);
        dataset.background_color.push(color.to_string());
        dataset.border_color.push(format!("{}{}", color, BORDER_ALPHA));
    }
    ChartData {
        labels,
        datasets: vec![dataset],
    }
}

/// Share of `total` taken by `value`, in percent rounded to one decimal.
pub fn percentage(value: Decimal, total: Decimal) -> Decimal {
    // Divide first so amounts near `Decimal::MAX` never overflow the multiply.
    value
        .checked_div(total)
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Hover text for one slice: `"<label>: <symbol><amount> (<pct>%)"`.
pub fn tooltip_label(label: &str, value: Decimal, total: Decimal, symbol: &str) -> String {
    format!(
        "{}: {}{} ({:.1}%)",
        label,
        symbol,
        format_en_in(value, 0),
        percentage(value, total)
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliceArc {
    pub index: usize,
    pub path: String,
    /// Angle of the slice's bisector, radians clockwise from 12 o'clock.
    pub mid_angle: f64,
}

impl SliceArc {
    /// Translation that pushes the slice `offset` units away from the centre.
    pub fn offset(&self, offset: f64) -> (f64, f64) {
        polar(self.mid_angle, offset)
    }
}

/// Point at `radius` from the origin, `angle` radians clockwise from 12 o'clock.
fn polar(angle: f64, radius: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (radius * theta.cos(), radius * theta.sin())
}

fn ring_path(start: f64, end: f64, outer: f64, inner: f64) -> String {
    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (ox0, oy0) = polar(start, outer);
    let (ox1, oy1) = polar(end, outer);
    let (ix1, iy1) = polar(end, inner);
    let (ix0, iy0) = polar(start, inner);
    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 0 {:.3} {:.3} Z",
        ox0, oy0, outer, outer, large_arc, ox1, oy1, ix1, iy1, inner, inner, large_arc, ix0, iy0
    )
}

/// SVG paths for each non-empty slice of a donut centred on the origin.
/// Slices run clockwise from 12 o'clock in data order.
pub fn donut_slices(values: &[Decimal], outer: f64, cutout: f64) -> Vec<SliceArc> {
    let values: Vec<f64> = values
        .iter()
        .map(|value| value.to_f64().unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let inner = outer * cutout;

    let mut slices = Vec::new();
    let mut start = 0.0;
    for (index, value) in values.iter().enumerate() {
        let sweep = value / total * TAU;
        if sweep <= 0.0 {
            continue;
        }
        let end = start + sweep;
        // A single arc cannot close a full circle, so a whole ring is drawn as two halves.
        let path = if sweep >= TAU - 1e-9 {
            let half = start + std::f64::consts::PI;
            format!(
                "{} {}",
                ring_path(start, half, outer, inner),
                ring_path(half, end, outer, inner)
            )
        } else {
            ring_path(start, end, outer, inner)
        };
        slices.push(SliceArc {
            index,
            path,
            mid_angle: start + sweep / 2.0,
        });
        start = end;
    }
    slices
}
