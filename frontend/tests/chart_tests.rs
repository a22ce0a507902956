use std::str::FromStr;

use rust_decimal::Decimal;
use wallet_stats::chart::{
    donut_slices, percentage, project_chart, slice_color, tooltip_label, BORDER_WIDTH, CUTOUT,
    HOVER_OFFSET, PALETTE,
};
use wallet_stats::statistics::CategoryExpenses;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn expenses(entries: &[(&str, &str)]) -> CategoryExpenses {
    let mut out = CategoryExpenses::default();
    for (name, amount) in entries {
        out.add(name, dec(amount));
    }
    out
}

#[test]
fn projection_keeps_order_and_assigns_palette() {
    let chart = project_chart(&expenses(&[("Food", "120"), ("Car", "80"), ("Rent", "800")]));
    assert_eq!(chart.labels, vec!["Food", "Car", "Rent"]);

    let dataset = chart.dataset().unwrap();
    assert_eq!(dataset.data, vec![dec("120"), dec("80"), dec("800")]);
    assert_eq!(dataset.background_color, vec!["#FF6384", "#36A2EB", "#FFCE56"]);
    assert_eq!(dataset.border_color, vec!["#FF638480", "#36A2EB80", "#FFCE5680"]);
    assert_eq!(dataset.border_width, BORDER_WIDTH);
    assert_eq!(dataset.hover_offset, HOVER_OFFSET);
    assert_eq!(chart.total(), dec("1000"));
}

#[test]
fn palette_cycles_past_eight_slices() {
    let names: Vec<String> = (0..10).map(|i| format!("cat{}", i)).collect();
    let mut map = CategoryExpenses::default();
    for name in &names {
        map.add(name, Decimal::ONE);
    }
    let chart = project_chart(&map);
    let colors = &chart.dataset().unwrap().background_color;
    assert_eq!(colors.len(), 10);
    assert_eq!(colors[6], colors[0]);
    assert_eq!(colors[8], PALETTE[0]);
    assert_eq!(colors[9], PALETTE[1]);
    assert_eq!(slice_color(15), PALETTE[7]);
}

#[test]
fn projection_is_deterministic() {
    let map = expenses(&[("A", "1"), ("B", "2")]);
    assert_eq!(project_chart(&map), project_chart(&map));
}

#[test]
fn tooltip_matches_chart_format() {
    assert_eq!(
        tooltip_label("Food", dec("1250"), dec("5000"), "₹"),
        "Food: ₹1,250 (25.0%)"
    );
    assert_eq!(
        tooltip_label("Rent", dec("200000"), dec("300000"), "₹"),
        "Rent: ₹2,00,000 (66.7%)"
    );
}

#[test]
fn percentage_of_zero_total_is_zero() {
    assert_eq!(percentage(dec("10"), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(percentage(dec("1"), dec("8")), dec("12.5"));
}

#[test]
fn tooltip_for_huge_amounts_keeps_the_share() {
    let big = dec("1000000000000000000000000000");
    let label = tooltip_label("Big", big, big, "x");
    assert!(label.starts_with("Big: x"));
    assert!(label.ends_with("(100.0%)"));
    assert_eq!(percentage(Decimal::MAX, Decimal::MAX), dec("100"));
}

#[test]
fn donut_skips_empty_slices_and_spans_full_circle() {
    let slices = donut_slices(&[dec("1"), Decimal::ZERO, dec("3")], 94.0, CUTOUT);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].index, 0);
    assert_eq!(slices[1].index, 2);
    // first quarter bisects at 45 degrees, the remaining three quarters at 225 degrees
    assert!((slices[0].mid_angle - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
    assert!((slices[1].mid_angle - 5.0 * std::f64::consts::FRAC_PI_4).abs() < 1e-9);
}

#[test]
fn single_slice_ring_is_drawn_in_two_halves() {
    let slices = donut_slices(&[dec("42")], 94.0, CUTOUT);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].path.matches('M').count(), 2);
}

#[test]
fn no_data_no_slices() {
    assert!(donut_slices(&[], 94.0, CUTOUT).is_empty());
    assert!(donut_slices(&[Decimal::ZERO], 94.0, CUTOUT).is_empty());
}

#[test]
fn hovered_slice_moves_outward() {
    let slices = donut_slices(&[dec("1"), dec("1")], 94.0, CUTOUT);
    // right half bisects at 3 o'clock
    let (dx, dy) = slices[0].offset(4.0);
    assert!((dx - 4.0).abs() < 1e-9);
    assert!(dy.abs() < 1e-9);
}
