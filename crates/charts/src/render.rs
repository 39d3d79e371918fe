//! SVG rendering for each dashboard series.
//!
//! Every function draws into an in-memory SVG document and returns it as a
//! `String` ready to be inlined into the page. Empty series produce an
//! empty (axes-only, or "No data") chart rather than an error.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use pipeline::{RankedEntry, YearCounts, YearTotals};
use plotters::coord::Shift;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

use crate::error::Result;
use crate::theme::Theme;

pub const WIDTH: u32 = 960;
pub const HEIGHT: u32 = 480;

const FONT: &str = "sans-serif";

fn caption_style(theme: &Theme) -> TextStyle<'static> {
    (FONT, 24).into_font().color(&theme.title)
}

fn label_style(theme: &Theme) -> TextStyle<'static> {
    (FONT, 14).into_font().color(&theme.text)
}

/// Run `draw` against a fresh SVG canvas and return the document.
fn render_svg<F>(draw: F) -> Result<String>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<()>,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        draw(&root)?;
        root.present()?;
    }
    Ok(svg)
}

/// First and last year of a per-year series, `(0, 0)` when empty
fn year_bounds<V>(series: &BTreeMap<i32, V>) -> (i32, i32) {
    match (series.keys().next(), series.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => (0, 0),
    }
}

/// Upper bound of a revenue axis, leaving a little room above the peak
fn headroom(max: f64) -> f64 {
    if max > 0.0 { (max * 1.1).min(f64::MAX) } else { 1.0 }
}

/// Revenue axis range: always spans zero, widened to any negative total.
///
/// Non-finite totals are left out; an infinite axis bound never finishes
/// laying out its key points.
fn value_bounds(series: &YearTotals) -> (f64, f64) {
    let (min, max) = series
        .values()
        .copied()
        .filter(|value| value.is_finite())
        .fold((0.0f64, 0.0f64), |(min, max), value| (min.min(value), max.max(value)));

    let bottom = if min < 0.0 { (min * 1.1).max(f64::MIN) } else { 0.0 };
    (bottom, headroom(max))
}

/// Short revenue label: 2923706026 -> "2.9B"
pub fn compact_amount(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}

fn segment_year_label(value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::Exact(year) | SegmentValue::CenterOf(year) => year.to_string(),
        SegmentValue::Last => String::new(),
    }
}

/// Bar chart of films released per year.
pub fn render_films_per_year(series: &YearCounts, theme: &Theme) -> Result<String> {
    let (first, last) = year_bounds(series);
    // A segmented axis needs at least two distinct values to have a width
    let last = if first == last { last + 1 } else { last };
    let y_max = series.values().copied().max().unwrap_or(0);
    let y_top = y_max + y_max / 10 + 1;

    render_svg(|root| {
        root.fill(&theme.background)?;

        let mut chart = ChartBuilder::on(root)
            .caption("Films Released per Year", caption_style(theme))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d((first..last).into_segmented(), 0u64..y_top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(&theme.grid.mix(0.4))
            .light_line_style(&theme.background)
            .axis_style(&theme.text)
            .label_style(label_style(theme))
            .axis_desc_style(label_style(theme))
            .x_labels(12)
            .x_label_formatter(&segment_year_label)
            .x_desc("Year")
            .y_desc("Number of Films")
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(theme.purple.filled())
                .margin(4)
                .data(series.iter().map(|(year, count)| (*year, *count))),
        )?;

        Ok(())
    })
}

/// Line chart of box office revenue per year.
pub fn render_box_office_per_year(series: &YearTotals, theme: &Theme) -> Result<String> {
    render_year_totals(series, theme, "Box Office Revenue per Year", theme.green, false)
}

/// Area chart of worldwide gross revenue per year.
pub fn render_worldwide_gross_per_year(series: &YearTotals, theme: &Theme) -> Result<String> {
    render_year_totals(series, theme, "Worldwide Gross Revenue per Year", theme.orange, true)
}

fn render_year_totals(
    series: &YearTotals,
    theme: &Theme,
    title: &str,
    color: RGBColor,
    filled: bool,
) -> Result<String> {
    let (first, last) = year_bounds(series);
    let x_range = if first == last { first - 1..last + 1 } else { first..last };
    let (y_bottom, y_top) = value_bounds(series);
    let points: Vec<(i32, f64)> = series
        .iter()
        .filter(|(_, total)| total.is_finite())
        .map(|(year, total)| (*year, *total))
        .collect();

    render_svg(|root| {
        root.fill(&theme.background)?;

        let mut chart = ChartBuilder::on(root)
            .caption(title, caption_style(theme))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_bottom..y_top)?;

        chart
            .configure_mesh()
            .bold_line_style(&theme.grid.mix(0.4))
            .light_line_style(&theme.background)
            .axis_style(&theme.text)
            .label_style(label_style(theme))
            .axis_desc_style(label_style(theme))
            .x_labels(12)
            .x_label_formatter(&|year: &i32| year.to_string())
            .y_label_formatter(&|amount: &f64| compact_amount(*amount))
            .x_desc("Year")
            .y_desc("Revenue ($)")
            .draw()?;

        if filled {
            chart.draw_series(
                AreaSeries::new(points.iter().copied(), 0.0, &color.mix(0.35))
                    .border_style(color.stroke_width(2)),
            )?;
        } else {
            chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?;
            chart.draw_series(points.iter().map(|point| Circle::new(*point, 3, color.filled())))?;
        }

        Ok(())
    })
}

/// Bar chart of the top directors by number of films.
pub fn render_top_directors(entries: &[RankedEntry], theme: &Theme) -> Result<String> {
    // Same minimum-width rule as the per-year bars
    let last_index = (entries.len() as i32 - 1).max(1);
    let y_top = entries.iter().map(|e| e.count).max().unwrap_or(0) + 1;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let director_label = |value: &SegmentValue<i32>| match value {
        SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => names
            .get(*index as usize)
            .map(|name| name.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    render_svg(|root| {
        root.fill(&theme.background)?;

        let mut chart = ChartBuilder::on(root)
            .caption("Top 3 Directors by Number of Films", caption_style(theme))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d((0..last_index).into_segmented(), 0u64..y_top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(&theme.grid.mix(0.4))
            .light_line_style(&theme.background)
            .axis_style(&theme.text)
            .label_style(label_style(theme))
            .axis_desc_style(label_style(theme))
            .x_labels(entries.len().max(1))
            .x_label_formatter(&director_label)
            .x_desc("Director")
            .y_desc("Number of Films")
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(theme.pink.filled())
                .margin(30)
                .data(entries.iter().enumerate().map(|(i, e)| (i as i32, e.count))),
        )?;

        Ok(())
    })
}

/// Pie chart of the top film producing countries, with a legend.
pub fn render_top_countries(entries: &[RankedEntry], theme: &Theme) -> Result<String> {
    let total: u64 = entries.iter().map(|e| e.count).sum();
    let colors = theme.slice_colors();

    render_svg(|root| {
        root.fill(&theme.background)?;
        let area = root.titled("Top Film Producing Countries", caption_style(theme))?;
        let (width, height) = area.dim_in_pixel();

        if total == 0 {
            area.draw(&Text::new(
                "No data",
                (width as i32 / 2 - 30, height as i32 / 2),
                label_style(theme),
            ))?;
            return Ok(());
        }

        let radius = (f64::from(width.min(height)) / 2.0 - 30.0).max(10.0);
        let center = (f64::from(width) * 0.35, f64::from(height) / 2.0);
        let legend_x = (f64::from(width) * 0.7) as i32;

        // Slices start at twelve o'clock and run clockwise
        let mut start = -PI / 2.0;
        for (i, entry) in entries.iter().enumerate() {
            let share = entry.count as f64 / total as f64;
            let sweep = share * 2.0 * PI;
            let color = colors[i % colors.len()];

            area.draw(&Polygon::new(wedge(center, radius, start, sweep), color.filled()))?;
            start += sweep;

            let y = 40 + i as i32 * 32;
            area.draw(&Rectangle::new([(legend_x, y), (legend_x + 18, y + 18)], color.filled()))?;
            area.draw(&Text::new(
                format!("{} ({:.1}%)", entry.name, share * 100.0),
                (legend_x + 28, y + 2),
                label_style(theme),
            ))?;
        }

        Ok(())
    })
}

/// Outline of one pie slice as a polygon: the center, then points along the arc.
fn wedge(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep / (2.0 * PI)) * 180.0).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push((center.0.round() as i32, center.1.round() as i32));
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        points.push((
            (center.0 + radius * angle.cos()).round() as i32,
            (center.1 + radius * angle.sin()).round() as i32,
        ));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(name: &str, count: u64) -> RankedEntry {
        RankedEntry {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_compact_amount() {
        assert_eq!(compact_amount(2_923_706_026.0), "2.9B");
        assert_eq!(compact_amount(785_221_649.0), "785.2M");
        assert_eq!(compact_amount(1_500.0), "1.5K");
        assert_eq!(compact_amount(42.0), "42");
    }

    #[test]
    fn test_year_bounds() {
        let mut series = YearCounts::new();
        assert_eq!(year_bounds(&series), (0, 0));

        series.insert(2019, 1);
        series.insert(1997, 1);
        assert_eq!(year_bounds(&series), (1997, 2019));
    }

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!((actual.0 - expected.0).abs() < 1e-9, "{actual:?} != {expected:?}");
        assert!((actual.1 - expected.1).abs() < 1e-9, "{actual:?} != {expected:?}");
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds(&YearTotals::new()), (0.0, 1.0));

        let series: YearTotals = [(2020, -5.0), (2021, 10.0)].into_iter().collect();
        assert_close(value_bounds(&series), (-5.5, 11.0));

        let series: YearTotals = [(2020, f64::INFINITY), (2021, f64::NAN), (2022, 10.0)]
            .into_iter()
            .collect();
        assert_close(value_bounds(&series), (0.0, 11.0));

        let series: YearTotals = [(2020, f64::MAX)].into_iter().collect();
        assert!(value_bounds(&series).1.is_finite());
    }

    #[test]
    fn test_render_infinite_total() {
        let series: YearTotals = [(2020, f64::INFINITY), (2021, 1.0)].into_iter().collect();
        let theme = Theme::monokai();

        let svg = render_worldwide_gross_per_year(&series, &theme).unwrap();
        assert!(svg.contains("Worldwide Gross Revenue per Year"));
        assert!(render_box_office_per_year(&series, &theme).is_ok());
    }

    #[test]
    fn test_render_negative_total() {
        let series: YearTotals = [(2020, -250.0), (2021, 1_000.0)].into_iter().collect();
        let svg = render_box_office_per_year(&series, &Theme::monokai()).unwrap();
        assert!(svg.contains("Box Office Revenue per Year"));
    }

    #[test]
    fn test_wedge_starts_at_center() {
        let points = wedge((100.0, 100.0), 50.0, 0.0, PI);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (150, 100));
        assert_eq!(*points.last().unwrap(), (50, 100));
    }

    #[test]
    fn test_render_films_per_year() {
        let series: YearCounts = [(2019, 2), (2020, 1), (2021, 4)].into_iter().collect();
        let svg = render_films_per_year(&series, &Theme::monokai()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Films Released per Year"));
        assert!(svg.contains("Number of Films"));
    }

    #[test]
    fn test_render_single_year() {
        let series: YearTotals = [(2009, 2_923_706_026.0)].into_iter().collect();
        let svg = render_worldwide_gross_per_year(&series, &Theme::monokai()).unwrap();
        assert!(svg.contains("Worldwide Gross Revenue per Year"));
    }

    #[test]
    fn test_render_line_chart() {
        let series: YearTotals = [(1997, 674.0), (2009, 785.0)].into_iter().collect();
        let svg = render_box_office_per_year(&series, &Theme::monokai()).unwrap();
        assert!(svg.contains("Box Office Revenue per Year"));
        assert!(svg.contains("Revenue ($)"));
    }

    #[test]
    fn test_render_directors_uses_names() {
        let entries = vec![ranked("James Cameron", 3), ranked("Joe Russo", 2)];
        let svg = render_top_directors(&entries, &Theme::monokai()).unwrap();
        assert!(svg.contains("Top 3 Directors by Number of Films"));
        assert!(svg.contains("James Cameron"));
    }

    #[test]
    fn test_render_pie_legend() {
        let entries = vec![ranked("Japan", 3), ranked("France", 1)];
        let svg = render_top_countries(&entries, &Theme::monokai()).unwrap();

        assert!(svg.contains("Top Film Producing Countries"));
        assert!(svg.contains("Japan (75.0%)"));
        assert!(svg.contains("France (25.0%)"));
    }

    #[test]
    fn test_empty_series_render() {
        let theme = Theme::monokai();
        assert!(render_films_per_year(&YearCounts::new(), &theme).is_ok());
        assert!(render_box_office_per_year(&YearTotals::new(), &theme).is_ok());
        assert!(render_worldwide_gross_per_year(&YearTotals::new(), &theme).is_ok());
        assert!(render_top_directors(&[], &theme).is_ok());

        let pie = render_top_countries(&[], &theme).unwrap();
        assert!(pie.contains("No data"));
    }
}
