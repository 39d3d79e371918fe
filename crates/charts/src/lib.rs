//! # Charts Crate
//!
//! Renders the five dashboard series as SVG charts in the Monokai theme.
//!
//! | Series                   | Chart |
//! |--------------------------|-------|
//! | films per year           | bar   |
//! | box office per year      | line  |
//! | worldwide gross per year | area  |
//! | top directors            | bar   |
//! | top countries            | pie   |
//!
//! ## Example Usage
//!
//! ```ignore
//! use charts::{Theme, render_all};
//!
//! let charts = render_all(&stats, &Theme::monokai())?;
//! std::fs::write("films.svg", &charts.films_per_year)?;
//! ```

pub mod error;
pub mod render;
pub mod theme;

use std::time::Instant;

use pipeline::DashboardStats;
use tracing::debug;

pub use error::{ChartError, Result};
pub use render::{
    compact_amount, render_box_office_per_year, render_films_per_year, render_top_countries,
    render_top_directors, render_worldwide_gross_per_year,
};
pub use theme::{Theme, css_hex};

/// The five rendered charts, one SVG document each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSet {
    pub films_per_year: String,
    pub box_office_per_year: String,
    pub worldwide_gross_per_year: String,
    pub top_directors: String,
    pub top_countries: String,
}

/// Render every series.
///
/// The charts are independent of each other, so they are drawn in parallel
/// with nested `rayon::join`s; the result layout does not depend on which
/// finishes first.
pub fn render_all(stats: &DashboardStats, theme: &Theme) -> Result<ChartSet> {
    let start = Instant::now();

    let ((films_per_year, (box_office_per_year, worldwide_gross_per_year)), (top_directors, top_countries)) =
        rayon::join(
            || {
                rayon::join(
                    || render_films_per_year(&stats.films_per_year, theme),
                    || {
                        rayon::join(
                            || render_box_office_per_year(&stats.box_office_per_year, theme),
                            || render_worldwide_gross_per_year(&stats.worldwide_gross_per_year, theme),
                        )
                    },
                )
            },
            || {
                rayon::join(
                    || render_top_directors(&stats.top_directors, theme),
                    || render_top_countries(&stats.top_countries, theme),
                )
            },
        );

    let charts = ChartSet {
        films_per_year: films_per_year?,
        box_office_per_year: box_office_per_year?,
        worldwide_gross_per_year: worldwide_gross_per_year?,
        top_directors: top_directors?,
        top_countries: top_countries?,
    };

    debug!("Rendered 5 charts in {:.2?}", start.elapsed());
    Ok(charts)
}
