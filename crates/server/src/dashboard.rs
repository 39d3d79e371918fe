//! # Dashboard
//!
//! This module builds everything the server will ever send, once, at startup:
//! 1. Fetch every film document from the record source
//! 2. Coerce documents into typed films
//! 3. Aggregate the five series
//! 4. Render the five charts
//! 5. Assemble the page and serialize the stats
//!
//! The resulting [`Dashboard`] is immutable. Request handlers share it
//! through an `Arc` and never lock anything.

use std::time::Instant;

use anyhow::{Context, Result};
use axum::body::Bytes;
use charts::{ChartSet, render_all};
use data_loader::{Film, RecordSource, parse_films};
use pipeline::{DashboardStats, compute_dashboard_stats};
use tracing::{info, warn};

use crate::page::{PageOptions, render_page};

/// The fully built dashboard: stats, charts and the ready-to-send page.
#[derive(Debug, Clone)]
pub struct Dashboard {
    film_count: usize,
    stats: DashboardStats,
    charts: ChartSet,
    page_html: Bytes,
    stats_json: Bytes,
}

impl Dashboard {
    /// Fetch from `source` and build the dashboard.
    ///
    /// Any failure (source unreachable, malformed record, rendering error)
    /// aborts the build; there is no partially built dashboard.
    pub async fn build(source: &impl RecordSource, options: &PageOptions) -> Result<Self> {
        let start_time = Instant::now();

        info!("Fetching films from {}", source.name());
        let documents = source
            .fetch_all_films()
            .await
            .with_context(|| format!("Failed to fetch films from {}", source.name()))?;
        info!("Fetched {} film documents", documents.len());

        let films = parse_films(&documents).context("Failed to coerce film records")?;

        // Aggregation and chart rendering are CPU-bound; keep them off the async workers
        let options = options.clone();
        let dashboard = tokio::task::spawn_blocking(move || Self::from_films(&films, &options))
            .await
            .context("Dashboard build task panicked")??;

        info!(
            "Dashboard built from {} films in {:.2?}",
            dashboard.film_count,
            start_time.elapsed()
        );
        Ok(dashboard)
    }

    /// Build the dashboard from films that are already typed.
    pub fn from_films(films: &[Film], options: &PageOptions) -> Result<Self> {
        if films.is_empty() {
            warn!("No films found; every chart will be empty");
        }

        let stats = compute_dashboard_stats(films);
        info!(
            "Aggregated {} years, top director: {}, top country: {}",
            stats.films_per_year.len(),
            stats.top_directors.first().map(|e| e.name.as_str()).unwrap_or("-"),
            stats.top_countries.first().map(|e| e.name.as_str()).unwrap_or("-"),
        );

        let charts = render_all(&stats, &options.theme).context("Failed to render charts")?;
        let page_html = render_page(&charts, options);
        let stats_json = serde_json::to_vec(&stats).context("Failed to serialize stats")?;

        Ok(Self {
            film_count: films.len(),
            stats,
            charts,
            page_html: Bytes::from(page_html),
            stats_json: Bytes::from(stats_json),
        })
    }

    pub fn film_count(&self) -> usize {
        self.film_count
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    /// The page as served on `/`
    pub fn page_html(&self) -> &str {
        // Built from a `String` in `from_films`, so always valid UTF-8
        std::str::from_utf8(&self.page_html).unwrap_or_default()
    }

    /// Cheap handle to the page bytes (reference counted, no copy)
    pub fn page_bytes(&self) -> Bytes {
        self.page_html.clone()
    }

    /// Cheap handle to the serialized stats
    pub fn stats_json(&self) -> Bytes {
        self.stats_json.clone()
    }
}
