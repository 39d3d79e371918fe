//! Integration tests for the pipeline.
//!
//! These tests run the full batch call (documents in, five series out) on
//! small hand-built tables and check the properties the dashboard relies on.

use data_loader::{DataLoadError, Film, FilmDocument, GrossValue, parse_films};
use pipeline::{DashboardStats, StatsPipeline, aggregate_documents, compute_dashboard_stats};

fn document(
    title: &str,
    year: Option<i32>,
    box_office: f64,
    gross: GrossValue,
    directors: &[&str],
    country: &str,
) -> FilmDocument {
    FilmDocument {
        title: Some(title.to_string()),
        release_year: year,
        box_office: Some(box_office),
        worldwide_gross: Some(gross),
        directors: directors.iter().map(|d| d.to_string()).collect(),
        country_of_origin: Some(country.to_string()),
    }
}

fn create_test_documents() -> Vec<FilmDocument> {
    vec![
        document("Avatar", Some(2009), 785.0, GrossValue::Number(2923.0), &["James Cameron"], "United States"),
        document("Avengers: Endgame", Some(2019), 858.0, GrossValue::from("2799"), &["Anthony Russo", "Joe Russo"], "United States"),
        document("Avatar: The Way of Water", Some(2022), 684.0, GrossValue::Number(2320.0), &["James Cameron"], "United States"),
        document("Titanic", Some(1997), 674.0, GrossValue::from(" 2264 "), &["James Cameron"], "United States"),
        document("Ne Zha 2", Some(2025), 20.0, GrossValue::Number(2200.0), &["Jiaozi"], "China"),
        document("Star Wars: The Force Awakens", Some(2015), 936.0, GrossValue::Number(2071.0), &["J. J. Abrams"], "United States"),
        document("Avengers: Infinity War", Some(2018), 678.0, GrossValue::Number(2052.0), &["Anthony Russo", "Joe Russo"], "United States"),
        document("Spider-Man: No Way Home", Some(2021), 814.0, GrossValue::Number(1921.0), &["Jon Watts"], "United States"),
        document("Inside Out 2", Some(2024), 652.0, GrossValue::Number(1699.0), &["Kelsey Mann"], "United States"),
        document("Jurassic World", Some(2015), 653.0, GrossValue::Number(1671.0), &["Colin Trevorrow"], "United States"),
        document("The Lion King", None, 543.0, GrossValue::Number(1663.0), &["Jon Favreau"], "United Kingdom"),
        document("Frozen II", Some(2019), 477.0, GrossValue::Number(1453.0), &["Chris Buck", "Jennifer Lee"], "Japan"),
    ]
}

// Scenario A
#[test]
fn test_films_and_box_office_per_year() {
    let films = vec![
        Film { release_year: Some(2020), box_office: Some(10.0), ..Default::default() },
        Film { release_year: Some(2020), box_office: Some(20.0), ..Default::default() },
        Film { release_year: Some(2021), box_office: Some(5.0), ..Default::default() },
    ];

    let stats = compute_dashboard_stats(&films);

    assert_eq!(stats.films_per_year.into_iter().collect::<Vec<_>>(), vec![(2020, 2), (2021, 1)]);
    assert_eq!(
        stats.box_office_per_year.into_iter().collect::<Vec<_>>(),
        vec![(2020, 30.0), (2021, 5.0)]
    );
}

// Scenario B
#[test]
fn test_director_tie_break_is_first_encounter() {
    let films: Vec<Film> = [vec!["A", "B"], vec!["A"], vec!["C"]]
        .into_iter()
        .map(|directors| Film {
            directors: directors.into_iter().map(str::to_string).collect(),
            ..Default::default()
        })
        .collect();

    let stats = compute_dashboard_stats(&films);
    let ranked: Vec<(&str, u64)> = stats
        .top_directors
        .iter()
        .map(|e| (e.name.as_str(), e.count))
        .collect();

    assert_eq!(ranked, vec![("A", 2), ("B", 1), ("C", 1)]);
}

// Scenario C
#[test]
fn test_malformed_gross_fails_the_whole_run() {
    let mut documents = create_test_documents();
    documents[3].worldwide_gross = Some(GrossValue::from("not-a-number"));

    let err = aggregate_documents(&documents).unwrap_err();
    assert!(matches!(err, DataLoadError::MalformedRecord { index: 3, .. }));
}

// Scenario D
#[test]
fn test_empty_table_yields_empty_series() {
    let stats = aggregate_documents(&[]).unwrap();

    assert!(stats.films_per_year.is_empty());
    assert!(stats.box_office_per_year.is_empty());
    assert!(stats.worldwide_gross_per_year.is_empty());
    assert!(stats.top_directors.is_empty());
    assert!(stats.top_countries.is_empty());
    assert_eq!(stats, DashboardStats::default());
}

#[test]
fn test_full_pipeline() {
    let stats = aggregate_documents(&create_test_documents()).unwrap();

    // 2015 and 2019 have two films each; The Lion King has no year
    assert_eq!(stats.films_per_year[&2015], 2);
    assert_eq!(stats.films_per_year[&2019], 2);
    assert_eq!(stats.films_with_year(), 11);

    assert_eq!(stats.box_office_per_year[&2015], 936.0 + 653.0);
    assert_eq!(stats.worldwide_gross_per_year[&2019], 2799.0 + 1453.0);
    assert_eq!(stats.worldwide_gross_per_year[&1997], 2264.0);

    let directors: Vec<&str> = stats.top_directors.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(directors, vec!["James Cameron", "Anthony Russo", "Joe Russo"]);
    assert_eq!(stats.top_directors[0].count, 3);

    let countries: Vec<&str> = stats.top_countries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(countries, vec!["United States", "China", "United Kingdom", "Japan"]);
    assert_eq!(stats.top_countries[0].count, 9);
}

#[test]
fn test_year_count_sum_matches_films_with_year() {
    let documents = create_test_documents();
    let films = parse_films(&documents).unwrap();
    let stats = compute_dashboard_stats(&films);

    let with_year = films.iter().filter(|f| f.release_year.is_some()).count() as u64;
    assert_eq!(stats.films_per_year.values().sum::<u64>(), with_year);
}

#[test]
fn test_sums_are_non_negative_for_non_negative_input() {
    let stats = aggregate_documents(&create_test_documents()).unwrap();

    assert!(stats.box_office_per_year.values().all(|v| *v >= 0.0));
    assert!(stats.worldwide_gross_per_year.values().all(|v| *v >= 0.0));
}

#[test]
fn test_rankings_respect_caps_and_membership() {
    let documents = create_test_documents();
    let stats = aggregate_documents(&documents).unwrap();

    assert!(stats.top_directors.len() <= 3);
    assert!(stats.top_countries.len() <= 5);

    for entry in &stats.top_directors {
        assert!(documents.iter().any(|d| d.directors.contains(&entry.name)));
    }
    for entry in &stats.top_countries {
        assert!(documents.iter().any(|d| d.country_of_origin.as_deref() == Some(entry.name.as_str())));
    }
}

#[test]
fn test_missing_year_only_affects_year_series() {
    let documents = vec![document(
        "Untimed",
        None,
        1.0,
        GrossValue::Number(2.0),
        &["Nobody"],
        "Nowhere",
    )];

    let stats = aggregate_documents(&documents).unwrap();
    assert!(stats.films_per_year.is_empty());
    assert!(stats.box_office_per_year.is_empty());
    assert!(stats.worldwide_gross_per_year.is_empty());
    assert_eq!(stats.top_directors.len(), 1);
    assert_eq!(stats.top_countries.len(), 1);
}

#[test]
fn test_pipeline_is_idempotent() {
    let documents = create_test_documents();
    let pipeline = StatsPipeline::new();

    let first = pipeline.aggregate_documents(&documents).unwrap();
    let second = pipeline.aggregate_documents(&documents).unwrap();

    assert_eq!(first, second);
    // Bit-identical sums, not just approximately equal
    for (a, b) in first
        .worldwide_gross_per_year
        .values()
        .zip(second.worldwide_gross_per_year.values())
    {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_nan_gross_text_does_not_poison_year_total() {
    let documents = vec![
        document("Counted", Some(2020), 1.0, GrossValue::from("100"), &["A"], "Japan"),
        document("Unknown Gross", Some(2020), 1.0, GrossValue::from("nan"), &["B"], "Japan"),
    ];

    let stats = aggregate_documents(&documents).unwrap();
    assert_eq!(stats.worldwide_gross_per_year[&2020], 100.0);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["worldwide_gross_per_year"]["2020"], 100.0);
}
