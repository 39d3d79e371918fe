use anyhow::{Context, Result};
use data_loader::{JsonFileSource, RecordSource, parse_films};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/films.json".to_string());

    println!("Loading film documents from {}...\n", path);

    let start = Instant::now();
    let source = JsonFileSource::new(&path);
    let documents = source
        .fetch_all_films()
        .await
        .with_context(|| format!("Failed to read documents from {}", path))?;
    let fetched = start.elapsed();

    let films = parse_films(&documents).context("Failed to coerce documents")?;
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Fetch time: {:?}", fetched);
    println!("Total time: {:?}", elapsed);
    println!("Films: {}", films.len());
    println!("With release year: {}", films.iter().filter(|f| f.release_year.is_some()).count());

    Ok(())
}
