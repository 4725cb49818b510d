use vox_core::VoxScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = VoxScraper::new()?;

    println!("Fetching the What's On listing...\n");

    let movies = scraper.whats_on().await?;
    println!("Found {} movies:", movies.len());
    for (i, movie) in movies.iter().enumerate() {
        println!(
            "  {}. {} [{}] {}",
            i + 1,
            movie.title,
            movie.classification,
            movie.language
        );
    }

    // Peek at today's schedule for the first movie.
    if let Some(movie) = movies.first() {
        let today = chrono::Local::now().date_naive();
        println!("\nShowtimes for '{}' on {}:\n", movie.title, today);

        let showtimes = scraper.day_schedule(&movie.slug, today).await?;
        if showtimes.is_empty() {
            println!("  (no schedule published)");
        }
        for (cinema, experiences) in &showtimes {
            println!("  {cinema}");
            for (experience, times) in experiences {
                println!("    {} - {}", experience, times.join(", "));
            }
        }
    }

    Ok(())
}
