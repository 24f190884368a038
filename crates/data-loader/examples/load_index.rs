use data_loader::FilmographyIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/imdb_data_sample.tsv");

    println!("Loading filmography from {}...\n", path.display());

    let start = Instant::now();
    let index = FilmographyIndex::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (titles, actors, cast_entries) = index.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Titles: {}", titles);
    println!("Actors: {}", actors);
    println!("Cast entries: {}", cast_entries);
    println!("Approx. memory: {} bytes", index.approx_memory_bytes());
    println!("\nPerformance: {:.0} rows/second",
             cast_entries as f64 / elapsed.as_secs_f64());
}
