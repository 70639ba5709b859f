//! Demonstration runner: generate blobs around a few origins, cluster them,
//! print a summary and optionally dump `.npy` files for plotting.
//!
//! Run with: cargo run --release --bin kmeans-demo -- --output-dir out/

extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;
use ndarray::Array1;
use ndarray_npy::WriteNpyExt;
use planar_kmeans::synthetic::{generate_dataset, DEFAULT_STD_DEV};
use planar_kmeans::{points_to_array, KMeansConfig, PlanarKMeans, Point};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "k-means++ clustering of synthetic 2-D blobs")]
struct Args {
    /// Number of clusters to fit
    #[arg(short = 'k', long, default_value_t = 3)]
    num_clusters: usize,

    /// Points drawn around each origin
    #[arg(short = 'n', long, default_value_t = 200)]
    points_per_cluster: usize,

    /// Standard deviation of the radial distance
    #[arg(long, default_value_t = DEFAULT_STD_DEV)]
    std_dev: f64,

    /// Seed for both data generation and clustering
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Blob origin as `x,y`; repeat for several (default: 5,4 8,2 11,6)
    #[arg(long = "origin", value_parser = parse_point)]
    origins: Vec<Point>,

    /// Write data/origins/centroids/labels as .npy files into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{}`: {}", s, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{}`: {}", s, e))?;
    Ok(Point::new(x, y))
}

fn write_npy<T: WriteNpyExt>(dir: &Path, name: &str, array: &T) -> Result<(), Box<dyn std::error::Error>> {
    let path = dir.join(name);
    array.write_npy(BufWriter::new(File::create(&path)?))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = Args::parse();
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    if args.origins.is_empty() {
        args.origins = vec![
            Point::new(5.0, 4.0),
            Point::new(8.0, 2.0),
            Point::new(11.0, 6.0),
        ];
    }
    debug!("params: {:#?}", args);

    if args.num_clusters == 0 {
        error!("--num-clusters must be greater than 0");
        std::process::exit(1);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let data = generate_dataset(&args.origins, args.points_per_cluster, args.std_dev, &mut rng)?;
    info!(
        "generated {} points around {} origins",
        data.len(),
        args.origins.len()
    );

    let config = KMeansConfig::new(args.num_clusters)
        .with_seed(args.seed)
        .with_verbose(true);
    let mut kmeans = PlanarKMeans::with_config(config);
    kmeans.train(&data)?;

    let state = kmeans.state().ok_or("no clustering after training")?;

    println!("Origins:");
    for (i, origin) in args.origins.iter().enumerate() {
        println!("  Origin {}: {}", i, origin);
    }
    println!(
        "Centroids after {} iterations (inertia {:.4}):",
        state.n_iterations(),
        state.inertia()
    );
    for (i, (centroid, members)) in state.centroids().iter().zip(state.clusters()).enumerate() {
        println!(
            "  Cluster {}: {} with {} points ({:.1}%)",
            i,
            centroid,
            members.len(),
            members.len() as f64 / data.len() as f64 * 100.0
        );
    }

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)?;
        let labels: Array1<i64> = state.labels().iter().map(|&l| l as i64).collect();

        write_npy(dir, "data.npy", &points_to_array(&data))?;
        write_npy(dir, "origins.npy", &points_to_array(&args.origins))?;
        write_npy(dir, "centroids.npy", &state.centroids_array())?;
        write_npy(dir, "labels.npy", &labels)?;
    }

    info!("finished");
    Ok(())
}
