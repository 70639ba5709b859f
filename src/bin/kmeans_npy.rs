//! Cluster points stored in a .npy file and save the result as .npy files.
//!
//! The input is an `(n, 2)` float64 array. Centroids are written as a
//! `(k, 2)` float64 array and labels as an `(n,)` int64 array, so an external
//! plotting script can pick them up.
//!
//! Usage: `kmeans-npy <input.npy> <centroids_out.npy> <labels_out.npy> <k> <seed>`

extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use ndarray::{Array1, Array2};
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use planar_kmeans::{KMeansConfig, PlanarKMeans};
use std::env;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 6 {
        eprintln!(
            "Usage: {} <input.npy> <centroids_out.npy> <labels_out.npy> <k> <seed>",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let centroids_path = &args[2];
    let labels_path = &args[3];
    let k: usize = args[4].parse()?;
    let seed: u64 = args[5].parse()?;

    let reader = BufReader::new(File::open(input_path)?);
    let data: Array2<f64> = Array2::read_npy(reader)?;
    info!("Loaded data: {} points", data.nrows());

    let config = KMeansConfig::new(k).with_seed(seed).with_verbose(true);
    let mut kmeans = PlanarKMeans::with_config(config);
    kmeans.train_array(&data.view())?;

    let state = kmeans.state().ok_or("No clustering after training")?;
    let labels: Array1<i64> = state.labels().iter().map(|&l| l as i64).collect();

    state.centroids_array().write_npy(File::create(centroids_path)?)?;
    labels.write_npy(File::create(labels_path)?)?;

    info!("Saved centroids to {} and labels to {}", centroids_path, labels_path);

    Ok(())
}
