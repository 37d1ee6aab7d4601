//! Headless check of the dashboard data layer.
//!
//! Loads the launch dataset, then prints the pie and scatter inputs the UI
//! would show for "All Sites" and for every individual site.
//!
//! Run with:
//!   cargo run -p launch-core --example summary [-- path/to/spacex_launch_dash.csv]

use launch_core::config::DEFAULT_DATASET_PATH;
use launch_core::{DashConfig, Dashboard, Dataset, SiteSelection};

fn main() {
    println!("=== Launch Dataset Summary ===");

    // 1. Load the CSV.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string());
    let dataset = match Dataset::load(&path) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("failed to load {path}: {err}");
            std::process::exit(1);
        }
    };
    println!("{} records, {} successes", dataset.len(), dataset.total_successes());
    if let Some((min, max)) = dataset.payload_bounds() {
        println!("Payload range: {min:.0} .. {max:.0} kg");
    }

    // 2. Build the dashboard at its startup state.
    let mut dashboard = Dashboard::new(dataset, DashConfig::default());
    let sites = dashboard.sites().to_vec();

    // 3. Walk every dropdown option.
    let selections =
        std::iter::once(SiteSelection::All).chain(sites.into_iter().map(SiteSelection::Site));
    for selection in selections {
        dashboard.set_site(selection);

        if let Some(pie) = dashboard.pie() {
            println!();
            println!("{}", pie.title);
            for (i, slice) in pie.slices.iter().enumerate() {
                println!(
                    "  {:<16} {:>4}  ({:.1}%)",
                    slice.category.label(),
                    slice.count,
                    pie.fraction(i) * 100.0
                );
            }
        }

        if let Some(scatter) = dashboard.scatter() {
            println!(
                "{}: {} points in {} color groups, x = [{:.0}, {:.0}]",
                scatter.title,
                scatter.points.len(),
                scatter.groups().len(),
                scatter.x_bounds.low,
                scatter.x_bounds.high
            );
        }
    }

    println!();
    println!("Done.");
}
