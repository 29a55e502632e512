//! This example queries the vessels inside an area of interest and writes them to a GeoJSON file.
//!
//! Run it with the path to a WKT or GraphQL file, the format of that file and optionally `--fix` to split polygons
//! crossing the antimeridian:
//!
//! ```shell
//! MERIDIAN_API_TOKEN=... cargo run --example vessel_geojson -- ./areas/pacific.txt wkt --fix
//! ```
//!
//! Next to the input file it creates `<name>_modified.graphql` (if the query was generated or rewritten),
//! `<name>_data.json` with the API response and `<name>_result.json` (or `<name>_result_fixed.json`) with the
//! resulting feature collection. The file name is also used as the name of the generated query.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use meridian::client::{ClientConfig, HttpVesselClient};
use meridian::pipeline::{InputDocument, Pipeline};
use meridian::SplitCorrector;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input_file, format, fix) = match args.as_slice() {
        [input, format] => (input, format, false),
        [input, format, flag] if flag == "--fix" => (input, format, true),
        _ => {
            return Err(anyhow!(
                "usage: vessel_geojson <input file> <wkt|graphql> [--fix]"
            ))
        }
    };

    let input_file = Path::new(input_file);
    let name = input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("invalid input file name: {}", input_file.display()))?;

    let text = std::fs::read_to_string(input_file)?;
    let input = match format.as_str() {
        "wkt" => InputDocument::Wkt(text),
        "graphql" => InputDocument::GraphQl(text),
        other => return Err(anyhow!("input format must be `wkt` or `graphql`, got {other:?}")),
    };

    let client = HttpVesselClient::new(ClientConfig::from_env())?;
    let output = Pipeline::new(client, SplitCorrector).run(&input, fix, name)?;

    if output.query_modified {
        let query_file = sibling(input_file, name, "_modified.graphql");
        std::fs::write(&query_file, &output.query)?;
        log::info!("Query saved to {}", query_file.display());
    }

    let data_file = sibling(input_file, name, "_data.json");
    std::fs::write(&data_file, serde_json::to_string_pretty(&output.response)?)?;
    log::info!("Response saved to {}", data_file.display());

    let suffix = if fix { "_result_fixed.json" } else { "_result.json" };
    let result_file = sibling(input_file, name, suffix);
    std::fs::write(&result_file, serde_json::to_string_pretty(&output.collection)?)?;
    log::info!(
        "{} feature(s) saved to {}",
        output.collection.features.len(),
        result_file.display()
    );

    Ok(())
}

fn sibling(input_file: &Path, name: &str, suffix: &str) -> PathBuf {
    input_file.with_file_name(format!("{name}{suffix}"))
}
