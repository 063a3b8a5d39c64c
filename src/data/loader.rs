use {
    crate::{
        config::{PERSISTENCE, snowfall_filename},
        domain::{Signal, Year},
        models::{SignalSeries, SignalStore},
    },
    anyhow::{Context, Result, bail},
    std::{
        collections::BTreeMap,
        fs::File,
        io::BufReader,
        path::{Path, PathBuf},
    },
};

/// Converts a JSON-shaped `{"1964": [..], ..}` map into a year-keyed series.
/// Year keys must parse as integers. Two keys naming the same year are rejected.
pub fn series_from_str_keyed(name: &str, raw: BTreeMap<String, Vec<f64>>) -> Result<SignalSeries> {
    let mut values = BTreeMap::new();

    for (key, observations) in raw {
        let year: Year = key
            .trim()
            .parse()
            .with_context(|| format!("Invalid year key '{}' in {} series", key, name))?;

        if values.insert(year, observations).is_some() {
            bail!("Duplicate year {} in {} series", year, name);
        }
    }

    Ok(SignalSeries::new(name, values))
}

/// Reads one series file. Observations must be numbers: nulls or strings fail the parse
/// here rather than turning into NaN distances later.
pub fn load_series(path: &Path, name: &str) -> Result<SignalSeries> {
    let file = File::open(path).context(format!("Failed to open file: {:?}", path))?;
    let reader = BufReader::new(file);

    let raw: BTreeMap<String, Vec<f64>> = serde_json::from_reader(reader)
        .context(format!("Failed to parse {} series from: {:?}", name, path))?;

    let series = series_from_str_keyed(name, raw)?;

    match (series.first_year(), series.last_year()) {
        (Some(first), Some(last)) => log::info!(
            "Loaded {} series: {} years ({}..={}) from {:?}",
            name,
            series.len(),
            first,
            last,
            path
        ),
        _ => log::warn!("⚠ {} series at {:?} is empty", name, path),
    }

    Ok(series)
}

/// Loads ONI and PDO from `data_dir` using the configured relative paths.
pub fn load_signal_store(data_dir: &Path) -> Result<SignalStore> {
    let oni = load_series(&data_dir.join(PERSISTENCE.oni_path), &Signal::Oni.to_string())?;
    let pdo = load_series(&data_dir.join(PERSISTENCE.pdo_path), &Signal::Pdo.to_string())?;
    Ok(SignalStore::new(oni, pdo))
}

/// Loads the per-season snowfall record of one airport (series named after the airport).
pub fn load_snowfall(data_dir: &Path, airport: &str) -> Result<SignalSeries> {
    let path: PathBuf = data_dir
        .join(PERSISTENCE.snowfall_directory)
        .join(snowfall_filename(airport));

    load_series(&path, &airport.to_uppercase())
        .with_context(|| format!("No usable snowfall data for airport {}", airport.to_uppercase()))
}
