use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DATA_FILE: &str = "cleaned_metadata.csv";
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

/// Explore CORD-19 paper metadata: filter by year and journal, browse a
/// sample, and view the pre-rendered charts.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct DashboardConfig {
    /// Metadata CSV to load
    #[arg(long = "data", value_name = "PATH", default_value = DEFAULT_DATA_FILE)]
    pub data_path: PathBuf,

    /// Directory holding the pre-rendered chart images
    #[arg(long = "assets", value_name = "DIR", default_value = ".")]
    pub asset_dir: PathBuf,

    /// Rows shown in the sample table
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            asset_dir: PathBuf::from("."),
            sample_rows: DEFAULT_SAMPLE_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_fixed_paths() {
        let cfg = DashboardConfig::try_parse_from(["cord19-explorer"]).expect("parse");
        let default = DashboardConfig::default();
        assert_eq!(cfg.data_path, default.data_path);
        assert_eq!(cfg.asset_dir, default.asset_dir);
        assert_eq!(cfg.sample_rows, 10);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = DashboardConfig::try_parse_from([
            "cord19-explorer",
            "--data",
            "data/meta.csv",
            "--assets",
            "charts",
            "--sample-rows",
            "25",
        ])
        .expect("parse");
        assert_eq!(cfg.data_path, PathBuf::from("data/meta.csv"));
        assert_eq!(cfg.asset_dir, PathBuf::from("charts"));
        assert_eq!(cfg.sample_rows, 25);
    }
}
