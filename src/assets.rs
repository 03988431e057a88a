use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Pre-rendered visualizations
// ---------------------------------------------------------------------------

/// One of the static charts produced by the offline plotting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visualization {
    pub heading: &'static str,
    pub file_name: &'static str,
    pub caption: &'static str,
}

pub const VISUALIZATIONS: [Visualization; 4] = [
    Visualization {
        heading: "1. Publications Over Time",
        file_name: "publications_over_time.png",
        caption: "Number of Publications Over Time",
    },
    Visualization {
        heading: "2. Top Publishing Journals",
        file_name: "top_journals.png",
        caption: "Top 10 Journals by Publication Count",
    },
    Visualization {
        heading: "3. Word Cloud of Paper Titles",
        file_name: "titles_wordcloud.png",
        caption: "Word Cloud of Paper Titles",
    },
    Visualization {
        heading: "4. Distribution of Papers by Source",
        file_name: "papers_by_source.png",
        caption: "Distribution of Papers by Source",
    },
];

/// Whether a visualization's image could be found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Found(PathBuf),
    Missing(PathBuf),
}

impl AssetStatus {
    /// Text shown in place of a missing image.
    pub fn warning(&self) -> Option<String> {
        match self {
            AssetStatus::Found(_) => None,
            AssetStatus::Missing(path) => Some(format!("Image not found: {}", path.display())),
        }
    }

    /// `file://` URI for egui's image loaders.
    pub fn image_uri(&self) -> Option<String> {
        match self {
            AssetStatus::Found(path) => Some(format!("file://{}", path.display())),
            AssetStatus::Missing(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    pub visualization: Visualization,
    pub status: AssetStatus,
}

impl Visualization {
    /// Look for the image inside `dir`. A missing file is logged, never fatal.
    pub fn locate(&self, dir: &Path) -> AssetStatus {
        let path = dir.join(self.file_name);
        if path.is_file() {
            AssetStatus::Found(path)
        } else {
            log::warn!("Image not found: {}", path.display());
            AssetStatus::Missing(path)
        }
    }
}

/// Resolve all four visualizations against `dir`, in display order.
pub fn resolve_all(dir: &Path) -> Vec<ResolvedAsset> {
    VISUALIZATIONS
        .iter()
        .map(|v| ResolvedAsset {
            visualization: *v,
            status: v.locate(dir),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_images_produce_warnings() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let resolved = resolve_all(dir.path());
        assert_eq!(resolved.len(), 4);
        for asset in &resolved {
            let warning = asset.status.warning().expect("warning for missing file");
            assert!(warning.contains(asset.visualization.file_name));
            assert_eq!(asset.status.image_uri(), None);
        }
    }

    #[test]
    fn present_images_are_found() {
        let dir = tempfile::tempdir().expect("tmp dir");
        std::fs::write(dir.path().join("top_journals.png"), b"\x89PNG").expect("write png");

        let resolved = resolve_all(dir.path());
        let found: Vec<_> = resolved
            .iter()
            .filter(|a| matches!(a.status, AssetStatus::Found(_)))
            .map(|a| a.visualization.file_name)
            .collect();
        assert_eq!(found, ["top_journals.png"]);

        let uri = resolved[1].status.image_uri().expect("uri");
        assert!(uri.starts_with("file://") && uri.ends_with("top_journals.png"));
        assert_eq!(resolved[1].status.warning(), None);
    }

    #[test]
    fn a_directory_is_not_an_image() {
        let dir = tempfile::tempdir().expect("tmp dir");
        std::fs::create_dir(dir.path().join("titles_wordcloud.png")).expect("mkdir");
        assert!(matches!(
            VISUALIZATIONS[2].locate(dir.path()),
            AssetStatus::Missing(_)
        ));
    }
}
