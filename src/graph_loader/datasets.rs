//! Registry of known edge-list datasets.
//!
//! Maps a dataset name to its file and parsing options so the CLI can be
//! pointed at a data directory and a name instead of raw loader flags. The
//! files themselves are the usual SNAP / network-repository downloads and
//! are not bundled.

use crate::graph_loader::source::csv_loader::EdgeListLoader;
use std::path::Path;

/// A named dataset: file name within the data directory plus the parsing
/// options its format needs.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub name: &'static str,
    pub file_name: &'static str,
    pub delimiter: &'static str,
    pub has_header: bool,
}

pub const DATASETS: &[Dataset] = &[
    Dataset {
        name: "example",
        file_name: "k-cores-example.csv",
        delimiter: ",",
        has_header: false,
    },
    Dataset {
        name: "twitch",
        file_name: "twitch.csv",
        delimiter: ",",
        has_header: true,
    },
    Dataset {
        name: "facebook",
        file_name: "facebook.txt",
        delimiter: " ",
        has_header: false,
    },
    Dataset {
        name: "wiki",
        file_name: "wikispeedia.tsv",
        delimiter: ",",
        has_header: false,
    },
    Dataset {
        name: "deezer",
        file_name: "HR_edges.csv",
        delimiter: ",",
        has_header: true,
    },
    Dataset {
        name: "fb-artist",
        file_name: "artist_edges.csv",
        delimiter: ",",
        has_header: true,
    },
    Dataset {
        name: "dblp",
        file_name: "com-dblp.ungraph.txt",
        delimiter: "\t",
        has_header: false,
    },
    Dataset {
        name: "twitter",
        file_name: "twitter_combined.txt",
        delimiter: " ",
        has_header: false,
    },
    Dataset {
        name: "youtube",
        file_name: "com-youtube.ungraph.txt",
        delimiter: "\t",
        has_header: false,
    },
    Dataset {
        name: "california",
        file_name: "roadNet-CA.txt",
        delimiter: "\t",
        has_header: false,
    },
    Dataset {
        name: "internet",
        file_name: "internet_topology.csv",
        delimiter: "\t",
        has_header: false,
    },
];

impl Dataset {
    /// Looks a dataset up by name.
    pub fn find(name: &str) -> Option<&'static Dataset> {
        DATASETS.iter().find(|d| d.name == name)
    }

    /// All registered dataset names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        DATASETS.iter().map(|d| d.name)
    }

    /// An [`EdgeListLoader`] configured for this dataset inside `data_dir`.
    pub fn loader(&self, data_dir: &Path) -> EdgeListLoader {
        EdgeListLoader::new(data_dir.join(self.file_name))
            .set_delimiter(self.delimiter)
            .set_header(self.has_header)
    }
}
