//! Loader for delimited edge-list files.
//!
//! Accepts plain text, CSV and TSV edge lists (one edge per record, first
//! two fields are the endpoints), transparently decompressing `.gz` and
//! `.bz2` files. Comment lines (SNAP-style `#` headers) and an optional
//! header row are skipped, so the rest of the system only ever sees
//! already-tokenized endpoint pairs.
//!
//! # Example
//! ```no_run
//! use denser::graph_loader::source::csv_loader::EdgeListLoader;
//!
//! let graph = EdgeListLoader::new("data/com-dblp.ungraph.txt")
//!     .set_delimiter("\t")
//!     .load_graph()
//!     .expect("edge list did not parse");
//! println!("loaded {} vertices", graph.num_vertices());
//! ```

use crate::core::{graph::Graph, utils::errors::GraphError};
use bzip2::read::BzDecoder;
use csv::StringRecord;
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io,
    io::BufReader,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum CsvErr {
    /// An IO error that occurred during file read.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A CSV parsing error that occurred while parsing the CSV data.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    /// A record that does not contain two endpoint fields. The whole load
    /// fails; malformed lines are never silently dropped.
    #[error("line {line}: expected two endpoint fields, got {record:?}")]
    Malformed { line: u64, record: String },
    /// The edge stream parsed but the graph build rejected it.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A struct that defines the edge-list loader with configurable options.
#[derive(Debug)]
pub struct EdgeListLoader {
    /// Path of the edge-list file.
    path: PathBuf,
    /// The delimiter character used between the two endpoint fields.
    delimiter: u8,
    /// Specifies whether the file starts with a header row.
    header: bool,
    /// Leading character of comment lines to skip, if any.
    comment: Option<u8>,
}

impl EdgeListLoader {
    /// Creates a new `EdgeListLoader` for the given file path. Defaults to
    /// comma-delimited, no header row, `#` comments skipped.
    pub fn new<P: Into<PathBuf>>(p: P) -> Self {
        Self {
            path: p.into(),
            delimiter: b',',
            header: false,
            comment: Some(b'#'),
        }
    }

    /// Sets the delimiter character used in the file.
    pub fn set_delimiter(mut self, d: &str) -> Self {
        self.delimiter = d.as_bytes()[0];
        self
    }

    /// Sets whether the file starts with a header row to skip.
    pub fn set_header(mut self, h: bool) -> Self {
        self.header = h;
        self
    }

    /// Sets the leading character of comment lines, or disables comment
    /// skipping with `None`.
    pub fn set_comment(mut self, c: Option<char>) -> Self {
        self.comment = c.map(|c| c as u8);
        self
    }

    /// Loads the file into a sequence of endpoint token pairs, in file
    /// order.
    pub fn load_edges(&self) -> Result<Vec<(String, String)>, CsvErr> {
        let mut reader = self.csv_reader()?;
        let mut edges = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match (record.get(0), record.get(1)) {
                (Some(src), Some(dst)) if !src.trim().is_empty() && !dst.trim().is_empty() => {
                    edges.push((src.trim().to_owned(), dst.trim().to_owned()));
                }
                _ => {
                    return Err(CsvErr::Malformed {
                        line,
                        record: record.iter().collect::<Vec<_>>().join(" "),
                    })
                }
            }
        }
        tracing::info!(
            path = %self.path.display(),
            edges = edges.len(),
            "loaded edge list"
        );
        Ok(edges)
    }

    /// Loads the file and builds a [`Graph`] from it in one step.
    pub fn load_graph(&self) -> Result<Graph, CsvErr> {
        let edges = self.load_edges()?;
        let graph = Graph::from_edge_list(edges, None)?;
        Ok(graph)
    }

    /// Returns a `csv::Reader` for the configured file path, automatically
    /// detecting and handling gzip and bzip compression.
    fn csv_reader(&self) -> Result<csv::Reader<Box<dyn io::Read>>, CsvErr> {
        fn has_extension(path: &Path, ext: &str) -> bool {
            path.file_name()
                .and_then(|name| name.to_str())
                .filter(|name| name.ends_with(ext))
                .is_some()
        }

        let f = File::open(&self.path)?;
        let raw: Box<dyn io::Read> = if has_extension(&self.path, ".gz") {
            Box::new(BufReader::new(GzDecoder::new(f)))
        } else if has_extension(&self.path, ".bz2") {
            Box::new(BufReader::new(BzDecoder::new(f)))
        } else {
            Box::new(BufReader::new(f))
        };
        Ok(csv::ReaderBuilder::new()
            .has_headers(self.header)
            .delimiter(self.delimiter)
            .comment(self.comment)
            .flexible(true)
            .from_reader(raw))
    }
}
