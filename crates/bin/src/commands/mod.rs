//! Subcommand implementations.

use std::{
    io::{self, Read},
    path::Path,
};

pub mod acl;
pub mod anchors;

/// Read the whole input document from a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading input file");
            std::fs::read_to_string(path)
        }
        None => {
            tracing::debug!("Reading input from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
