/*!
# IO

Reading and writing graph specifications.

A graph is exchanged as a JSON document listing node IDs, edge records and the orientation:
```json
{
  "nodes": ["A", "B", "C"],
  "edges": [["A", "B", "3"], ["B", "C"], {"from": "C", "to": "A", "weight": 2}],
  "directed": true
}
```
Every field is optional. Edge records are either token lists `[from, to, weight?]`, whose
tokens may be strings or numbers, or objects `{from, to, weight?}`. Records that cannot be
resolved are dropped when the [`Graph`] is built, see [`Graph::build`].
*/

pub mod spec;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{error::Result, prelude::*};

pub use spec::*;

/// Trait for types that can be read from a JSON graph specification.
pub trait GraphSpecRead: Sized {
    /// Reads the value from the given reader.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid specification.
    fn try_read_spec<R>(reader: R) -> Result<Self>
    where
        R: Read;

    /// Reads the value from a file.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its contents are not a valid
    /// specification.
    fn try_read_spec_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_spec(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can be written as a JSON graph specification.
pub trait GraphSpecWrite {
    /// Writes `self` to the provided writer; `pretty` enables indentation.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_spec<W>(&self, writer: W, pretty: bool) -> Result<()>
    where
        W: Write;

    /// Writes `self` to a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_spec_file<P>(&self, path: P, pretty: bool) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_spec(BufWriter::new(File::create(path)?), pretty)
    }
}

impl GraphSpecRead for GraphSpec {
    fn try_read_spec<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl GraphSpecRead for Graph {
    fn try_read_spec<R>(reader: R) -> Result<Self>
    where
        R: Read,
    {
        Ok(GraphSpec::try_read_spec(reader)?.into_graph())
    }
}

impl GraphSpecWrite for GraphSpec {
    fn try_write_spec<W>(&self, mut writer: W, pretty: bool) -> Result<()>
    where
        W: Write,
    {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl GraphSpecWrite for Graph {
    fn try_write_spec<W>(&self, writer: W, pretty: bool) -> Result<()>
    where
        W: Write,
    {
        GraphSpec::from_graph(self).try_write_spec(writer, pretty)
    }
}
