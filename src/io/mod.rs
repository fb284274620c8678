/*!
# IO

Utilities for writing graphs and Eulerian walks for visualization.

The only supported format is the [DOT language](https://graphviz.org/doc/info/lang.html) of
[GraphViz](https://graphviz.org/). Nodes are written by their label, positioned nodes are pinned
to their canvas coordinates and a walk is drawn as a sequence of colored, numbered edges.

## Traits

- [`GraphWriter`] is implemented by writers for a specific format and holds their settings.
- [`DotWrite`] is a shorthand to write a graph (or a graph with a walk) with default settings.
*/

pub mod dot;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::{algo::EulerianWalk, prelude::*};

pub use dot::*;

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph and a walk through it to the provided writer.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_walk<W>(&self, graph: &G, walk: &EulerianWalk, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }

    /// Writes the given graph and walk to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_walk_file<P>(&self, graph: &G, walk: &EulerianWalk, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_walk(graph, walk, BufWriter::new(File::create(path)?))
    }
}
