//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality: labeled (and possibly pinned)
//! nodes, plain edges and colored edges carrying their step in a walk.
//!
//! Drawing a graph with its Eulerian walk highlighted can be achieved via
//! ```
//! use fleury::{prelude::*, algo::*, io::*};
//!
//! let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
//! let walk = graph.find_eulerian_walk().unwrap();
//!
//! let mut buffer = Vec::new();
//! DotWriter::default().try_write_walk(&graph, &walk, &mut buffer).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(buffer).unwrap(),
//!     "graph {\nA;B;C;\nA--B[color=red, label=1];B--C[color=red, label=2];\n}\n"
//! );
//! ```
//!
//! `neato -n` respects the `pos` attribute of pinned nodes; `dot` ignores it.
use std::fmt::Display;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Use the vertex labels as node names
    use_labels: bool,
    /// Prefix of a node if labels are not used (default: 'u')
    prefix: String,
    /// Color of walk edges
    walk_color: DotColor,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            use_labels: true,
            prefix: "u".to_string(),
            walk_color: DotColor::Red,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, nodes are written as their index prepended by the node prefix
    pub fn use_labels(mut self, use_labels: bool) -> Self {
        self.use_labels = use_labels;
        self
    }

    /// Set the prefix of a node (`u` by default). Only relevant if labels are not used.
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Set the color of the edges of a walk (`red` by default)
    pub fn walk_color(mut self, color: DotColor) -> Self {
        self.walk_color = color;
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")
    }

    /// Formats a node depending on `self.use_labels, self.prefix`
    fn format_node(&self, graph: &AdjMatrix, u: Node) -> String {
        if self.use_labels {
            graph.label_of(u).to_string()
        } else {
            format!("{}{u}", self.prefix)
        }
    }

    /// Writes all nodes of `graph`; nodes with a position are pinned to it
    pub fn write_vertices<W>(&self, writer: &mut W, graph: &AdjMatrix) -> Result<()>
    where
        W: Write,
    {
        for (u, vertex) in graph.vertex_data().iter().enumerate() {
            let name = self.format_node(graph, u as Node);
            match vertex.position() {
                Some(Position { x, y }) => write!(writer, "{name}[pos=\"{x},{y}!\"];")?,
                None => write!(writer, "{name};")?,
            }
        }
        writeln!(writer)
    }

    /// Writes an iterator of edges to `writer`. Edges are normalized before writing.
    pub fn write_edges<W, I>(&self, writer: &mut W, graph: &AdjMatrix, edges: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.normalized()) {
            write!(
                writer,
                "{}--{};",
                self.format_node(graph, u),
                self.format_node(graph, v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes the edges of `walk` in the order they are traversed, colored and labeled by
    /// their (1-based) step.
    pub fn write_walk_edges<W>(
        &self,
        writer: &mut W,
        graph: &AdjMatrix,
        walk: &EulerianWalk,
    ) -> Result<()>
    where
        W: Write,
    {
        for (step, Edge(u, v)) in walk.edges().enumerate() {
            write!(
                writer,
                "{}--{}[color={}, label={}];",
                self.format_node(graph, u),
                self.format_node(graph, v),
                self.walk_color,
                step + 1
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl GraphWriter<AdjMatrix> for DotWriter {
    fn try_write_graph<W>(&self, graph: &AdjMatrix, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_vertices(&mut writer, graph)?;
        self.write_edges(&mut writer, graph, graph.edges(true))?;
        self.finish_graph(&mut writer)
    }

    fn try_write_walk<W>(&self, graph: &AdjMatrix, walk: &EulerianWalk, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        // an Eulerian walk covers every edge, so the walk edges replace the plain ones
        self.start_graph(&mut writer)?;
        self.write_vertices(&mut writer, graph)?;
        self.write_walk_edges(&mut writer, graph, walk)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph with a highlighted walk to a writer
    fn try_write_walk_dot<W>(&self, walk: &EulerianWalk, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }

    /// Tries to write the graph with a highlighted walk to a file
    fn try_write_walk_dot_file<P>(&self, walk: &EulerianWalk, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_walk_dot(walk, writer)
    }
}

impl DotWrite for AdjMatrix {
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }

    fn try_write_walk_dot<W>(&self, walk: &EulerianWalk, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_walk(self, walk, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the SVG color names understood by GraphViz, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    DarkGreen,
    DarkOrange,
    Gray,
    Green,
    Magenta,
    Orange,
    Purple,
    Red,
    RoyalBlue,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::FleuryWalk;

    fn write_to_string<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn write_graph_with_labels() {
        let graph = AdjMatrix::from_edges(3, [(1, 0), (2, 1), (2, 2)]).unwrap();
        let dot = write_to_string(|w| graph.try_write_dot(w));

        assert_eq!(dot, "graph {\nA;B;C;\nA--B;B--C;C--C;\n}\n");
    }

    #[test]
    fn write_graph_with_prefix() {
        let graph = AdjMatrix::from_edges(3, [(0, 2)]).unwrap();
        let writer = DotWriter::new().use_labels(false).node_prefix("v");
        let dot = write_to_string(|w| writer.try_write_graph(&graph, w));

        assert_eq!(dot, "graph {\nv0;v1;v2;\nv0--v2;\n}\n");
    }

    #[test]
    fn write_pinned_vertices() {
        let mut graph = AdjMatrix::from_edges(2, [(0, 1)]).unwrap();
        graph.set_position(1, Position::new(30, 40)).unwrap();
        let dot = write_to_string(|w| graph.try_write_dot(w));

        assert_eq!(dot, "graph {\nA;B[pos=\"30,40!\"];\nA--B;\n}\n");
    }

    #[test]
    fn write_walk_steps() {
        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let walk = graph.find_eulerian_walk().unwrap();
        let writer = DotWriter::new().walk_color(DotColor::RoyalBlue);
        let dot = write_to_string(|w| writer.try_write_walk(&graph, &walk, w));

        assert_eq!(
            dot,
            "graph {\nA;B;C;\n\
             A--B[color=royalblue, label=1];\
             B--C[color=royalblue, label=2];\
             C--A[color=royalblue, label=3];\n}\n"
        );
    }

    #[test]
    fn color_names() {
        let names = [
            DotColor::Black,
            DotColor::Blue,
            DotColor::DarkGreen,
            DotColor::DarkOrange,
            DotColor::Gray,
            DotColor::Green,
            DotColor::Magenta,
            DotColor::Orange,
            DotColor::Purple,
            DotColor::Red,
            DotColor::RoyalBlue,
        ]
        .map(|c| c.to_string());

        assert_eq!(
            names,
            [
                "black",
                "blue",
                "darkgreen",
                "darkorange",
                "gray",
                "green",
                "magenta",
                "orange",
                "purple",
                "red",
                "royalblue"
            ]
        );
    }

    #[test]
    fn write_to_files() {
        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let walk = graph.find_eulerian_walk().unwrap();
        let dir = std::env::temp_dir();
        let graph_path = dir.join(format!("fleury-graph-{}.dot", std::process::id()));
        let walk_path = dir.join(format!("fleury-walk-{}.dot", std::process::id()));

        let writer = DotWriter::new().walk_color(DotColor::DarkGreen);
        writer.try_write_graph_file(&graph, &graph_path).unwrap();
        writer.try_write_walk_file(&graph, &walk, &walk_path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&graph_path).unwrap(),
            "graph {\nA;B;C;\nA--B;B--C;\n}\n"
        );
        assert_eq!(
            std::fs::read_to_string(&walk_path).unwrap(),
            "graph {\nA;B;C;\n\
             A--B[color=darkgreen, label=1];B--C[color=darkgreen, label=2];\n}\n"
        );

        // the shorthand uses the default walk color
        graph.try_write_walk_dot_file(&walk, &graph_path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&graph_path).unwrap(),
            "graph {\nA;B;C;\nA--B[color=red, label=1];B--C[color=red, label=2];\n}\n"
        );

        std::fs::remove_file(graph_path).unwrap();
        std::fs::remove_file(walk_path).unwrap();
    }

    #[test]
    fn write_empty_graph() {
        let graph = AdjMatrix::new(0);
        let dot = write_to_string(|w| graph.try_write_dot(w));
        assert_eq!(dot, "graph {\n\n\n}\n");
    }
}
