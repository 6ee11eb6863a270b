use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::{Graph, GraphMut};

// Statement grammar. NAME is either an unquoted identifier or a
// double-quoted string with no embedded quotes.
static EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"("[^"]+"|[A-Za-z0-9_]+)\s*->\s*("[^"]+"|[A-Za-z0-9_]+)\s*(?:\[(.*?)\])?\s*;"#)
        .expect("edge statement regex is valid")
});

static VERTEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*("[^"]+"|[A-Za-z0-9_]+)\s*;\s*$"#).expect("vertex statement regex is valid")
});

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"label\s*=\s*([0-9]+)").expect("label attribute regex is valid"));

static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"weight\s*=\s*([0-9]+)").expect("weight attribute regex is valid"));

impl Graph {
    /// Loads a graph from a DOT-like file on disk.
    ///
    /// An unreadable file is reported as [`Error::FileOpenFailure`]; the
    /// content itself is parsed by [`Graph::from_dot_str`].
    pub fn load_from_dot(path: impl AsRef<Path>) -> Result<Graph> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::FileOpenFailure {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_dot_str(&text)
    }

    /// Parses a graph from DOT-like digraph text.
    ///
    /// Accepted statements:
    /// - `NAME -> NAME ( [ ATTRS ] )? ;` — an edge. ATTRS may carry
    ///   `label=<uint>` or `weight=<uint>`; `label` wins when both appear,
    ///   and the weight defaults to 1 when neither is present.
    /// - `NAME ;` on a line of its own — an isolated vertex declaration.
    ///
    /// The token `digraph` must appear somewhere in the input. Weights must
    /// fit in 32 bits; anything larger is an [`Error::WeightOverflow`].
    ///
    /// Vertex indices are assigned in two passes: bare declarations in line
    /// order first, then edge endpoints in statement order.
    pub fn from_dot_str(text: &str) -> Result<Graph> {
        if !text.contains("digraph") {
            return Err(Error::Parse("input must be a digraph with '->' arcs".into()));
        }
        if text.matches('"').count() % 2 != 0 {
            return Err(Error::Parse("unterminated quoted name".into()));
        }

        let mut graph = Graph::new();

        // First pass: isolated vertex declarations.
        for line in text.lines() {
            if let Some(captures) = VERTEX_RE.captures(line) {
                graph.ensure_vertex(unquote(&captures[1]));
            }
        }

        // Second pass: edge statements.
        for captures in EDGE_RE.captures_iter(text) {
            let weight = match captures.get(3) {
                Some(attrs) => parse_weight(attrs.as_str())?,
                None => 1,
            };

            let u = graph.ensure_vertex(unquote(&captures[1]));
            let v = graph.ensure_vertex(unquote(&captures[2]));
            graph.add_edge(u, v, weight)?;
        }

        Ok(graph)
    }
}

/// Extracts the weight from an attribute list; `label` takes precedence
/// over `weight` whenever both are present.
fn parse_weight(attrs: &str) -> Result<u32> {
    let Some(captures) = LABEL_RE.captures(attrs).or_else(|| WEIGHT_RE.captures(attrs)) else {
        return Ok(1);
    };

    let literal = &captures[1];
    let value: u64 = literal
        .parse()
        .map_err(|_| Error::WeightOverflow(literal.to_owned()))?;

    u32::try_from(value).map_err(|_| Error::WeightOverflow(literal.to_owned()))
}

fn unquote(name: &str) -> &str {
    name.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(name)
}
