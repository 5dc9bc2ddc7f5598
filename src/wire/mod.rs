//! Binary request codec
//!
//! A request is a little-endian stream of `u16` values:
//!
//! ```text
//! source | destination | edge_count | edge_count x (from | to | weight)
//! ```
//!
//! Decoding is all-or-nothing: a stream that ends early is rejected.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;
use std::io::{self, Cursor, Read, Write};

use crate::algorithm::dag_shortest_path::DagShortestPath;
use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::graph::{DiGraph, MutableGraph};
use crate::{Error, Result};

/// Size of the `source | destination | edge_count` header in bytes
pub const HEADER_SIZE: usize = 6;

/// Size of one encoded edge record in bytes
pub const EDGE_RECORD_SIZE: usize = 6;

/// One edge record as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireEdge {
    pub from: u16,
    pub to: u16,
    pub weight: u16,
}

impl WireEdge {
    pub fn new(from: u16, to: u16, weight: u16) -> Self {
        WireEdge { from, to, weight }
    }
}

/// A decoded shortest path request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathRequest {
    pub source: u16,
    pub destination: u16,
    pub edges: Vec<WireEdge>,
}

impl ShortestPathRequest {
    pub fn new(source: u16, destination: u16, edges: Vec<WireEdge>) -> Self {
        ShortestPathRequest {
            source,
            destination,
            edges,
        }
    }

    /// Reads one request from `reader`; bytes after the last edge record are left unread
    pub fn decode<R: Read>(mut reader: R) -> Result<Self> {
        let header = || "header".to_string();
        let source = read_field(&mut reader, header)?;
        let destination = read_field(&mut reader, header)?;
        let edge_count = read_field(&mut reader, header)?;

        let mut edges = Vec::with_capacity(edge_count as usize);
        for i in 0..edge_count {
            let context = || format!("edge record {} of {}", i, edge_count);
            let from = read_field(&mut reader, context)?;
            let to = read_field(&mut reader, context)?;
            let weight = read_field(&mut reader, context)?;
            edges.push(WireEdge::new(from, to, weight));
        }

        debug!(
            "decoded request {}->{} with {} edges",
            source, destination, edge_count
        );

        Ok(ShortestPathRequest {
            source,
            destination,
            edges,
        })
    }

    /// Decodes a request occupying exactly `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::MalformedInput(format!(
                "header expected to read {} bytes but got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(bytes);
        let request = Self::decode(&mut cursor)?;

        let consumed = cursor.position() as usize;
        if consumed != bytes.len() {
            return Err(Error::MalformedInput(format!(
                "{} trailing bytes after {} edge records",
                bytes.len() - consumed,
                request.edges.len()
            )));
        }

        Ok(request)
    }

    /// Writes the request in wire format
    ///
    /// Fails with `InvalidInput` if there are more edges than a `u16` count can hold.
    pub fn encode<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let edge_count = u16::try_from(self.edges.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} edges do not fit a u16 count", self.edges.len()),
            )
        })?;

        writer.write_u16::<LittleEndian>(self.source)?;
        writer.write_u16::<LittleEndian>(self.destination)?;
        writer.write_u16::<LittleEndian>(edge_count)?;
        for edge in &self.edges {
            writer.write_u16::<LittleEndian>(edge.from)?;
            writer.write_u16::<LittleEndian>(edge.to)?;
            writer.write_u16::<LittleEndian>(edge.weight)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(HEADER_SIZE + EDGE_RECORD_SIZE * self.edges.len());
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Smallest node count that fits every id in the request, endpoints included
    pub fn node_capacity(&self) -> usize {
        self.edges
            .iter()
            .flat_map(|e| [e.from, e.to])
            .chain([self.source, self.destination])
            .max()
            .map_or(0, |max_id| max_id as usize + 1)
    }

    /// Builds the graph described by the edge list, inserting edges in wire order
    pub fn build_graph(&self) -> DiGraph<u64> {
        let mut graph = DiGraph::new(self.node_capacity());
        for edge in &self.edges {
            graph.add_edge(edge.from as usize, edge.to as usize, u64::from(edge.weight));
        }
        graph
    }

    /// Builds the graph and answers the request's query
    pub fn solve(&self) -> Result<PathResult<u64>> {
        let graph = self.build_graph();
        DagShortestPath::new().shortest_path(&graph, self.source as usize, self.destination as usize)
    }
}

// `context` only runs when the read fails
fn read_field<R, F>(reader: &mut R, context: F) -> Result<u16>
where
    R: Read,
    F: Fn() -> String,
{
    reader.read_u16::<LittleEndian>().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::MalformedInput(format!("short read in {}", context())),
        _ => Error::MalformedInput(format!("{}: {}", context(), e)),
    })
}
