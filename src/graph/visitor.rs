use std::io::Write;

use crate::errors::Result;
use crate::types::NodeId;

/// Receives nodes in the order a traversal visits them.
pub trait Visitor {
    fn visit(&mut self, node: NodeId) -> Result<()>;
}

/// Records visited nodes in order.
impl Visitor for Vec<NodeId> {
    fn visit(&mut self, node: NodeId) -> Result<()> {
        self.push(node);
        Ok(())
    }
}

/// Writes each visited node id on its own line.
pub struct LineEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, emitted: 0 }
    }

    /// Number of lines written so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Visitor for LineEmitter<W> {
    fn visit(&mut self, node: NodeId) -> Result<()> {
        writeln!(self.writer, "{node}")?;
        self.emitted += 1;
        Ok(())
    }
}
