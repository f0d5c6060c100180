use anyhow::Result;

use crate::anchor::Anchor;

/// Downstream consumer of anchor records.
///
/// The lookup tuple is the transaction boundary: implementations must not
/// make anchors durable before `end_tuple`, so a tuple dropped mid-flight
/// leaves no partial output behind.
pub trait AnchorSink {
    fn push(&mut self, anchor: Anchor) -> Result<()>;
    fn end_tuple(&mut self) -> Result<()>;
}

/// Collects anchors in memory, committing them tuple by tuple.
#[derive(Debug, Default)]
pub struct VecSink {
    committed: Vec<Anchor>,
    pending: Vec<Anchor>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors from completed tuples.
    pub fn anchors(&self) -> &[Anchor] {
        &self.committed
    }

    pub fn into_anchors(self) -> Vec<Anchor> {
        self.committed
    }
}

impl AnchorSink for VecSink {
    fn push(&mut self, anchor: Anchor) -> Result<()> {
        self.pending.push(anchor);
        Ok(())
    }

    fn end_tuple(&mut self) -> Result<()> {
        self.committed.append(&mut self.pending);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use geo::Coord;

    use super::*;
    use crate::types::StreetId;

    #[test]
    fn anchors_surface_only_after_end_tuple() {
        let mut sink = VecSink::new();
        sink.push(Anchor::vertex(StreetId::new("S1"), 2.5, Coord { x: 0.0, y: 0.0 })).unwrap();
        assert!(sink.anchors().is_empty());

        sink.end_tuple().unwrap();
        assert_eq!(sink.anchors().len(), 1);
    }
}
