use crate::areas::repository::Repository;
use crate::artifacts::graph::builder::CommitGraphBuilder;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::topo::annotator::SequenceAnnotator;
use crate::artifacts::topo::sorter::TopologicalSorter;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Print the annotated topological order of every local branch
    ///
    /// The whole listing is computed before the first line is written, so a
    /// missing object or a cycle never leaves partial output behind.
    pub fn topo_order(&self) -> anyhow::Result<()> {
        let branch_map = self.refs().branch_map()?;
        let database = self.database();

        let graph = CommitGraphBuilder::new(|oid: &ObjectId| database.read_parents(oid))
            .build(branch_map.heads())
            .context("failed to build the commit graph")?;
        let order = TopologicalSorter::new(&graph)
            .sort()
            .context("failed to order the commit graph")?;
        let lines = SequenceAnnotator::new(&graph, &branch_map).render(&order);

        tracing::info!(
            commits = order.len(),
            lines = lines.len(),
            markers = lines.iter().filter(|line| line.is_marker()).count(),
            "writing topological order"
        );

        let mut writer = self.writer();
        for line in &lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
