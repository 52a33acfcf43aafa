//! Plain-text report generation

use std::io::Write;

use super::{ListingEntry, PathReport, ReportSink, SourceReport, TraversalReport};
use crate::config::ReportConfig;
use crate::errors::Result;
use crate::shared::models::VertexId;

/// Width of the leading description column
const DESCRIPTION_WIDTH: usize = 25;

/// Column-aligned text output
pub struct TextReporter<W> {
    out: W,
    config: ReportConfig,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, config: ReportConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn join(path: &[VertexId]) -> String {
        path.iter()
            .map(VertexId::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn row(&mut self, report: &PathReport, indent: usize) -> Result<()> {
        let w = self.config.column_width;
        let distance = report.distance.render(&self.config.no_path_marker);
        write!(
            self.out,
            "{:indent$}{:>w$}{:>w$}{:>w$}",
            "",
            report.source,
            report.destination,
            distance,
            indent = indent,
            w = w
        )?;
        if report.distance.is_reachable() {
            write!(self.out, "   {}", Self::join(&report.path))?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for TextReporter<W> {
    fn shortest_paths(&mut self, reports: &[SourceReport]) -> Result<()> {
        let w = self.config.column_width;
        writeln!(
            self.out,
            "{:<dw$}{:>w$}{:>w$}{:>w$}   {}",
            "Description",
            "From node",
            "To node",
            "Distance",
            "Path",
            dw = DESCRIPTION_WIDTH,
            w = w
        )?;
        for source in reports {
            writeln!(self.out, "{}", source.label)?;
            for row in &source.rows {
                self.row(row, DESCRIPTION_WIDTH)?;
                if self.config.show_labels {
                    for label in &row.labels {
                        writeln!(self.out, "{:indent$}{}", "", label, indent = DESCRIPTION_WIDTH)?;
                    }
                }
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn path(&mut self, report: &PathReport) -> Result<()> {
        self.row(report, 0)?;
        if self.config.show_labels {
            for label in &report.labels {
                writeln!(self.out, "{}", label)?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn traversal(&mut self, report: &TraversalReport) -> Result<()> {
        write!(self.out, "Depth-first ordering:")?;
        for vertex in &report.order {
            write!(self.out, " {:>3}", vertex)?;
        }
        writeln!(self.out)?;
        if self.config.show_labels {
            for label in &report.labels {
                writeln!(self.out, "  {}", label)?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn listing(&mut self, entries: &[ListingEntry]) -> Result<()> {
        writeln!(self.out, "Graph:")?;
        for entry in entries {
            writeln!(self.out, "Node {:<8}{}", entry.vertex, entry.label)?;
            for to in &entry.edges {
                writeln!(self.out, "  edge {:>3} {:>3}", entry.vertex, to)?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }
}
