//! JSON report generation

use serde::Serialize;
use serde_json::json;
use std::io::Write;

use super::{ListingEntry, PathReport, ReportSink, SourceReport, TraversalReport};
use crate::errors::Result;

/// Writes every report as a single-line JSON document
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, kind: &str, body: impl Serialize) -> Result<()> {
        let doc = json!({ "kind": kind, "data": body });
        serde_json::to_writer(&mut self.out, &doc)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for JsonReporter<W> {
    fn shortest_paths(&mut self, reports: &[SourceReport]) -> Result<()> {
        self.emit("shortest_paths", reports)
    }

    fn path(&mut self, report: &PathReport) -> Result<()> {
        self.emit("path", report)
    }

    fn traversal(&mut self, report: &TraversalReport) -> Result<()> {
        self.emit("traversal", report)
    }

    fn listing(&mut self, entries: &[ListingEntry]) -> Result<()> {
        self.emit("listing", entries)
    }
}
