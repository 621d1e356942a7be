use crate::dom::{DomPoint, NodeId, Selection};
use crate::rendering::flatten::TextRun;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Selection endpoint outside editable region: {0:?}")]
    OutsideEditableRegion(NodeId),
}

/// A selection expressed as character offsets into the flattened text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteSelection {
    pub anchor: usize,
    pub focus: usize,
}

impl AbsoluteSelection {
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self { anchor, focus }
    }

    /// Capture both endpoints of `selection`. Fails if either endpoint is not
    /// the origin of a run.
    pub fn capture(runs: &[TextRun<'_>], selection: Selection) -> Result<Self, SelectionError> {
        Ok(Self {
            anchor: node_offset_to_absolute(runs, selection.anchor)?,
            focus: node_offset_to_absolute(runs, selection.focus)?,
        })
    }

    pub fn restore(self, runs: &[TextRun<'_>]) -> Selection {
        Selection::new(
            absolute_to_node_offset(runs, self.anchor),
            absolute_to_node_offset(runs, self.focus),
        )
    }
}

/// Absolute index of `point`: the length of every run before the run
/// originating at `point.node`, plus `point.offset`.
pub fn node_offset_to_absolute(
    runs: &[TextRun<'_>],
    point: DomPoint,
) -> Result<usize, SelectionError> {
    let mut start = 0;
    for run in runs {
        if run.origin == point.node {
            return Ok(start + point.offset);
        }
        start += run.len;
    }
    Err(SelectionError::OutsideEditableRegion(point.node))
}

/// Node and offset for an absolute index.
///
/// Runs cover `(start, start + len]`, so an index sitting exactly on a join
/// resolves to the end of the earlier run. Index 0 resolves to the start of
/// the first run. With no containing run the point is the start of the root.
pub fn absolute_to_node_offset(runs: &[TextRun<'_>], index: usize) -> DomPoint {
    if index == 0 {
        return runs
            .first()
            .map_or_else(DomPoint::root_start, |run| DomPoint::new(run.origin, 0));
    }

    let mut start = 0;
    for run in runs {
        let end = start + run.len;
        if start < index && index <= end {
            return DomPoint::new(run.origin, index - start);
        }
        start = end;
    }
    DomPoint::root_start()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::rendering::flatten::flatten;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// "ab" + <br> + "cd" inside a <b>
    fn sample() -> Document {
        Document::from_markup("ab<br><b>cd</b>")
    }

    fn nodes(doc: &Document) -> (NodeId, NodeId, NodeId) {
        let root = doc.children(doc.root());
        let bold = root[2];
        (root[0], root[1], doc.children(bold)[0])
    }

    #[test]
    fn test_capture_sums_preceding_runs() {
        let doc = sample();
        let runs = flatten(&doc);
        let (ab, br, cd) = nodes(&doc);

        assert_eq!(node_offset_to_absolute(&runs, DomPoint::new(ab, 1)), Ok(1));
        assert_eq!(node_offset_to_absolute(&runs, DomPoint::new(br, 0)), Ok(2));
        assert_eq!(node_offset_to_absolute(&runs, DomPoint::new(cd, 2)), Ok(5));
    }

    #[test]
    fn test_capture_outside_runs_fails() {
        let doc = sample();
        let runs = flatten(&doc);
        assert_eq!(
            node_offset_to_absolute(&runs, DomPoint::new(doc.root(), 0)),
            Err(SelectionError::OutsideEditableRegion(doc.root()))
        );
    }

    #[rstest]
    #[case(1, 0, 1)]
    #[case(2, 0, 2)]
    #[case(3, 1, 1)]
    #[case(4, 2, 1)]
    #[case(5, 2, 2)]
    fn test_restore_prefers_earlier_run_at_joins(
        #[case] index: usize,
        #[case] run: usize,
        #[case] offset: usize,
    ) {
        let doc = sample();
        let runs = flatten(&doc);
        let (ab, br, cd) = nodes(&doc);
        let origin = [ab, br, cd][run];

        assert_eq!(
            absolute_to_node_offset(&runs, index),
            DomPoint::new(origin, offset)
        );
    }

    #[test]
    fn test_restore_zero_maps_to_first_run() {
        let doc = sample();
        let runs = flatten(&doc);
        let (ab, _, _) = nodes(&doc);
        assert_eq!(absolute_to_node_offset(&runs, 0), DomPoint::new(ab, 0));
    }

    #[test]
    fn test_restore_on_empty_document_is_root_start() {
        let doc = Document::new();
        let runs = flatten(&doc);
        for index in [0, 1, 42] {
            assert_eq!(absolute_to_node_offset(&runs, index), DomPoint::root_start());
        }
    }

    #[test]
    fn test_restore_past_end_is_root_start() {
        let doc = sample();
        let runs = flatten(&doc);
        assert_eq!(absolute_to_node_offset(&runs, 6), DomPoint::root_start());
    }

    #[test]
    fn test_round_trip_inside_runs_is_exact() {
        let doc = sample();
        let runs = flatten(&doc);
        let (ab, _, cd) = nodes(&doc);
        let selection = Selection::new(DomPoint::new(ab, 1), DomPoint::new(cd, 2));

        let captured = AbsoluteSelection::capture(&runs, selection).unwrap();
        assert_eq!(captured, AbsoluteSelection::new(1, 5));
        assert_eq!(captured.restore(&runs), selection);
    }

    #[test]
    fn test_round_trip_at_run_start_moves_to_previous_end() {
        let doc = sample();
        let runs = flatten(&doc);
        let (_, br, cd) = nodes(&doc);
        let selection = Selection::caret(DomPoint::new(cd, 0));

        let restored = AbsoluteSelection::capture(&runs, selection)
            .unwrap()
            .restore(&runs);
        assert_eq!(restored, Selection::caret(DomPoint::new(br, 1)));
    }

    #[test]
    fn test_capture_fails_if_either_endpoint_misses() {
        let doc = sample();
        let runs = flatten(&doc);
        let (ab, _, _) = nodes(&doc);
        let selection = Selection::new(DomPoint::new(ab, 0), DomPoint::new(doc.root(), 1));

        assert!(AbsoluteSelection::capture(&runs, selection).is_err());
    }
}
