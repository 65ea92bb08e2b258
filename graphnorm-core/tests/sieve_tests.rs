// Tests for line classification and record parsing

use graphnorm_core::error::{GraphError, ParseFailure};
use graphnorm_core::model::{EdgeRecord, NodeRecord, Record};
use graphnorm_core::sieve::{parse_line, sieve};

// ============================================================================
// Single Line Parsing Tests
// ============================================================================

#[test]
fn test_parse_node_line() {
    let record = parse_line(1, "node A 1.5 -2").unwrap();
    assert_eq!(record, Some(Record::Node(NodeRecord::new("A", 1.5, -2.0))));
}

#[test]
fn test_parse_node_line_exponent_notation() {
    let record = parse_line(1, "node far 1e3 -2.5E-1").unwrap();
    assert_eq!(record, Some(Record::Node(NodeRecord::new("far", 1000.0, -0.25))));
}

#[test]
fn test_parse_node_line_trailing_whitespace() {
    let record = parse_line(1, "node   B\t3  4   \r\n").unwrap();
    assert_eq!(record, Some(Record::Node(NodeRecord::new("B", 3.0, 4.0))));
}

#[test]
fn test_parse_node_line_extra_tokens_ignored() {
    let record = parse_line(1, "node C 1 2 extra stuff").unwrap();
    assert_eq!(record, Some(Record::Node(NodeRecord::new("C", 1.0, 2.0))));
}

#[test]
fn test_parse_edge_line() {
    let record = parse_line(1, "edge A B").unwrap();
    let expected = EdgeRecord {
        name: "A-B".to_string(),
        origin: "A".to_string(),
        destination: "B".to_string(),
    };
    assert_eq!(record, Some(Record::Edge(expected)));
}

#[test]
fn test_parse_line_skips_other_lines() {
    for line in [
        "",
        "   ",
        "# this is ignored",
        "vertex A 1 2",
        "nodes A 1 2",
        "edges A B",
        "Node A 1 2",
    ] {
        assert_eq!(parse_line(1, line).unwrap(), None, "line {:?}", line);
    }
}

// ============================================================================
// Parse Error Tests
// ============================================================================

#[test]
fn test_node_line_missing_y() {
    let err = parse_line(7, "node A 1").unwrap_err();
    match err {
        GraphError::ParseError { line, reason } => {
            assert_eq!(line, 7);
            assert_eq!(
                reason,
                ParseFailure::MissingField {
                    record: "node",
                    field: "y"
                }
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_node_line_with_only_keyword() {
    let err = parse_line(1, "node").unwrap_err();
    assert!(matches!(
        err,
        GraphError::ParseError {
            reason: ParseFailure::MissingField { field: "name", .. },
            ..
        }
    ));
}

#[test]
fn test_node_line_invalid_number() {
    let err = parse_line(2, "node A one 2").unwrap_err();
    match err {
        GraphError::ParseError { line, reason } => {
            assert_eq!(line, 2);
            assert_eq!(
                reason,
                ParseFailure::InvalidNumber {
                    field: "x",
                    value: "one".to_string()
                }
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_edge_line_missing_destination() {
    let err = parse_line(3, "edge A").unwrap_err();
    assert!(matches!(
        err,
        GraphError::ParseError {
            line: 3,
            reason: ParseFailure::MissingField {
                record: "edge",
                field: "destination"
            }
        }
    ));
}

#[test]
fn test_parse_error_message() {
    let err = parse_line(4, "node A 1 y").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error on line 4: y coordinate 'y' is not a valid number"
    );
}

// ============================================================================
// Sieve Tests
// ============================================================================

#[test]
fn test_sieve_preserves_order() {
    let lines = [
        "node C 0 0",
        "edge C A",
        "node A 1 1",
        "edge A B",
        "node B 2 2",
    ];
    let sieved = sieve(lines).unwrap();

    let names: Vec<&str> = sieved.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);

    let edges: Vec<&str> = sieved.edges.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(edges, vec!["C-A", "A-B"]);
}

#[test]
fn test_sieve_ignores_comments() {
    let lines = ["# header", "node A 0 0", "# between", "", "node B 1 1", "edge A B"];
    let sieved = sieve(lines).unwrap();

    assert_eq!(sieved.nodes.len(), 2);
    assert_eq!(sieved.edges.len(), 1);
}

#[test]
fn test_sieve_does_not_validate_edges() {
    let sieved = sieve(["node A 0 0", "edge A Nowhere"]).unwrap();
    assert_eq!(sieved.edges[0], EdgeRecord::new("A", "Nowhere"));
}

#[test]
fn test_sieve_reports_line_number_of_first_failure() {
    let lines = ["# comment", "node A 0 0", "node B 1", "node C x y"];
    let err = sieve(lines).unwrap_err();
    assert!(matches!(err, GraphError::ParseError { line: 3, .. }));
}

#[test]
fn test_sieve_empty_input() {
    let sieved = sieve(std::iter::empty()).unwrap();
    assert!(sieved.nodes.is_empty());
    assert!(sieved.edges.is_empty());
}
