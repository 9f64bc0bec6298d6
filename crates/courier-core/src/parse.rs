//! Edge-list reader
//!
//! The input is a node count followed by the strictly lower-triangular
//! adjacency matrix. Row `i` (for `i` in `1..n`) holds `i` tokens; token `j`
//! is the weight of edge `{i, j}`, or `x` when there is no such edge.
//!
//! ```text
//! 5
//! 50
//! 30 5
//! 100 20 50
//! 10 x x 10
//! ```
//!
//! Blank lines are ignored. Weights are passed through unchecked; the graph
//! builder rejects negative ones.

use crate::bail_parse;
use crate::error::{CourierError, Result};
use crate::graph::builder::{EdgeDeclaration, EdgeList};

/// Parse an edge list, rejecting node counts above `max_nodes`
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_edge_list(input: &str, max_nodes: usize) -> Result<EdgeList> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        bail_parse!(1, "missing node count");
    };
    let count: i64 = header
        .parse()
        .map_err(|_| CourierError::parse(header_line, format!("invalid node count '{}'", header)))?;
    let num_nodes = usize::try_from(count)
        .ok()
        .filter(|n| *n <= max_nodes)
        .ok_or(CourierError::InvalidNodeCount {
            count,
            max: max_nodes,
        })?;

    let mut edges = EdgeList::new(num_nodes);
    let mut last_line = header_line;
    for node in 1..num_nodes {
        let Some((line_no, row)) = lines.next() else {
            bail_parse!(last_line + 1, "missing row for node {}", node);
        };
        last_line = line_no;

        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != node {
            bail_parse!(
                line_no,
                "expected {} entries for node {}, found {}",
                node,
                node,
                tokens.len()
            );
        }

        for (neighbor, token) in tokens.into_iter().enumerate() {
            if token.eq_ignore_ascii_case("x") {
                continue;
            }
            let weight: i64 = token
                .parse()
                .map_err(|_| CourierError::parse(line_no, format!("invalid weight '{}'", token)))?;
            edges
                .declarations
                .push(EdgeDeclaration::new(node, neighbor, weight));
        }
    }

    if let Some((line_no, _)) = lines.next() {
        bail_parse!(
            line_no,
            "unexpected content after {} rows",
            num_nodes.saturating_sub(1)
        );
    }

    tracing::debug!(
        num_nodes,
        declarations = edges.declarations.len(),
        "edge_list_parsed"
    );
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::DEFAULT_MAX_NODES;

    const FIVE_CITIES: &str = "5\n50\n30 5\n100 20 50\n10 x x 10\n";

    fn parse(input: &str) -> Result<EdgeList> {
        parse_edge_list(input, DEFAULT_MAX_NODES)
    }

    fn parse_error_line(input: &str) -> usize {
        match parse(input) {
            Err(CourierError::Parse { line, .. }) => line,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_five_cities() {
        let edges = parse(FIVE_CITIES).unwrap();
        let expected = EdgeList::new(5)
            .declare(1, 0, 50)
            .declare(2, 0, 30)
            .declare(2, 1, 5)
            .declare(3, 0, 100)
            .declare(3, 1, 20)
            .declare(3, 2, 50)
            .declare(4, 0, 10)
            .declare(4, 3, 10);
        assert_eq!(edges, expected);
    }

    #[test]
    fn test_uppercase_x_and_blank_lines() {
        let edges = parse("\n3\n\n7\nX 2\n\n").unwrap();
        assert_eq!(edges, EdgeList::new(3).declare(1, 0, 7).declare(2, 1, 2));
    }

    #[test]
    fn test_single_node_has_no_rows() {
        assert_eq!(parse("1\n").unwrap(), EdgeList::new(1));
    }

    #[test]
    fn test_zero_nodes() {
        assert_eq!(parse("0").unwrap(), EdgeList::new(0));
    }

    #[test]
    fn test_negative_weight_passes_through() {
        let edges = parse("2\n-3\n").unwrap();
        assert_eq!(edges, EdgeList::new(2).declare(1, 0, -3));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_error_line(""), 1);
        assert_eq!(parse_error_line("  \n\n"), 1);
    }

    #[test]
    fn test_invalid_node_count() {
        assert_eq!(parse_error_line("five\n"), 1);
    }

    #[test]
    fn test_negative_node_count() {
        let err = parse("-2\n").unwrap_err();
        assert!(matches!(err, CourierError::InvalidNodeCount { count: -2, .. }));
    }

    #[test]
    fn test_node_count_over_limit() {
        let err = parse_edge_list("4\n1\n1 1\n1 1 1\n", 3).unwrap_err();
        assert!(matches!(
            err,
            CourierError::InvalidNodeCount { count: 4, max: 3 }
        ));
    }

    #[test]
    fn test_short_row() {
        assert_eq!(parse_error_line("3\n1\n2\n"), 3);
    }

    #[test]
    fn test_long_row() {
        assert_eq!(parse_error_line("3\n1 4\n2 3\n"), 2);
    }

    #[test]
    fn test_missing_row() {
        assert_eq!(parse_error_line("3\n1\n"), 3);
    }

    #[test]
    fn test_invalid_weight_token() {
        let err = parse("3\n1\n2 y\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: invalid weight 'y'");
    }

    #[test]
    fn test_trailing_content() {
        assert_eq!(parse_error_line("2\n1\n1 2\n"), 3);
    }
}
