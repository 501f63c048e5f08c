use interval_tree::{Element, InclusiveOverlapper, IntervalTree, Range};

/// A named span of the keyspace.
#[derive(Debug)]
struct KeySpan {
    range: Range,
    id: i64,
}

impl KeySpan {
    fn new(start: &str, end: &str, id: i64) -> Self {
        Self {
            range: Range::new(start.as_bytes(), end.as_bytes()),
            id,
        }
    }
}

impl Element for KeySpan {
    fn range(&self) -> &Range {
        &self.range
    }

    fn id(&self) -> i64 {
        self.id
    }
}

fn show(span: &KeySpan) -> String {
    format!(
        "[{}, {}) id={}",
        String::from_utf8_lossy(span.range.start.as_bytes()),
        String::from_utf8_lossy(span.range.end.as_bytes()),
        span.id
    )
}

fn main() {
    let mut tree = IntervalTree::new();
    tree.insert(KeySpan::new("apple", "cherry", 1), false).unwrap();
    tree.insert(KeySpan::new("banana", "fig", 2), false).unwrap();
    tree.insert(KeySpan::new("melon", "pear", 3), false).unwrap();

    let query = Range::new(*b"cherry", *b"grape");
    println!("spans overlapping [cherry, grape):");
    for hit in tree.find_all_overlap(&query) {
        println!("  {}", show(hit));
    }

    // A point query is the degenerate range [k, k + "\0").
    let point = Range::new(*b"coconut", *b"coconut\0");
    assert!(tree.overlaps(&point));

    // Under the closed interpretation, spans that merely touch also match.
    let touching = Range::new(*b"fig", *b"lime");
    assert!(tree.find_all_overlap(&touching).is_empty());
    let hits = tree.find_all_overlap_with(&touching, &InclusiveOverlapper);
    println!("spans touching [fig, lime]:");
    for hit in hits {
        println!("  {}", show(hit));
    }
}
