use interval_tree::{Element, IntervalTree, Range};

#[derive(Debug)]
struct Span {
    range: Range,
    id: i64,
}

impl Element for Span {
    fn range(&self) -> &Range {
        &self.range
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// xorshift, good enough for demo data.
struct Rng(u32);

impl Rng {
    fn next_u16(&mut self, limit: u16) -> u16 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        (self.0 % u32::from(limit)) as u16
    }
}

fn main() {
    const COUNT: i64 = 100_000;
    let mut rng = Rng(0x12345678);
    let mut tree = IntervalTree::new();

    // Bulk load with extent maintenance off; the cached subtree extents
    // are stale until adjust_ranges runs.
    for id in 0..COUNT {
        let start = rng.next_u16(60000);
        let width = 1 + rng.next_u16(500);
        let span = Span {
            range: Range::new(start.to_be_bytes(), (start + width).to_be_bytes()),
            id,
        };
        tree.insert(span, true).unwrap();
    }
    println!("loaded {} spans", tree.len());

    // Ordered queries are exact even while stale.
    let first = tree.min().expect("tree is not empty");
    println!("first span starts at {:?}", first.range.start.as_bytes());

    // One pass settles every extent; overlap queries are exact again.
    tree.adjust_ranges();
    let query = Range::new(30_000u16.to_be_bytes(), 30_100u16.to_be_bytes());
    println!(
        "{} spans overlap {:?}..{:?}",
        tree.find_all_overlap(&query).len(),
        query.start.as_bytes(),
        query.end.as_bytes()
    );
}
