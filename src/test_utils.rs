use std::{cmp::Ordering, fmt::Debug, fmt::Write};

use crate::{comparator::Comparator, node::Occupied, AvlTree};

/// Render the subtree rooted at `n` as a Graphviz digraph.
pub(crate) fn print_dot<T>(n: &Occupied<T>) -> String
where
    T: Debug,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<T, W>(n: &Occupied<T>, buf: &mut W)
where
    W: std::fmt::Write,
    T: Debug,
{
    let id = format!("{:?}", n.payload());

    writeln!(
        buf,
        r#""{id}" [label="{id} | {{ h={} | b={} | n={} }}"];"#,
        n.height(),
        n.balance(),
        n.size(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{id}\" -> \"{:?}\" [color = \"orange1\";];",
                    v.payload()
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{id}\" [shape=point,style=invis];").unwrap();
                writeln!(buf, "\"{id}\" -> \"null_{id}\" [style=invis];").unwrap();
            }
        };
    }
}

/// Assert the BST and AVL properties of tree nodes, ensuring the tree is
/// well-formed.
///
/// All cached node state is recomputed from scratch and compared against the
/// stored values.
pub(crate) fn validate_tree_structure<T, C>(t: &AvlTree<T, C>)
where
    T: Debug,
    C: Comparator<T>,
{
    let root = match t.root().occupied() {
        Some(v) => v,
        None => {
            assert_eq!(t.size(), 0);
            assert_eq!(t.height(), 0);
            return;
        }
    };

    let (height, size) = validate_subtree(root, None, None, t.comparator(), root);

    // Invariant: the tree size is the number of occupied nodes.
    assert_eq!(t.size(), size);
    assert_eq!(t.height(), height as usize);
}

/// Validate the subtree rooted at `n`, the items of which must all fall
/// strictly between `lower` and `upper` (if any).
///
/// Returns the recomputed height and size of the subtree.
fn validate_subtree<T, C>(
    n: &Occupied<T>,
    lower: Option<&T>,
    upper: Option<&T>,
    cmp: &C,
    root: &Occupied<T>,
) -> (u8, usize)
where
    T: Debug,
    C: Comparator<T>,
{
    // Invariant 1: every item in a left subtree is strictly less than its
    // ancestor, and every item in a right subtree strictly greater (which
    // also rules out duplicates).
    if let Some(lower) = lower {
        assert_eq!(
            cmp.compare(lower, n.payload()),
            Ordering::Less,
            "{:?} not greater than ancestor {lower:?}\n{}",
            n.payload(),
            print_dot(root),
        );
    }
    if let Some(upper) = upper {
        assert_eq!(
            cmp.compare(n.payload(), upper),
            Ordering::Less,
            "{:?} not less than ancestor {upper:?}\n{}",
            n.payload(),
            print_dot(root),
        );
    }

    let (left_height, left_size) = n
        .left()
        .map(|v| validate_subtree(v, lower, Some(n.payload()), cmp, root))
        .unwrap_or_default();
    let (right_height, right_size) = n
        .right()
        .map(|v| validate_subtree(v, Some(n.payload()), upper, cmp, root))
        .unwrap_or_default();

    // Invariant 2: the height of this node is always +1 of the maximum child
    // height.
    let height = left_height.max(right_height) + 1;
    assert_eq!(
        n.height(),
        height,
        "expect node {:?} to have height {height}, has {}\n{}",
        n.payload(),
        n.height(),
        print_dot(root),
    );

    // Invariant 3: the balance factor is the difference in subtree heights,
    // and never exceeds an absolute value of 1.
    let balance = right_height as i64 - left_height as i64;
    assert_eq!(n.balance() as i64, balance);
    assert!(
        balance.abs() <= 1,
        "balance={balance}, node={:?}\n{}",
        n.payload(),
        print_dot(root),
    );

    // Invariant 4: each node counts the items in its own subtree.
    let size = left_size + right_size + 1;
    assert_eq!(n.size(), size);

    (height, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_dot() {
        let mut t = AvlTree::new();
        for v in [2, 1] {
            t.insert(v);
        }

        let got = print_dot(t.root().occupied().unwrap());

        assert!(got.starts_with("digraph {\n"));
        assert!(got.contains(r#""2" [label="2 | { h=2 | b=-1 | n=2 }"];"#));
        assert!(got.contains(r#""2" -> "1" [color = "orange1";];"#));
        assert!(got.contains(r#""1" [label="1 | { h=1 | b=0 | n=1 }"];"#));
        assert!(got.contains(r#""null_1" [shape=point,style=invis];"#));
        assert!(got.ends_with("}\n"));
    }
}
