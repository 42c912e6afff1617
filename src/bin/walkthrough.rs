//! Walks through every tree operation on two small example trees, printing the result of each.
//!
//! Set `RUST_LOG=debug` to see what each shift did to the tree.

use std::io::{self, Write};

use log::{info, warn};
use searchtree::Tree;

const FIRST: [i32; 7] = [4, 2, 7, 1, 3, 6, 9];
const SECOND: [i32; 7] = [4, 2, 7, 1, 3, 6, 8];

fn verdict<'a>(yes: bool, positive: &'a str, negative: &'a str) -> &'a str {
    if yes {
        positive
    } else {
        negative
    }
}

fn print_titled<W: Write>(out: &mut W, title: &str, tree: &Tree<i32>) -> io::Result<()> {
    writeln!(out, "***** {title} *****")?;
    tree.print_level(&mut *out)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut first: Tree<_> = FIRST.into_iter().collect();
    let second: Tree<_> = SECOND.into_iter().collect();
    info!("built trees from {FIRST:?} and {SECOND:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_titled(&mut out, "Tree 1", &first)?;
    writeln!(out)?;
    print_titled(&mut out, "Tree 2", &second)?;

    writeln!(out, "\na) nodeCount : Tree 1 = {}", first.count())?;
    writeln!(
        out,
        "\nb) isFull : Tree 1 is {}",
        verdict(first.is_full(), "Full", "Not Full")
    )?;
    writeln!(
        out,
        "\nc) compareStructure : Tree 1 & 2 {}",
        verdict(
            first.compare_structure(&second),
            "have the Same Structure",
            "do not have the Same Structure"
        )
    )?;
    writeln!(
        out,
        "\nd) isEqual : Tree 1 & 2 are {}",
        verdict(first.is_equal(&second), "Equal", "Not Equal")
    )?;

    writeln!(out, "\ne) copy :")?;
    if first.is_empty() {
        writeln!(out, "Null Tree")?;
    } else {
        let copy = first.copy();
        print_titled(&mut out, "Original Tree", &first)?;
        print_titled(&mut out, "Copied Tree", &copy)?;
    }

    writeln!(out, "\nf) mirror :")?;
    let mirror = first.mirror();
    if first.is_empty() {
        writeln!(out, "Null Tree")?;
    } else {
        print_titled(&mut out, "Original Tree", &first)?;
        print_titled(&mut out, "Mirror Tree", &mirror)?;
    }

    writeln!(out, "\ng) isMirror")?;
    print_titled(&mut out, "Tree 1", &first)?;
    print_titled(&mut out, "Tree 2", &mirror)?;
    writeln!(
        out,
        "Tree 1 & 2 are {}",
        verdict(first.is_mirror(&mirror), "Mirror", "Not Mirror")
    )?;

    writeln!(out, "\nh) rotateRight")?;
    if let Err(e) = first.right_shift(&4) {
        warn!("right shift around 4 failed: {e}");
    }
    first.print_level(&mut out)?;

    writeln!(out, "\ni) rotateLeft")?;
    if let Err(e) = first.left_shift(&2) {
        warn!("left shift around 2 failed: {e}");
    }
    first.print_level(&mut out)?;

    writeln!(out, "\nj) printLevel")?;
    first.print_level(&mut out)?;

    writeln!(out, "\nk) printTree")?;
    first.print_tree(&mut out)?;

    writeln!(out, "Done")
}
