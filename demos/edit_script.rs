//! Example: print the edit script between two words.
//!
//! Run with:
//! `cargo run --example edit_script -- kitten sitting`

use bounded_edit::{edit_path, EditOp};

fn main() {
    let mut args = std::env::args().skip(1);
    let s = args.next().unwrap_or_else(|| "kitten".to_string());
    let t = args.next().unwrap_or_else(|| "sitting".to_string());
    let (sc, tc): (Vec<char>, Vec<char>) = (s.chars().collect(), t.chars().collect());

    let ops = edit_path(&sc, &tc);
    let (mut i, mut j) = (0, 0);
    let (mut top, mut bottom, mut marks) = (String::new(), String::new(), String::new());
    for op in &ops {
        match op {
            EditOp::Keep | EditOp::Substitute => {
                top.push(sc[i]);
                bottom.push(tc[j]);
                marks.push(if *op == EditOp::Keep { '|' } else { '*' });
                i += 1;
                j += 1;
            }
            EditOp::Insert => {
                top.push('-');
                bottom.push(tc[j]);
                marks.push('+');
                j += 1;
            }
            EditOp::Remove => {
                top.push(sc[i]);
                bottom.push('-');
                marks.push('x');
                i += 1;
            }
        }
    }

    let cost = ops.iter().filter(|op| **op != EditOp::Keep).count();
    println!("{s} -> {t}: {cost} edit(s)");
    println!("  {top}");
    println!("  {marks}");
    println!("  {bottom}");
}
