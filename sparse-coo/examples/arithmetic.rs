//! Parse two small matrices, then print their sum, difference and product

use sparse_coo::{add, multiply, parse_matrix, subtract, SparseMatrix};

fn main() -> sparse_coo::Result<()> {
    let a: SparseMatrix = parse_matrix("rows=3\ncols=3\n(0, 0, 1)\n(1, 1, 2)\n(2, 2, 3)")?;
    let b: SparseMatrix = parse_matrix("rows=3\ncols=3\n(0, 2, 4)\n(1, 1, -2)\n(2, 0, 1)")?;

    println!("A + B:\n{}", add(&a, &b)?);
    println!("A - B:\n{}", subtract(&a, &b)?);
    println!("A * B:\n{}", multiply(&a, &b)?);

    match multiply(&a, &SparseMatrix::new(2, 2)) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("A * (2x2) rejected: {e}"),
    }
    Ok(())
}
