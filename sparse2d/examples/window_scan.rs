//! Build a small sparse matrix, inspect its bounds and scan a window

use sparse2d::SparseMatrix;

fn main() {
    let mut matrix: SparseMatrix<&str, i32, i32> = SparseMatrix::new();
    matrix.put(1, 2, "a");
    matrix.put(1, 5, "b");
    matrix.put(3, 1, "c");

    println!("Matrix Information:");
    println!("   Cells: {}", matrix.len());
    println!("   Rows: [{}, {})", matrix.row_lower(), matrix.row_upper());
    println!("   Columns: [{}, {})", matrix.col_lower(), matrix.col_upper());

    println!("\nAll cells:");
    for cell in &matrix {
        println!("   ({}, {}) = {}", cell.row(), cell.col(), cell.elt());
    }

    println!("\nWindow [1, 4) x [2, 6) through a cursor:");
    let end = matrix.end();
    let mut cursor = matrix.begin_within(1..4, 2..6);
    while cursor != end {
        let cell = cursor.cell(&matrix);
        println!("   ({}, {}) = {}", cell.row(), cell.col(), cell.elt());
        cursor.advance(&matrix);
    }

    let end = matrix.end();
    let removed = matrix.erase_range(matrix.begin_within(0..3, 0..10), &end);
    println!("\nErased {removed} cells in rows [0, 3), {} left", matrix.len());
}
