use std::io::{self, Write};

use nalgebra::DMatrix;

/// Writes the matrix row by row, each cell with `digits` fraction digits,
/// cells separated by a single space.
pub fn write_matrix<W: Write>(out: &mut W, matrix: &DMatrix<f32>, digits: usize) -> io::Result<()> {
    for row in matrix.row_iter() {
        let line = row
            .iter()
            .map(|value| format!("{:.*}", digits, value))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Renders the matrix the way [`write_matrix`] prints it.
pub fn format_matrix(matrix: &DMatrix<f32>, digits: usize) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_matrix(&mut buf, matrix, digits);
    String::from_utf8_lossy(&buf).into_owned()
}
