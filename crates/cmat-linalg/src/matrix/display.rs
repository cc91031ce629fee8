//! ASCII rendering of matrices.

use std::fmt;

use super::Matrix;

impl Matrix {
    /// Width of the horizontal rules drawn by `Display`.
    #[must_use]
    pub fn rendered_width(&self) -> usize {
        let cell = self.cell_width();
        cell * self.num_cols + 3 * (self.num_cols - 1) + 2
    }

    fn cell_width(&self) -> usize {
        self.data
            .iter()
            .map(|v| v.to_string().chars().count())
            .max()
            .unwrap_or(0)
            + 2
    }
}

impl fmt::Display for Matrix {
    /// Draws the matrix as a grid of ruled rows, each entry centered in a
    /// cell two characters wider than the longest entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cell_width();
        let rule = "-".repeat(self.rendered_width());

        writeln!(f, "{rule}")?;
        for row in 0..self.num_rows {
            let cells: Vec<String> = self
                .row_slice(row)
                .iter()
                .map(|v| {
                    let text = v.to_string();
                    let left = (width - text.chars().count()) / 2;
                    format!("{:left$}{text:<rest$}", "", rest = width - left)
                })
                .collect();
            writeln!(f, "|{}|", cells.join(" | "))?;
            if row + 1 == self.num_rows {
                write!(f, "{rule}")?;
            } else {
                writeln!(f, "{rule}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cmat_complex::Complex;

    use super::*;

    #[test]
    fn test_render_grid() {
        let m = Matrix::new([[1, 2], [3, 4]]).unwrap();
        let expected = "\
-----------
| 1  |  2 |
-----------
| 3  |  4 |
-----------";
        assert_eq!(m.to_string(), expected);
        assert_eq!(m.rendered_width(), 11);
    }

    #[test]
    fn test_render_uneven_widths() {
        let m = Matrix::new([[Complex::from(10), Complex::I]]).unwrap();
        let expected = "\
-------------
| 10  |  i  |
-------------";
        assert_eq!(m.to_string(), expected);
    }
}
