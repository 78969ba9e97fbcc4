use bls12_381::Scalar;

/// Matrix that is constant along every descending diagonal, stored as its
/// first row and first column.
///
/// ```text
/// row = [1, 2, 3, 4]        [1 2 3 4]
/// col = [1, 5, 6, 7]   =>   [5 1 2 3]
///                           [6 5 1 2]
///                           [7 6 5 1]
/// ```
#[derive(Debug, Clone)]
pub struct ToeplitzMatrix {
    /// Entries on and above the main diagonal.
    row: Vec<Scalar>,
    /// Entries on and below the main diagonal. `col[0] == row[0]`.
    col: Vec<Scalar>,
}

impl ToeplitzMatrix {
    /// # Panics
    ///
    /// Panics if either vector is empty or if they disagree on the top-left entry.
    pub fn new(row: Vec<Scalar>, col: Vec<Scalar>) -> Self {
        assert!(
            !row.is_empty() && !col.is_empty(),
            "row and col must be non-empty"
        );
        assert_eq!(row[0], col[0], "row and col must share the top-left entry");
        Self { row, col }
    }

    /// Upper-triangular Toeplitz matrix: zero below the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `row` is empty.
    pub fn upper_triangular(row: Vec<Scalar>) -> Self {
        let mut col = vec![Scalar::from(0u64); row.len()];
        col[0] = row[0];
        Self::new(row, col)
    }
}

/// Circulant matrix: every row is the previous one rotated right by one.
/// Stored as the first column `c`, so that entry `(i, j)` is `c[(i - j) mod m]`.
///
/// Circulant matrices are diagonalised by the DFT, which turns a
/// matrix-vector product into a pointwise product of two FFTs.
#[derive(Debug, Clone)]
pub(crate) struct CirculantMatrix {
    pub(crate) col: Vec<Scalar>,
}

impl CirculantMatrix {
    /// Embeds a `k × k` Toeplitz matrix in the top-left corner of a `2k × 2k`
    /// circulant matrix. Multiplying by `[x, 0]` and keeping the first `k`
    /// outputs gives the Toeplitz product.
    pub(crate) fn from_toeplitz(tm: ToeplitzMatrix) -> Self {
        // c = [col_0..col_(k-1), row_0, row_(k-1), ..., row_1]
        let mut upper = tm.row;
        upper[1..].reverse();

        Self {
            col: [tm.col, upper].concat(),
        }
    }
}
