/// Pairwise word similarities between a string and a composite-free pattern.
///
/// Rows are string positions, columns are pattern slots:
/// `get(s, p)` is the best similarity between any choice of slot `p` and word `s`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    columns: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compares every word of the string against every choice of every slot. The comparator
    /// receives the choice first and the candidate word second; its first error aborts the build.
    ///
    /// No caching happens here, wrap `compare` in a memo if it's expensive.
    pub fn build<W, C, E, F>(slots: &[C], words: &[W], mut compare: F) -> Result<Self, E>
    where
        W: AsRef<str>,
        C: AsRef<[String]>,
        F: FnMut(&str, &str) -> Result<f64, E>,
    {
        let rows = words.len();
        let columns = slots.len();
        let mut scores = vec![0.0; rows * columns];

        for (row, word) in words.iter().map(AsRef::as_ref).enumerate() {
            for (column, choices) in slots.iter().map(AsRef::as_ref).enumerate() {
                let mut best = 0.0;
                for (i, choice) in choices.iter().enumerate() {
                    let similarity = compare(choice, word)?;
                    best = if i == 0 { similarity } else { best.max(similarity) };
                }
                scores[row * columns + column] = best;
            }
        }

        Ok(Self {
            rows,
            columns,
            scores,
        })
    }

    /// Builds a matrix directly from rows of scores, mostly useful for exercising the matcher
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut scores = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), columns, "ragged similarity matrix");
            scores.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            columns,
            scores,
        }
    }

    /// Number of string positions
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of pattern slots
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.scores[row * self.columns + column]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.scores[row * self.columns..(row + 1) * self.columns]
    }
}
