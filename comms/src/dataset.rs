use crate::{
    error::{CommsErr, Result},
    msg::Sample,
};

const WHAT: &str = "dataset";

/// Parses the served CSV dataset.
///
/// Columns are looked up by name in the header, so their order is free and any column
/// besides `a`, `b`, `c` and `t` (an index for instance) is ignored. Blank lines are skipped.
///
/// # Arguments
/// * `payload` - The raw response body.
///
/// # Returns
/// The parsed rows, or an error on a missing column, a ragged row or a non numeric cell.
pub fn parse_dataset(payload: &[u8]) -> Result<Vec<Sample>> {
    let text = std::str::from_utf8(payload).map_err(|e| CommsErr::malformed(WHAT, e))?;
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| CommsErr::malformed(WHAT, "missing header"))?;
    let columns: Vec<&str> = header
        .trim_start_matches('\u{feff}')
        .split(',')
        .map(|col| col.trim().trim_matches('"'))
        .collect();

    let find = |name: &str| {
        columns
            .iter()
            .position(|col| *col == name)
            .ok_or_else(|| CommsErr::malformed(WHAT, format!("missing column {name:?}")))
    };
    let [a, b, c, t] = [find("a")?, find("b")?, find("c")?, find("t")?];

    let mut samples = Vec::new();
    for (i, line) in lines.enumerate() {
        // The header is line 1.
        let lineno = i + 2;
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != columns.len() {
            return Err(CommsErr::malformed(
                WHAT,
                format!(
                    "line {lineno} has {} cells, expected {}",
                    cells.len(),
                    columns.len()
                ),
            ));
        }

        let cell = |idx: usize| {
            cells[idx].parse::<f64>().map_err(|e| {
                CommsErr::malformed(
                    WHAT,
                    format!("line {lineno}, column {:?}: {e}", columns[idx]),
                )
            })
        };

        samples.push(Sample {
            a: cell(a)?,
            b: cell(b)?,
            c: cell(c)?,
            t: cell(t)?,
        });
    }

    Ok(samples)
}
