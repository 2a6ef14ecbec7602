/// Pipe table syntax.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Any line starting with `|` may belong to a table.
    pub fn is_row(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PIPE)
    }

    /// The second line of a table: `|---|:---:|`, every cell dashes with
    /// optional alignment colons.
    pub fn is_separator(trimmed: &str) -> bool {
        let Some(rest) = trimmed.strip_prefix(Self::PIPE) else {
            return false;
        };
        let rest = rest.strip_suffix(Self::PIPE).unwrap_or(rest);
        rest.split(Self::PIPE).map(str::trim).all(|cell| {
            let cell = cell.strip_prefix(':').unwrap_or(cell);
            let cell = cell.strip_suffix(':').unwrap_or(cell);
            !cell.is_empty() && cell.bytes().all(|b| b == b'-')
        })
    }

    /// Splits a row on `|`, trimming cells.
    ///
    /// Only the empty pieces produced by the leading and trailing pipe are
    /// dropped; empty cells in the middle of a row are kept.
    pub fn cells(trimmed: &str) -> Vec<&str> {
        let mut cells: Vec<&str> = trimmed.split(Self::PIPE).map(str::trim).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }
}
