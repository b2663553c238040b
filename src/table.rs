// In-memory table model: stands in for the tbody the dashboard rewrites in
// place every poll. Reconciliation only ever touches trailing rows, so
// surviving rows keep their cells and just get overwritten.

/// Minimal HTML escaping for text dropped into cell markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    /// Pre-built inner HTML; plain text must go through [`escape`] first.
    pub html: String,
    pub classes: Vec<String>,
}

impl TableCell {
    /// Add a CSS class unless already present (classList.add semantics).
    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Cell at `index`, growing the row with empty cells as needed.
    pub fn cell_mut(&mut self, index: usize) -> &mut TableCell {
        while self.cells.len() <= index {
            self.cells.push(TableCell::default());
        }
        &mut self.cells[index]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Match the row count to `len` by appending empty trailing rows or
    /// dropping trailing rows.
    pub fn reconcile_rows(&mut self, len: usize) {
        while self.rows.len() < len {
            self.rows.push(TableRow::default());
        }
        while self.rows.len() > len {
            self.rows.pop();
        }
    }

    pub fn row_mut(&mut self, index: usize) -> &mut TableRow {
        &mut self.rows[index]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the rows as tbody markup.
    pub fn to_tbody_html(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in &row.cells {
                if cell.classes.is_empty() {
                    out.push_str("<td>");
                } else {
                    out.push_str(&format!("<td class=\"{}\">", cell.classes.join(" ")));
                }
                out.push_str(&cell.html);
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out
    }
}
