use tabled::{
    Table, Tabled,
    settings::{Panel, Style},
};

/// Borderless tables for terminal listings.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    header: Option<String>,
    footer: Option<String>,
}

impl Formatter {
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: Option<String>) -> Self {
        self.footer = footer;
        self
    }

    pub fn build<T: Tabled, I: IntoIterator<Item = T>>(self, rows: I) -> Table {
        let mut table = Table::new(rows);
        table.with(Style::blank());
        if let Some(header) = self.header {
            table.with(Panel::header(header));
        }
        if let Some(footer) = self.footer {
            table.with(Panel::footer(footer));
        }
        table
    }
}
