//! # Data Table Component
//!
//! Renders the rows of a collection page. Clicking a row reports its index;
//! the page decides what selection means.

use dioxus::prelude::*;
use sitedesk_schema::Column;

/// Properties for DataTable component
#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    /// Column definitions (header labels)
    pub columns: Vec<Column>,

    /// Rendered cell text, one entry per column
    pub rows: Vec<Vec<String>>,

    /// Highlighted row index
    #[props(default)]
    pub highlighted: Option<usize>,

    /// Row click handler
    #[props(default)]
    pub on_select: EventHandler<usize>,
}

/// Table of rendered rows with single-row highlight
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let column_count = props.columns.len();

    rsx! {
        div {
            class: "data-table-wrapper",

            table {
                class: "data-table",

                thead {
                    tr {
                        for column in &props.columns {
                            th { key: "{column.key}", "{column.label}" }
                        }
                    }
                }

                tbody {
                    if props.rows.is_empty() {
                        tr {
                            td {
                                class: "data-table-empty",
                                colspan: "{column_count}",
                                "No records"
                            }
                        }
                    }

                    for (index, row) in props.rows.iter().enumerate() {
                        tr {
                            key: "{index}",
                            class: row_class(props.highlighted, index),
                            onclick: move |_| props.on_select.call(index),

                            for (cell_index, cell) in row.iter().enumerate() {
                                td { key: "{cell_index}", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// CSS class for a table row
fn row_class(highlighted: Option<usize>, index: usize) -> &'static str {
    if highlighted == Some(index) {
        "data-row highlighted"
    } else {
        "data-row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class() {
        assert_eq!(row_class(Some(2), 2), "data-row highlighted");
        assert_eq!(row_class(Some(2), 1), "data-row");
        assert_eq!(row_class(None, 0), "data-row");
    }
}
