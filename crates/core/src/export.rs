//! CSV export of ticket lists.

use crate::ticket::Ticket;

const CSV_HEADER: &str = "id,title,category,status,reporter_name,reporter_email,\
                          reporter_contact,created_at,image_count\n";

/// Serialize tickets as CSV, one row per ticket in the given order.
pub fn tickets_to_csv(tickets: &[Ticket]) -> String {
    let mut out = String::from(CSV_HEADER);
    for t in tickets {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            t.id,
            csv_escape(&t.title),
            csv_escape(&t.category),
            t.status,
            csv_escape(&t.reporter_name),
            csv_escape(&t.reporter_email),
            csv_escape(&t.reporter_contact),
            t.created_at.to_rfc3339(),
            t.images.len(),
        ));
    }
    out
}

/// Quote a field if it contains a delimiter, quote, or line break.
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
