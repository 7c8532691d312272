//! Minimal CSV parsing for the small input tables this tool consumes.
//!
//! Handles quoted fields, escaped quotes (`""`), and CRLF line endings.
//! Embedded newlines inside quoted fields are supported because eBird
//! life-list exports quote free-text columns.

/// Parse CSV text into records of fields. Fields are trimmed of the
/// surrounding quotes but not of interior whitespace.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {} // swallowed; '\n' terminates the record
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    records
}

/// True when every field of a record is empty or whitespace.
pub fn is_blank(record: &[String]) -> bool {
    record.iter().all(|f| f.trim().is_empty())
}
