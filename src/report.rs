//! Fixed-width customer table
//!
//! Renders one header row and one row per customer. Every column is
//! left-justified to a fixed width and real values use two decimals.

use std::io::{self, Write};

use crate::types::CustomerRecord;

/// Column headers, in output order
pub const HEADERS: [&str; 10] = [
    "Customer",
    "IAT",
    "Arrival Time",
    "Service Time",
    "Service Start Time",
    "Service End Time",
    "Waiting Time",
    "Time in System",
    "Idle Time",
    "Queue Length",
];

/// Column widths, matching [`HEADERS`]
pub const WIDTHS: [usize; 10] = [10, 10, 15, 15, 20, 20, 15, 15, 20, 15];

/// Format the header row (without trailing newline)
pub fn header_row() -> String {
    HEADERS
        .iter()
        .zip(WIDTHS)
        .map(|(header, width)| format!("{:<width$}", header, width = width))
        .collect()
}

/// Format one customer row (without trailing newline); `number` is 1-based
pub fn customer_row(number: usize, record: &CustomerRecord) -> String {
    let reals = [
        record.inter_arrival_time,
        record.arrival_time,
        record.service_time,
        record.service_start_time,
        record.service_end_time,
        record.waiting_time,
        record.time_in_system,
        record.idle_time,
    ];

    let mut row = format!("{:<width$}", number, width = WIDTHS[0]);
    for (value, width) in reals.iter().zip(&WIDTHS[1..9]) {
        row.push_str(&format!("{:<width$.2}", value, width = *width));
    }
    row.push_str(&format!("{:<width$}", record.queue_length, width = WIDTHS[9]));
    row
}

/// Write the full table for a run
pub fn write_table<W: Write>(writer: &mut W, records: &[CustomerRecord]) -> io::Result<()> {
    writeln!(writer, "{}", header_row())?;
    for (index, record) in records.iter().enumerate() {
        writeln!(writer, "{}", customer_row(index + 1, record))?;
    }
    writer.flush()
}

/// Render the full table into a string
pub fn render_table(records: &[CustomerRecord]) -> String {
    let mut buffer = Vec::new();
    write_table(&mut buffer, records).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServerState;

    #[test]
    fn test_header_row_layout() {
        let header = header_row();
        assert_eq!(header.len(), WIDTHS.iter().sum::<usize>());
        assert!(header.starts_with("Customer  IAT       Arrival Time   "));
        assert!(header.ends_with("Queue Length   "));
    }

    #[test]
    fn test_first_customer_row() {
        let row = customer_row(1, &CustomerRecord::first(2.0));
        let expected = format!(
            "{:<10}{:<10}{:<15}{:<15}{:<20}{:<20}{:<15}{:<15}{:<20}{:<15}",
            "1", "0.00", "0.00", "2.00", "0.00", "2.00", "0.00", "2.00", "0.00", "0"
        );
        assert_eq!(row, expected);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let first = CustomerRecord::first(1.0);
        let record = CustomerRecord::after(ServerState::from(&first), 0.456, 1.0);
        let row = customer_row(2, &record);
        assert!(row.starts_with("2         0.46      "));
        assert!(row.trim_end().ends_with('1'));
    }

    #[test]
    fn test_table_has_one_row_per_customer() {
        let first = CustomerRecord::first(1.0);
        let second = CustomerRecord::after(ServerState::from(&first), 0.5, 1.0);
        let table = render_table(&[first, second]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], header_row());
        assert!(lines[1].starts_with('1'));
        assert!(lines[2].starts_with('2'));
        assert!(table.ends_with('\n'));
    }
}
