use super::*;
use std::io::Write;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    f.write_all(contents.as_bytes()).expect("write");
    f
}

#[test]
fn parses_well_formed_rows() {
    let f = write_temp(
        "of_id,created_at,due_date,priority,product,format,qty,nominal_rate_u_per_h,nominal_duration_min\n\
         OF00001,2026-01-05T07:30,2026-01-05T16:00,5,PRODUCT_F1,F1,10000,10000,60\n",
    );
    let orders = load_work_orders(f.path()).expect("parses");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].of_id.as_str(), "OF00001");
    assert_eq!(orders[0].nominal_duration_min, 60);
}

#[test]
fn column_order_is_irrelevant() {
    let f = write_temp(
        "format,of_id,product,priority,due_date,created_at,nominal_duration_min,qty,nominal_rate_u_per_h\n\
         F2,OF00002,PRODUCT_F2,3,2026-01-06T16:00,2026-01-05T07:30,30,5000,10000\n",
    );
    let orders = load_work_orders(f.path()).expect("parses");
    assert_eq!(orders[0].format.as_str(), "F2");
    assert_eq!(orders[0].priority, 3);
}

#[test]
fn malformed_timestamp_is_rejected() {
    let f = write_temp(
        "of_id,created_at,due_date,priority,product,format,qty,nominal_rate_u_per_h,nominal_duration_min\n\
         OF00001,not-a-date,2026-01-05T16:00,5,PRODUCT_F1,F1,10000,10000,60\n",
    );
    let err = load_work_orders(f.path()).unwrap_err();
    assert!(matches!(err, StorageError::MalformedTimestamp { .. }));
}

#[test]
fn missing_column_is_rejected() {
    let f = write_temp("of_id,created_at\nOF00001,2026-01-05T07:30\n");
    let err = load_work_orders(f.path()).unwrap_err();
    assert!(matches!(err, StorageError::MissingColumn { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_work_orders(std::path::Path::new("/nonexistent/path.csv")).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
}
