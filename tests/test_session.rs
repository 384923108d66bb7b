mod fixtures;
mod mocks;

use applicant_records::error::AppError;
use applicant_records::services::RecordServiceImpl;
use applicant_records::session::{run_session, MESSAGE_INVALID_INPUT};
use applicant_records::{InMemoryRecordRepository, RecordBook};
use fixtures::{typical_record_book, JOHN_DOE_ARGS};
use mocks::MockRecordStorage;
use std::io::{self, BufReader, Cursor, Read};

/// Service with autosave off, so only the session's final save writes.
fn manual_save_service(book: RecordBook) -> (RecordServiceImpl, MockRecordStorage) {
    let storage = MockRecordStorage::new();
    let service = RecordServiceImpl::new(
        Box::new(InMemoryRecordRepository::new(book)),
        Box::new(storage.clone()),
        false,
    );
    (service, storage)
}

/// Reader whose every read fails.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
    }
}

#[test]
fn test_invalid_utf8_line_is_skipped() {
    let (mut service, storage) = manual_save_service(RecordBook::new());

    let mut input = format!("add {JOHN_DOE_ARGS}\n").into_bytes();
    input.extend_from_slice(b"list \xff\xfe\n");
    input.extend_from_slice(b"exit\n");
    let mut output = Vec::new();

    run_session(&mut service, true, Cursor::new(input), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("New record added: Person: John Doe"));
    assert_eq!(lines[1], MESSAGE_INVALID_INPUT);
    assert_eq!(lines[2], "Exiting record manager as requested ...");

    assert_eq!(storage.get_call_count("save_record_book"), 1);
    assert_eq!(storage.stored().unwrap().len(), 1);
}

#[test]
fn test_read_failure_still_saves() {
    let (mut service, storage) = manual_save_service(RecordBook::new());

    let input = Cursor::new(format!("add {JOHN_DOE_ARGS}\n").into_bytes()).chain(BrokenReader);
    let mut output = Vec::new();

    let err = run_session(&mut service, true, BufReader::new(input), &mut output).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    assert_eq!(storage.stored().unwrap().len(), 1);
}

#[test]
fn test_end_of_input_without_exit_saves() {
    let (mut service, storage) = manual_save_service(typical_record_book());
    let mut output = Vec::new();

    run_session(&mut service, true, Cursor::new(b"delete 1\n".to_vec()), &mut output).unwrap();
    assert_eq!(storage.stored().unwrap().len(), 2);
}

#[test]
fn test_no_save_on_exit_when_not_asked() {
    let (mut service, storage) = manual_save_service(RecordBook::new());
    let mut output = Vec::new();

    let input = format!("add {JOHN_DOE_ARGS}\nexit\n");
    run_session(&mut service, false, Cursor::new(input.into_bytes()), &mut output).unwrap();
    assert_eq!(storage.get_call_count("save_record_book"), 0);
}

#[test]
fn test_list_prints_numbered_records() {
    let (mut service, _storage) = manual_save_service(typical_record_book());
    let mut output = Vec::new();

    let input = "\n   \nfind benson\nbogus\n";
    run_session(&mut service, false, Cursor::new(input), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1 records listed!");
    assert!(lines[1].starts_with("1. Person: Benson Meier;"));
    assert_eq!(lines[2], "Unknown command");
}
