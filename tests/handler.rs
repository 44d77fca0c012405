use filemeta::{Error, FileMetadataHandler, InvalidPathReason, SizeReading};
use std::ffi::OsString;

#[test]
fn rejects_traversal_anywhere() {
    for path in ["../x", "a/../b", "logs/../../etc/passwd", "./../up"] {
        let err = FileMetadataHandler::new(path).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(InvalidPathReason::Traversal)), "{path}");
    }
}

#[test]
fn rejects_reserved_characters() {
    for path in ["a<b", "a>b", "c:\\temp", "say\"hi\"", "a|b", "what?", "*.txt"] {
        let err = FileMetadataHandler::new(path).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(InvalidPathReason::InvalidCharacters)), "{path}");
    }
}

#[test]
fn rejects_empty_path() {
    let err = FileMetadataHandler::new(OsString::new()).unwrap_err();
    assert_eq!(err.to_string(), "invalid path: path required");
}

#[tokio::test]
async fn accessors_run_concurrently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");
    std::fs::write(&path, vec![b'x'; 1024 * 1024]).unwrap();
    let handler = FileMetadataHandler::new(&path).unwrap();

    let (name, ext, size, modified, checksum) = tokio::join!(
        handler.get_file_name(),
        handler.get_file_extension(),
        handler.get_file_size(Some("Megabytes")),
        handler.get_last_modified_date(),
        handler.compute_checksum(),
    );

    assert_eq!(name.unwrap(), "report.csv");
    assert_eq!(ext.unwrap(), ".csv");
    let size = size.unwrap();
    assert_eq!(size, SizeReading::Converted { value: 1.0, unit: "Megabytes".to_string() });
    assert_eq!(size.to_string(), "1 Megabytes");
    assert!(modified.is_ok());
    assert_eq!(checksum.unwrap().len(), 64);
}

#[tokio::test]
async fn file_removed_after_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ephemeral.tmp");
    std::fs::write(&path, "soon gone").unwrap();
    let handler = FileMetadataHandler::new(&path).unwrap();
    assert_eq!(handler.get_file_name().await.unwrap(), "ephemeral.tmp");

    std::fs::remove_file(&path).unwrap();
    let err = handler.get_file_size(Some("bytes")).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    let err = handler.get_file_age().await.unwrap_err();
    assert!(matches!(err, Error::AgeComputation(_)));
    assert!(err.is_not_found());
}
