#[cfg(test)]
mod tests {
    use std::io::Write;

    use csl_fixture_parser::{parse_fixture_file, ParserError};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_fixture_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            ">>=====MODE=====>>\ncitation\n<<=====MODE=====<<\n"
        )
        .unwrap();

        let record = parse_fixture_file(file.path()).unwrap();
        assert_eq!(record.mode.as_deref(), Some("citation"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");

        let result = parse_fixture_file(&path);

        match result {
            Err(ParserError::Io { path: reported, source }) => {
                assert_eq!(reported, path.display().to_string());
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = parse_fixture_file(file.path());

        match result {
            Err(ParserError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = parse_fixture_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
