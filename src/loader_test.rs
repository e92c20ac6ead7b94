// genosim/src/loader_test.rs

#[cfg(test)]
mod tests {
    use crate::loader::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::fs;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};

    fn setup_test_dir(test_name: &str) -> io::Result<PathBuf> {
        let temp_dir = PathBuf::from(format!("target/test_loader_{test_name}"));
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(&temp_dir)?;
        Ok(temp_dir)
    }

    fn cleanup_test_dir(temp_dir: &Path) {
        if temp_dir.exists() {
            let _ = fs::remove_dir_all(temp_dir);
        }
    }

    // --- parse_records ---

    #[test]
    fn test_parse_single_record() {
        let records = parse_records(">chr1\nACGT\nACGT\n");
        assert_eq!(records, vec![("CHR1".to_string(), "ACGTACGT".to_string())]);
    }

    #[test]
    fn test_parse_multiple_records() {
        let records = parse_records(">one\nAC\nGT\n>two\nTTTT\n");
        assert_eq!(
            records,
            vec![
                ("ONE".to_string(), "ACGT".to_string()),
                ("TWO".to_string(), "TTTT".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_uppercases_soft_masked_data() {
        let records = parse_records(">seq\nacgtNRY\n");
        assert_eq!(records, vec![("SEQ".to_string(), "ACGTNRY".to_string())]);
    }

    #[test]
    fn test_parse_header_marker_mid_line() {
        // The name is whatever follows the '>', wherever it sits.
        let records = parse_records("id >strain_7\nACGT\n");
        assert_eq!(records, vec![("STRAIN_7".to_string(), "ACGT".to_string())]);
    }

    #[test]
    fn test_parse_ignores_data_before_first_header() {
        let records = parse_records("GGGG\n>seq\nACGT\n");
        assert_eq!(records, vec![("SEQ".to_string(), "ACGT".to_string())]);
    }

    #[test]
    fn test_parse_no_header_yields_nothing() {
        assert!(parse_records("ACGT\nACGT\n").is_empty());
    }

    #[test]
    fn test_parse_record_with_no_data_kept() {
        let records = parse_records(">empty\n>full\nACGT\n");
        assert_eq!(
            records,
            vec![
                ("EMPTY".to_string(), String::new()),
                ("FULL".to_string(), "ACGT".to_string()),
            ]
        );
    }

    // --- SequenceSet ---

    #[test]
    fn test_duplicate_name_overwrites_in_place() {
        let mut set = SequenceSet::new();
        set.insert("A".to_string(), "AAAA".to_string());
        set.insert("B".to_string(), "CCCC".to_string());
        set.insert("A".to_string(), "GGGG".to_string());
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("A").unwrap().symbols, "GGGG");
        assert_eq!(set.sequences()[0].name, "A");
        assert_eq!(set.sequences()[1].name, "B");
    }

    // --- load_sequences ---

    #[test]
    fn test_load_from_collection_dirs() -> io::Result<()> {
        let temp_dir = setup_test_dir("collections")?;
        fs::create_dir(temp_dir.join("set1"))?;
        fs::create_dir(temp_dir.join("set2"))?;
        fs::write(temp_dir.join("set1/a.fna"), ">alpha\nacgt\n")?;
        fs::write(temp_dir.join("set2/b.fna"), ">beta\nTTTT\n>gamma\nGG\nGG\n")?;
        // A file directly under the root must be ignored.
        fs::write(temp_dir.join("stray.fna"), ">stray\nAAAA\n")?;

        let set = load_sequences(&temp_dir).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("ALPHA").unwrap().symbols, "ACGT");
        assert_eq!(set.get("BETA").unwrap().symbols, "TTTT");
        assert_eq!(set.get("GAMMA").unwrap().symbols, "GGGG");
        assert!(set.get("STRAY").is_none());

        cleanup_test_dir(&temp_dir);
        Ok(())
    }

    #[test]
    fn test_load_gzipped_file() -> io::Result<()> {
        let temp_dir = setup_test_dir("gzip")?;
        fs::create_dir(temp_dir.join("set1"))?;
        let gz_path = temp_dir.join("set1/z.fna.gz");
        let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
        encoder.write_all(b">zipped\nACGTACGT\n")?;
        encoder.finish()?;

        let set = load_sequences(&temp_dir).unwrap();
        assert_eq!(set.get("ZIPPED").unwrap().symbols, "ACGTACGT");

        cleanup_test_dir(&temp_dir);
        Ok(())
    }

    #[test]
    fn test_load_missing_root_fails() {
        assert!(load_sequences(Path::new("target/does_not_exist_loader")).is_err());
    }

    #[test]
    fn test_load_empty_root_yields_empty_set() -> io::Result<()> {
        let temp_dir = setup_test_dir("empty")?;
        let set = load_sequences(&temp_dir).unwrap();
        assert!(set.is_empty());
        cleanup_test_dir(&temp_dir);
        Ok(())
    }
}
