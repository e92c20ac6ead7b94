use std::fs::OpenOptions;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use flate2::read::GzDecoder;

#[path = "utils_test.rs"]
mod utils_test;

/// Wall-clock seconds since the epoch, for coarse run timing.
pub fn realtime() -> f64 {
    let now = SystemTime::now();
    let since_epoch = now.duration_since(UNIX_EPOCH).expect("Time went backwards");
    since_epoch.as_secs_f64()
}

pub fn xopen(path: &Path) -> io::Result<Box<dyn Read>> {
    let file = OpenOptions::new().read(true).open(path)?;
    Ok(Box::new(BufReader::new(file)))
}

/// Open a file for reading, decompressing transparently when the path ends
/// in `.gz`.
pub fn xzopen(path: &Path) -> io::Result<Box<dyn Read>> {
    let input = xopen(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        Ok(Box::new(GzDecoder::new(input)))
    } else {
        Ok(input)
    }
}
