use crate::{
    consts::{
        DECIMAL_SEPARATOR, FIELD_DELIMITER, HEADER, PI_PRECISION, SECONDS_PRECISION,
        SUBSECOND_PRECISION,
    },
    error::{Error, Result},
    types::SampleResult,
};
use csv::{Terminator, WriterBuilder};
use std::{
    fs::{File, OpenOptions},
    path::Path,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate or create the file and start with a header row
    Fresh,
    /// Add rows to the end of the file, no header
    Append,
}

/// Fixed-precision decimal with a comma as the decimal separator.
pub fn decimal_comma(value: f64, precision: usize) -> String {
    format!("{value:.precision$}").replace('.', DECIMAL_SEPARATOR)
}

fn record(result: &SampleResult) -> [String; 7] {
    [
        result.trials().to_string(),
        result.method().label().to_string(),
        result.workers().to_string(),
        decimal_comma(result.pi(), PI_PRECISION),
        decimal_comma(result.seconds(), SECONDS_PRECISION),
        decimal_comma(result.millis(), SUBSECOND_PRECISION),
        decimal_comma(result.micros(), SUBSECOND_PRECISION),
    ]
}

fn open(path: &Path, mode: WriteMode) -> Result<File> {
    let opened = match mode {
        WriteMode::Fresh => File::create(path),
        WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
    };
    opened.map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the sequential and parallel rows for one sample size.
pub fn write_pair(
    sequential: &SampleResult,
    parallel: &SampleResult,
    path: &Path,
    mode: WriteMode,
) -> Result<()> {
    let file = open(path, mode)?;
    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(file);

    if mode == WriteMode::Fresh {
        writer.write_record(HEADER)?;
    }
    for result in [sequential, parallel] {
        writer.write_record(&record(result))?;
    }
    writer.flush()?;

    debug!(path = %path.display(), ?mode, "report rows written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Method, Trials};
    use std::{fs, time::Duration};

    fn pair(n: u64) -> (SampleResult, SampleResult) {
        let trials = Trials::new(n).unwrap();
        (
            SampleResult::new(
                Method::Sequential,
                trials,
                1,
                n * 3 / 4,
                Duration::from_millis(250),
            ),
            SampleResult::new(
                Method::Parallel,
                trials,
                4,
                n * 3 / 4,
                Duration::from_micros(75),
            ),
        )
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(decimal_comma(1.23456, 2), "1,23");
        assert_eq!(decimal_comma(0.5, 8), "0,50000000");
        assert_eq!(decimal_comma(12.0, 0), "12");
    }

    #[test]
    fn test_fresh_write_has_one_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let (seq, par) = pair(1000);

        write_pair(&seq, &par, &path, WriteMode::Fresh).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Samples;Método;Hilos;Valor Pi;Tiempo (s);Tiempo (ms);Tiempo (us)"
        );
        assert_eq!(
            lines[1],
            "1000;Secuencial;1;3,000000000000;0,250000000000;250,00000000;250000,00000000"
        );
        assert_eq!(
            lines[2],
            "1000;Paralelo;4;3,000000000000;0,000075000000;0,07500000;75,00000000"
        );
    }

    #[test]
    fn test_append_does_not_repeat_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let (seq, par) = pair(1000);
        let (seq2, par2) = pair(2000);

        write_pair(&seq, &par, &path, WriteMode::Fresh).unwrap();
        write_pair(&seq2, &par2, &path, WriteMode::Append).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines.iter().filter(|l| l.starts_with("Samples;")).count(), 1);
        assert!(lines[3].starts_with("2000;Secuencial;1;"));
        assert!(lines[4].starts_with("2000;Paralelo;4;"));
    }

    #[test]
    fn test_fresh_write_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let (seq, par) = pair(1000);

        write_pair(&seq, &par, &path, WriteMode::Fresh).unwrap();
        write_pair(&seq, &par, &path, WriteMode::Append).unwrap();
        write_pair(&seq, &par, &path, WriteMode::Fresh).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_open_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let (seq, par) = pair(1000);

        let err = write_pair(&seq, &par, &path, WriteMode::Fresh).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(!path.exists());
    }
}
