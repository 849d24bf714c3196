use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{LagMatrixError, Result};

/// Reads the first `length` samples from a file holding one value per line.
///
/// Each line is read as a header-less CSV record holding exactly one field,
/// parsed as `f32`. Fails if the file has fewer than `length` lines, if a line
/// is blank, holds more than one field or does not parse, or if a value is NaN
/// or infinite.
pub fn read_samples<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let samples = read_samples_from_reader(file, length)?;
    debug!(path = %path.display(), samples = samples.len(), "read input samples");
    Ok(samples)
}

/// Same as [`read_samples`] over any reader.
pub fn read_samples_from_reader<R: Read>(reader: R, length: usize) -> Result<Vec<f32>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut fields = Vec::with_capacity(length);
    for result in rdr.records().take(length) {
        let record = result?;
        let expected = fields.len() + 1;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(expected);

        // The reader skips empty lines; a jump in line numbers means one was blank
        if line > expected {
            return Err(LagMatrixError::InvalidValue {
                line: expected,
                value: String::new(),
            });
        }

        if record.len() != 1 {
            return Err(LagMatrixError::InvalidValue {
                line,
                value: record.iter().collect::<Vec<_>>().join(","),
            });
        }

        fields.push((line, record[0].to_string()));
    }

    if fields.len() < length {
        return Err(LagMatrixError::NotEnoughValues {
            expected: length,
            found: fields.len(),
        });
    }

    let mut samples = Vec::with_capacity(length);
    for (line, field) in fields {
        let value = field
            .parse::<f32>()
            .map_err(|_| LagMatrixError::InvalidValue { line, value: field.clone() })?;
        samples.push(value);
    }

    // Sample i came from line i + 1, so positions double as line numbers
    validate_samples(&samples)?;

    Ok(samples)
}

/// Checks that every sample is finite, reporting the first offender by its
/// 1-based position.
pub fn validate_samples(samples: &[f32]) -> Result<()> {
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(LagMatrixError::NonFiniteValue {
            line: index + 1,
            value: samples[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_one_value_per_line() {
        let input = "0.5\n-1.25\n  3.0  \n4\n";
        let samples = read_samples_from_reader(input.as_bytes(), 4).unwrap();
        assert_eq!(samples, vec![0.5, -1.25, 3.0, 4.0]);
    }

    #[test]
    fn test_stops_after_length() {
        let input = "1\n2\n3\nnot a number\n";
        let samples = read_samples_from_reader(input.as_bytes(), 3).unwrap();
        assert_eq!(samples, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_not_enough_values() {
        let input = "1\n2\n";
        let err = read_samples_from_reader(input.as_bytes(), 5).unwrap_err();
        assert!(matches!(
            err,
            LagMatrixError::NotEnoughValues { expected: 5, found: 2 }
        ));
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let input = "1\n2\nabc\n4\n";
        let err = read_samples_from_reader(input.as_bytes(), 4).unwrap_err();
        match err {
            LagMatrixError::InvalidValue { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let input = "1\nNaN\n";
        let err = read_samples_from_reader(input.as_bytes(), 2).unwrap_err();
        assert!(matches!(err, LagMatrixError::NonFiniteValue { line: 2, .. }));

        let input = "inf\n1\n";
        let err = read_samples_from_reader(input.as_bytes(), 2).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_blank_line_rejected() {
        let input = "1\n\n2\n3\n";
        let err = read_samples_from_reader(input.as_bytes(), 3).unwrap_err();
        match err {
            LagMatrixError::InvalidValue { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            read_samples_from_reader("1\n\n2\n".as_bytes(), 2).unwrap_err().exit_code(),
            2
        );
    }

    #[test]
    fn test_multiple_fields_rejected() {
        let input = "1,2\n3\n";
        let err = read_samples_from_reader(input.as_bytes(), 2).unwrap_err();
        match err {
            LagMatrixError::InvalidValue { line, value } => {
                assert_eq!(line, 1);
                assert_eq!(value, "1,2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_reports_line() {
        let input = "1\n2\n3\n-inf\n";
        let err = read_samples_from_reader(input.as_bytes(), 4).unwrap_err();
        assert!(matches!(err, LagMatrixError::NonFiniteValue { line: 4, .. }));
    }

    #[test]
    fn test_validate_samples() {
        assert!(validate_samples(&[1.0, -2.0, 0.0]).is_ok());
        assert!(matches!(
            validate_samples(&[1.0, f32::INFINITY]),
            Err(LagMatrixError::NonFiniteValue { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..10 {
            writeln!(file, "{}", i as f32 * 0.1).unwrap();
        }

        let samples = read_samples(file.path(), 10).unwrap();
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0], 0.0);
    }
}
