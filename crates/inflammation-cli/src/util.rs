use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;

/// Saves `value` as pretty JSON to `output_path`, or to stdout if `None`.
pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize + ?Sized,
{
    let Some(path) = output_path else {
        return write_json(io::stdout().lock(), value).context("Failed to write result to stdout");
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write result to {}", path.display()))?;
    eprintln!("Result saved to {}", path.display());
    Ok(())
}

/// Writes `value` as pretty JSON followed by a newline, then flushes.
pub fn write_json<W, T>(mut writer: W, value: &T) -> io::Result<()>
where
    W: Write,
    T: serde::Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_write_json_is_pretty_with_trailing_newline() {
        let value = BTreeMap::from([("series", vec![0.0, 1.5])]);
        let mut buf = Vec::new();
        write_json(&mut buf, &value).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\n  \"series\": [\n    0.0,\n    1.5\n  ]\n}\n");
    }

    #[test]
    fn test_save_json_to_missing_directory_fails() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-dir/result.json");
        let err = save_json(&[1.0], Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
