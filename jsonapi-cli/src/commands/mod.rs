pub mod inspect;
pub mod normalize;
pub mod verify;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};

/// Read a file, or stdin when `input` is "-"
pub(crate) fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Write to a file, or stdout when `output` is "-"
pub(crate) fn write_output(output: &str, data: &[u8]) -> Result<()> {
    if output == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data).context("Failed to write stdout")?;
        stdout.write_all(b"\n").context("Failed to write stdout")?;
        Ok(())
    } else {
        fs::write(output, data).with_context(|| format!("Failed to write output file: {}", output))
    }
}
