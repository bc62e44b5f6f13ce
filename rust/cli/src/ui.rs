//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display parameter ignored warning
pub fn warn_parameter_unused(
    err: &mut dyn Write,
    param_name: &str,
    reason: &str,
) -> std::io::Result<()> {
    writeln!(err, "WARNING: Parameter --{} is ignored: {}", param_name, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_prefixed() {
        let mut err = Vec::new();
        write_error(&mut err, "bad pack").unwrap();
        warn_parameter_unused(&mut err, "seed", "pack is not shuffled at random").unwrap();
        let text = String::from_utf8(err).unwrap();
        assert_eq!(
            text,
            "Error: bad pack\nWARNING: Parameter --seed is ignored: pack is not shuffled at random\n"
        );
    }
}
