mod args;

use args::Cli;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};

fn main() {
    // Configure logging
    env_logger::init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(err) = run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock()) {
        log::error!("Failed to write output: {err}");
    }
}

/// Parse `args`, convert, and write the art to `out`
///
/// Every failure (bad flags, unknown scale, unloadable image) writes the
/// message to `err` and the usage text to `out`; nothing else reaches
/// `out`, so there is never partial art.
fn run<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> io::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_err) => {
            // help is not an error, it goes to stdout as is
            if !parse_err.use_stderr() {
                write!(out, "{}", parse_err.render())?;
                return Ok(());
            }
            log::debug!("Rejected arguments: {}", parse_err.kind());
            write!(err, "{}", parse_err.render())?;
            return write_usage(out);
        }
    };

    match cli
        .config()
        .and_then(|config| ascii_term::convert_path(&cli.path, &config))
    {
        Ok(ascii) => writeln!(out, "{ascii}"),
        Err(convert_err) => {
            log::debug!("Conversion failed: {convert_err:?}");
            writeln!(err, "{convert_err}")?;
            write_usage(out)
        }
    }
}

/// Write the full help text
fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", Cli::command().render_help())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn run_args(args: &[&str]) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv = std::iter::once("ascii-art").chain(args.iter().copied());
        run(argv, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    fn assert_usage_only(out: &str) {
        assert!(out.contains("Usage:"), "no usage in {out:?}");
        assert!(out.contains("--path"));
        assert!(!out.contains('@'));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_converts_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("white.png");
        RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();

        let (out, err) = run_args(&[
            "--path",
            path.to_str().unwrap(),
            "--width",
            "4",
            "--scale",
            "ten",
        ]);
        assert_eq!(out, "@@@@\n@@@@\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_missing_file_prints_error_and_usage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");

        let (out, err) = run_args(&["--path", path.to_str().unwrap()]);
        assert_usage_only(&out);
        assert!(err.contains("failed to load image"));
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn test_unknown_scale_prints_error_and_usage() {
        let (out, err) = run_args(&["--path", "cat.png", "--scale", "PURPLE"]);
        assert_usage_only(&out);
        assert!(err.contains("unknown scale 'PURPLE'"));
    }

    #[test]
    fn test_unknown_flag_prints_error_and_usage() {
        let (out, err) = run_args(&["--path", "cat.png", "--bogus"]);
        assert_usage_only(&out);
        assert!(err.contains("--bogus"));
    }

    #[test]
    fn test_missing_path_prints_error_and_usage() {
        let (out, err) = run_args(&["--width", "10"]);
        assert_usage_only(&out);
        assert!(err.contains("--path"));
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (out, err) = run_args(&["--help"]);
        assert!(out.contains("--path"));
        assert!(out.contains("--invert"));
        assert!(err.is_empty());
    }
}
