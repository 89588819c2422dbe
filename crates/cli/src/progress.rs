use std::io::Write;

use tinvol::{Progress, ProgressSink};

/// Draws a single-line progress bar, redrawn in place on every report.
///
/// ```text
/// Progress: |█████████████████████---------| 70.0% Complete
/// ```
pub struct TerminalProgress<W: Write> {
    out: W,
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn render(progress: &Progress<'_>) -> String {
    let fraction = progress.fraction().clamp(0.0, 1.0);
    let filled = (progress.length as f64 * fraction) as usize;
    format!(
        "{} |{}{}| {:.1}% {}",
        progress.prefix,
        "█".repeat(filled),
        "-".repeat(progress.length - filled),
        100.0 * fraction,
        progress.suffix
    )
}

impl<W: Write> ProgressSink for TerminalProgress<W> {
    fn report(&mut self, progress: &Progress<'_>) {
        // A broken terminal must not stop the computation.
        let _ = write!(self.out, "\r{}", render(progress));
        if progress.is_complete() {
            let _ = writeln!(self.out);
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(current: usize, total: usize) -> Progress<'static> {
        Progress {
            current,
            total,
            prefix: "Progress:",
            suffix: "Complete",
            length: 10,
        }
    }

    #[test]
    fn render_partial() {
        assert_eq!("Progress: |███-------| 30.0% Complete", render(&progress(3, 10)));
    }

    #[test]
    fn render_empty_run_as_complete() {
        assert_eq!("Progress: |██████████| 100.0% Complete", render(&progress(0, 0)));
    }

    #[test]
    fn newline_after_last_step() {
        let mut bar = TerminalProgress::new(Vec::new());
        bar.report(&progress(1, 2));
        bar.report(&progress(2, 2));
        let out = String::from_utf8(bar.into_inner()).unwrap();
        assert_eq!(
            "\rProgress: |█████-----| 50.0% Complete\rProgress: |██████████| 100.0% Complete\n",
            out
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_errors_are_ignored() {
        TerminalProgress::new(Broken).report(&progress(1, 1));
    }
}
