//! Line-driven control loop.
//!
//! Each input line is one control event: `roll -20`, `speed 60`. `show`
//! prints the controls and the latest flight summaries; `quit` (or end of
//! input) leaves the loop. A failing recompute is reported and the previous
//! plots stay as they were.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

use disc_calc::{Control, ConfigError, Figure, UpdateController};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(Control, f64),
    Show,
    Quit,
}

/// Parse one input line; blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ConfigError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let (Some(head), tail) = (parts.next(), parts.next()) else {
        return Ok(None);
    };
    let trailing = parts.next().is_some();
    match (head.to_ascii_lowercase().as_str(), tail) {
        ("quit" | "exit", None) => Ok(Some(Command::Quit)),
        ("show", None) => Ok(Some(Command::Show)),
        (_, Some(value)) if !trailing => {
            let control = head.parse::<Control>()?;
            let value = value
                .parse::<f64>()
                .map_err(|_| ConfigError::MalformedAssignment(line.to_string()))?;
            Ok(Some(Command::Set(control, value)))
        }
        _ => Err(ConfigError::MalformedAssignment(line.to_string())),
    }
}

/// Print the current controls and summaries.
pub fn show<W: Write>(controller: &UpdateController<Figure>, out: &mut W) -> Result<()> {
    let units = controller.units();
    for (control, value) in controller.controls().values() {
        writeln!(out, "{:>6} = {value:.2} {}", control.name(), control.unit(units))?;
    }
    for summary in controller.summaries() {
        writeln!(out, "[{}]", summary.disc)?;
        for (name, value) in summary.rows(units) {
            writeln!(out, "  {name:<15} {value}")?;
        }
    }
    Ok(())
}

/// Feed control events from `input` into the controller until `quit`.
///
/// `on_update` runs after every successful recompute.
pub fn run<R, W, F>(
    controller: &mut UpdateController<Figure>,
    input: R,
    out: &mut W,
    mut on_update: F,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&UpdateController<Figure>) -> Result<()>,
{
    writeln!(out, "controls: speed roll pitch nose mass spin; `show`, `quit`")?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Show => show(controller, out)?,
            Command::Set(control, value) => match controller.on_control_changed(control, value) {
                Ok(()) => {
                    on_update(controller)?;
                    let held = controller.controls().get(control);
                    writeln!(out, "{} = {held:.2}", control.name())?;
                }
                Err(err) => {
                    warn!(error = %err, "recompute failed, keeping previous plots");
                    writeln!(out, "error: {err}")?;
                }
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    use disc_calc::{
        BundleBuilder, DiscDirectory, DiscEngine, DiscId, LaunchParameters, TrajectoryProvider,
        UnitSystem,
    };

    fn controller() -> UpdateController<Figure> {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("discs");
        let provider = TrajectoryProvider::new(
            Box::new(DiscDirectory::new(dir)),
            Box::new(DiscEngine::default()),
        );
        UpdateController::new(
            vec![DiscId::new("putter_a")],
            UnitSystem::Metric,
            LaunchParameters::default(),
            BundleBuilder::new(provider),
            Figure::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("  ").unwrap(), None);
        assert_eq!(parse_line("# note").unwrap(), None);
        assert_eq!(parse_line("QUIT").unwrap(), Some(Command::Quit));
        assert_eq!(parse_line("show").unwrap(), Some(Command::Show));
        assert_eq!(
            parse_line("roll -20").unwrap(),
            Some(Command::Set(Control::Roll, -20.0))
        );
        assert!(matches!(parse_line("roll"), Err(ConfigError::MalformedAssignment(_))));
        assert!(matches!(parse_line("roll x"), Err(ConfigError::MalformedAssignment(_))));
        assert!(matches!(parse_line("roll 1 2"), Err(ConfigError::MalformedAssignment(_))));
        assert!(matches!(parse_line("wind 3"), Err(ConfigError::UnknownControl(_))));
    }

    #[test]
    fn test_each_event_is_one_recompute() {
        let mut controller = controller();
        let input = Cursor::new("speed 30\nbogus 1\n\nmass 500\nshow\nquit\npitch 10\n");
        let mut out = Vec::new();
        let mut updates = 0;
        run(&mut controller, input, &mut out, |_| {
            updates += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(updates, 2);
        assert_eq!(controller.recompute_count(), 3);
        assert_eq!(controller.controls().get(Control::Mass), 200.0);
        assert_eq!(controller.launch().pitch, 5.0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("error: unknown control `bogus`"));
        assert!(text.contains("mass = 200.00"));
        assert!(text.contains("[putter_a]"));
    }
}
