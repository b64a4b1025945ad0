// Flickboard CLI
// Inspect layouts and simulate gestures against an in-memory text field

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use flickboard_core::config::{self, builtin_layout_names};
use flickboard_core::{
    Direction, EditorInfo, InputSession, Key, Layer, Layout, TextBuffer,
};

/// Width of one grid column when printing a layer
const CELL_WIDTH: usize = 7;

/// Directional soft-keyboard layout tool
#[derive(Parser, Debug)]
#[command(name = "flickboard")]
#[command(author = "flickboard contributors")]
#[command(version)]
#[command(about = "Inspect flick keyboard layouts and simulate gestures", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in layouts
    List,

    /// Validate a layout file
    Check {
        /// TOML layout file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the effective layer of a layout
    Show {
        #[command(flatten)]
        source: LayoutSource,

        /// Also list every binding of every key
        #[arg(short, long)]
        detail: bool,

        /// Label to draw on Enter keys, as a host editor would supply it
        #[arg(long, value_name = "LABEL")]
        enter_label: Option<String>,
    },

    /// Simulate gestures and print the resulting text
    Type {
        #[command(flatten)]
        source: LayoutSource,

        /// Initial text; `|` marks the caret, two marks a selection
        #[arg(short, long, default_value = "")]
        text: String,

        /// Treat the editor as single-line: Enter runs the editor action
        #[arg(long)]
        no_newlines: bool,

        /// Gestures as ROW,COLUMN,DIRECTION (e.g. 1,1,top_left)
        #[arg(value_name = "GESTURE")]
        gestures: Vec<String>,
    },
}

/// Where to take the layout from
#[derive(Args, Debug)]
struct LayoutSource {
    /// Built-in layout name
    #[arg(short, long, conflicts_with = "file")]
    layout: Option<String>,

    /// TOML layout file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

impl LayoutSource {
    fn load(&self) -> Result<Layout, config::ConfigError> {
        match (&self.layout, &self.file) {
            (_, Some(file)) => config::layout_from_toml_path(file),
            (Some(name), None) => config::builtin_layout(name),
            (None, None) => config::load_default(),
        }
    }
}

/// One parsed gesture
#[derive(Debug, Clone, Copy)]
struct Gesture {
    row: usize,
    column: usize,
    direction: Direction,
}

fn parse_gesture(input: &str) -> Result<Gesture, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [row, column, direction] = parts.as_slice() else {
        return Err(format!("expected ROW,COLUMN,DIRECTION, got '{}'", input));
    };
    let row = row
        .parse::<usize>()
        .map_err(|_| format!("invalid row '{}' in '{}'", row, input))?;
    let column = column
        .parse::<usize>()
        .map_err(|_| format!("invalid column '{}' in '{}'", column, input))?;
    let direction = Direction::parse(direction)
        .ok_or_else(|| format!("invalid direction '{}' in '{}'", direction, input))?;
    Ok(Gesture {
        row,
        column,
        direction,
    })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn list() -> Result<(), Box<dyn std::error::Error>> {
    for name in builtin_layout_names() {
        if name == config::DEFAULT_LAYOUT {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
    if let Some(path) = config::default_layout_path() {
        println!("user layout path: {}", path.display());
    }
    Ok(())
}

fn check(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let layout = config::layout_from_toml_path(file)?;
    let effective = layout.effective_layer();
    println!("Layout '{}' is valid", layout.name());
    println!(
        "  main: {} rows, shift: {}, numeric: {}, control: {}",
        layout.main_layer().row_count(),
        yes_no(layout.shift_layer().is_some()),
        yes_no(layout.numeric_layer().is_some()),
        yes_no(layout.control_layer().is_some()),
    );
    println!(
        "  effective layer: {} rows x {} columns",
        effective.row_count(),
        effective.column_count()
    );
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn key_label(key: &Key, enter_label: Option<&str>) -> String {
    match key.action(Direction::Center) {
        Some(action) => {
            let label = action.label(enter_label);
            if label.trim().is_empty() {
                "␣".to_string()
            } else {
                label
            }
        }
        None if key.is_empty() => String::new(),
        None => "·".to_string(),
    }
}

/// Horizontal rule for `row` with a `+` at every key boundary
fn row_border(layer: &Layer, row: usize) -> String {
    let width = layer.column_count() * CELL_WIDTH + 1;
    let mut border = vec!['-'; width];
    let row_end: usize = layer
        .key_rows()
        .get(row)
        .map(|keys| keys.iter().map(Key::colspan).sum())
        .unwrap_or(0);
    let boundaries = layer.column_offsets(row).into_iter().chain([row_end]);
    for column in boundaries {
        if let Some(slot) = border.get_mut(column * CELL_WIDTH) {
            *slot = '+';
        }
    }
    border.into_iter().collect()
}

fn print_layer(layer: &Layer, enter_label: Option<&str>) {
    for (index, row) in layer.key_rows().iter().enumerate() {
        println!("{}", row_border(layer, index));
        let mut line = String::from("|");
        for key in row {
            let cell = key.colspan() * CELL_WIDTH - 1;
            let label = key_label(key, enter_label);
            let flicks = key.actions().len() - usize::from(key.action(Direction::Center).is_some());
            let text = if flicks > 0 {
                format!("{} +{}", label, flicks)
            } else {
                label
            };
            line.push_str(&format!("{:^cell$}|", text, cell = cell));
        }
        println!("{}", line);
    }
    if let Some(last) = layer.row_count().checked_sub(1) {
        println!("{}", row_border(layer, last));
    }
}

fn print_detail(layer: &Layer, enter_label: Option<&str>) {
    for (row, keys) in layer.key_rows().iter().enumerate() {
        for (column, key) in keys.iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            let bindings: Vec<String> = Direction::all()
                .filter_map(|direction| {
                    key.action(direction)
                        .map(|action| format!("{}={}", direction, action.label(enter_label)))
                })
                .collect();
            println!("{},{}: {}", row, column, bindings.join(" "));
        }
    }
}

fn show(
    source: &LayoutSource,
    detail: bool,
    enter_label: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = source.load()?;
    let layer = layout.effective_layer();
    println!("{}", layout.name());
    print_layer(&layer, enter_label);
    if detail {
        print_detail(&layer, enter_label);
    }
    Ok(())
}

fn simulate(
    source: &LayoutSource,
    text: &str,
    no_newlines: bool,
    gestures: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let gestures = gestures
        .iter()
        .map(|input| parse_gesture(input))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = InputSession::new(source.load()?);
    if no_newlines {
        session.set_editor_info(EditorInfo::single_line(None));
    } else {
        session.set_editor_info(EditorInfo::multiline());
    }
    let layer = session.effective_layer();
    let mut buffer = TextBuffer::parse_marked(text).with_listener(session.cursor());

    for gesture in &gestures {
        match session.on_gesture(
            &layer,
            gesture.row,
            gesture.column,
            gesture.direction,
            &mut buffer,
        ) {
            Some(op) => log::info!(
                "{},{} {}: {} -> {}",
                gesture.row,
                gesture.column,
                gesture.direction,
                op,
                buffer.marked()
            ),
            None => log::warn!(
                "{},{} {}: nothing bound",
                gesture.row,
                gesture.column,
                gesture.direction
            ),
        }
    }

    println!("{}", buffer.marked());
    if buffer.editor_action_count() > 0 {
        println!("(editor action ran {} time(s))", buffer.editor_action_count());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::List => list(),
        Command::Check { file } => check(file),
        Command::Show {
            source,
            detail,
            enter_label,
        } => show(source, *detail, enter_label.as_deref()),
        Command::Type {
            source,
            text,
            no_newlines,
            gestures,
        } => simulate(source, text, *no_newlines, gestures),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gesture() {
        let gesture = parse_gesture("1, 2, top-left").unwrap();
        assert_eq!((gesture.row, gesture.column), (1, 2));
        assert_eq!(gesture.direction, Direction::TopLeft);
        assert!(parse_gesture("1,2").is_err());
        assert!(parse_gesture("a,2,center").is_err());
        assert!(parse_gesture("1,2,diagonal").is_err());
    }

    #[test]
    fn test_row_border_marks_key_boundaries() {
        let layer = Layer::new(vec![
            vec![
                Key::tap(flickboard_core::Action::text("a")).with_colspan(2),
                Key::empty(),
            ],
            vec![Key::empty()],
        ]);
        let wide = format!("+{}+{}+", "-".repeat(13), "-".repeat(6));
        assert_eq!(row_border(&layer, 0), wide);
        let short = format!("+{}+{}", "-".repeat(6), "-".repeat(14));
        assert_eq!(row_border(&layer, 1), short);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["flickboard", "-v", "type", "-l", "numpad", "0,0,center"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Type { ref gestures, .. } if gestures.len() == 1));
    }
}
