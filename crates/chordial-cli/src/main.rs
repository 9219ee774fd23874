use chordial::{
    CategoryScale, ChordLayout, LayoutEngine, RenderOptions, render_diagram, validate_value,
};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Diagram(chordial::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Diagram(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<chordial::Error> for CliError {
    fn from(value: chordial::Error) -> Self {
        Self::Diagram(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    width: f64,
    height: f64,
    labels: Option<bool>,
    legend: Option<bool>,
    diagram_id: Option<String>,
}

fn usage() -> &'static str {
    "chordial-cli\n\
\n\
USAGE:\n\
  chordial-cli [--width <px>] [--height <px>] [--labels on|off] [--legend on|off] [--id <diagram-id>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the JSON dataset is read from stdin.\n\
  - The dataset shape is { matrix: number[][], names: string[], options?: { showLabels?, showLegend? } }.\n\
  - --labels/--legend override the dataset's own display options.\n\
  - SVG is printed to stdout by default; use --out to write a file.\n\
"
}

fn parse_on_off(v: &str) -> Result<bool, CliError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(CliError::Usage(usage())),
    }
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        width: 800.0,
        height: 600.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--labels" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.labels = Some(parse_on_off(v)?);
            }
            "--legend" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.legend = Some(parse_on_off(v)?);
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
            _ => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(a.clone());
            }
        }
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let data = validate_value(&value)?;

    let layout = ChordLayout::new().layout(&data.matrix)?;
    let options = RenderOptions {
        width: args.width,
        height: args.height,
        show_labels: args.labels.unwrap_or(data.options.show_labels),
        show_legend: args.legend.unwrap_or(data.options.show_legend),
        diagram_id: args
            .diagram_id
            .unwrap_or_else(|| "chordial".to_string()),
    };
    let mut colors = CategoryScale::default();
    let scene = render_diagram(&layout, &data.names, &options, &mut colors)
        .map_err(|err| chordial::Error::render(err.to_string()))?;

    match args.out.as_deref() {
        None | Some("-") => {
            println!("{}", scene.svg);
        }
        Some(path) => {
            std::fs::write(path, scene.svg)?;
        }
    }
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
