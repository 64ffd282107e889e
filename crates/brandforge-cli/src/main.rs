use brandforge::render::export::export_bundle;
use brandforge::render::raster::{RasterOptions, svg_to_jpeg, svg_to_png};
use brandforge::render::{SvgOptions, compose_scene, scene_to_svg};
use brandforge::route::RouteOptions;
use brandforge::{BrandIdentity, StyleToken, assign_layout, parse_blueprint, route};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Blueprint(brandforge::Error),
    Raster(brandforge::render::raster::RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Blueprint(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<brandforge::Error> for CliError {
    fn from(value: brandforge::Error) -> Self {
        Self::Blueprint(value)
    }
}

impl From<brandforge::render::raster::RasterError> for CliError {
    fn from(value: brandforge::render::raster::RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Layout,
    Render,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    style: Option<String>,
    brand_name: Option<String>,
    jitter_seed: Option<u64>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    with_manifest: bool,
    out: Option<String>,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    style: &'a str,
    nodes: &'a [brandforge::BlueprintNode],
    connectors: &'a [brandforge::ConnectorPath],
}

fn usage() -> &'static str {
    "brandforge-cli\n\
\n\
USAGE:\n\
  brandforge-cli [parse] [--pretty] [<path>|-]\n\
  brandforge-cli layout [--pretty] [--style <name>] [--jitter-seed <n>] [<path>|-]\n\
  brandforge-cli render [--format svg|png|jpg] [--style <name>] [--scale <n>] [--background <css-color>] [--brand-name <name>] [--jitter-seed <n>] [--manifest] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a blueprint JSON document ({\"nodes\": [...]}) as returned by the\n\
    generation provider; code-fence wrappers are tolerated.\n\
  - parse prints the normalized blueprint JSON.\n\
  - layout prints positioned nodes plus routed connectors.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG output defaults to writing next to the input file (or ./out.png\n\
    and ./out.jpg for stdin).\n\
  - --manifest also writes an export manifest JSON next to the raster output.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Parse,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--manifest" => args.with_manifest = true,
            "--style" => {
                let Some(style) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.style = Some(style.clone());
            }
            "--brand-name" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.brand_name = Some(name.clone());
            }
            "--jitter-seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.jitter_seed =
                    Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
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

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let blueprint = parse_blueprint(&text)?;

    let style = StyleToken::from_name(args.style.as_deref().unwrap_or_default());
    let route_options = RouteOptions {
        jitter_seed: args.jitter_seed,
        ..RouteOptions::default()
    };

    match args.command {
        Command::Parse => write_json(&blueprint, args.pretty),
        Command::Layout => {
            let nodes = assign_layout(&blueprint.nodes, style);
            let connectors = route(&nodes, style, &route_options);
            write_json(
                &LayoutOut {
                    style: style.name(),
                    nodes: &nodes,
                    connectors: &connectors,
                },
                args.pretty,
            )
        }
        Command::Render => {
            let brand = args.brand_name.as_ref().map(|name| BrandIdentity {
                name: name.clone(),
                ..BrandIdentity::default()
            });
            let scene = compose_scene(&blueprint, style, brand.as_ref(), &route_options);
            let svg_options = SvgOptions::default();
            let raster_options = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..RasterOptions::default()
            };

            match args.render_format {
                RenderFormat::Svg => {
                    let svg = scene_to_svg(&scene, &svg_options);
                    match args.out.as_deref() {
                        None => print!("{svg}"),
                        Some(path) => std::fs::write(path, svg)?,
                    }
                    Ok(())
                }
                RenderFormat::Png => {
                    let out_path = args
                        .out
                        .clone()
                        .map(std::path::PathBuf::from)
                        .unwrap_or_else(|| default_raster_out_path(args.input.as_deref(), "png"));
                    if args.with_manifest {
                        let bundle = export_bundle(
                            &scene,
                            &svg_options,
                            &raster_options,
                            brand.as_ref(),
                        )?;
                        std::fs::write(&out_path, &bundle.png)?;
                        std::fs::write(out_path.with_extension("manifest.json"), &bundle.manifest_json)?;
                    } else {
                        let svg = scene_to_svg(&scene, &svg_options);
                        std::fs::write(&out_path, svg_to_png(&svg, &raster_options)?)?;
                    }
                    eprintln!("wrote {}", out_path.display());
                    Ok(())
                }
                RenderFormat::Jpeg => {
                    let out_path = args
                        .out
                        .clone()
                        .map(std::path::PathBuf::from)
                        .unwrap_or_else(|| default_raster_out_path(args.input.as_deref(), "jpg"));
                    let svg = scene_to_svg(&scene, &svg_options);
                    std::fs::write(&out_path, svg_to_jpeg(&svg, &raster_options)?)?;
                    eprintln!("wrote {}", out_path.display());
                    Ok(())
                }
            }
        }
    }
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

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
