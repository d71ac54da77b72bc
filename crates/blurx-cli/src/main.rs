use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use blurx_core::{detect_faces, list_image_paths, ImageDetections, ImageIter, RustfaceDetector};
use clap::{ArgAction, Parser, Subcommand};

mod config;

use config::{load_detector_config, Overrides};

#[derive(Parser)]
#[command(name = "blurx", version, about = "Find faces in image files and directories")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the image files found under a path, one per line.
    List {
        /// Image file or directory to search recursively.
        path: PathBuf,
    },
    /// Detect faces and print one line per image.
    Detect {
        /// A single file or directory, or several image files taken in order.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// SeetaFace model file, e.g. seeta_fd_frontal_v1.0.bin.
        #[arg(long)]
        model: PathBuf,
        /// JSON file with detector settings.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Smallest face edge to search for, in pixels (>= 20).
        #[arg(long)]
        min_face_size: Option<u32>,
        /// Minimum score for a detection to be reported.
        #[arg(long)]
        score_thresh: Option<f64>,
        /// Emit one JSON object per image instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// One input is resolved as a root; several are used as an explicit list.
fn open_inputs(inputs: &[PathBuf]) -> Result<ImageIter> {
    match inputs {
        [root] => ImageIter::from_root(root)
            .with_context(|| format!("failed to list images in {}", root.display())),
        paths => Ok(ImageIter::from_paths(paths.iter().cloned())),
    }
}

fn write_text(out: &mut impl Write, detections: &ImageDetections) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} face(s)",
        detections.path.display(),
        detections.faces.len()
    )?;
    for face in &detections.faces {
        let b = &face.bbox;
        writeln!(
            out,
            "  bbox=({}, {}, {}, {}) score={:.3}",
            b.x1, b.y1, b.x2, b.y2, b.score
        )?;
    }
    Ok(())
}

fn cmd_list(path: PathBuf) -> Result<()> {
    let paths = list_image_paths(&path)
        .with_context(|| format!("failed to list images in {}", path.display()))?;
    let mut out = io::stdout().lock();
    for path in paths {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

fn cmd_detect(
    inputs: Vec<PathBuf>,
    model: PathBuf,
    config: Option<PathBuf>,
    overrides: Overrides,
    json: bool,
) -> Result<()> {
    let config = load_detector_config(config.as_deref(), &overrides)?;
    let detector = RustfaceDetector::from_model_path(&model, config)?;
    let images = open_inputs(&inputs)?;
    log::info!("Processing {} image(s)", images.remaining());

    let mut out = io::stdout().lock();
    let mut total_faces = 0;
    for result in detect_faces(images, &detector) {
        let detections = result?.clamped();
        total_faces += detections.faces.len();
        if json {
            serde_json::to_writer(&mut out, &detections)?;
            writeln!(out)?;
        } else {
            write_text(&mut out, &detections)?;
        }
    }
    log::info!("Done, {} face(s) in total", total_faces);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List { path } => cmd_list(path),
        Command::Detect {
            inputs,
            model,
            config,
            min_face_size,
            score_thresh,
            json,
        } => cmd_detect(
            inputs,
            model,
            config,
            Overrides {
                min_face_size,
                score_thresh,
            },
            json,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blurx_core::{BoundingBox, DetectedFace, LoadError};

    #[test]
    fn test_parse_detect_arguments() {
        let cli = Cli::try_parse_from([
            "blurx",
            "-vv",
            "detect",
            "photos",
            "--model",
            "seeta.bin",
            "--min-face-size",
            "40",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Detect {
                inputs,
                model,
                min_face_size,
                score_thresh,
                json,
                ..
            } => {
                assert_eq!(inputs, vec![PathBuf::from("photos")]);
                assert_eq!(model, PathBuf::from("seeta.bin"));
                assert_eq!(min_face_size, Some(40));
                assert_eq!(score_thresh, None);
                assert!(json);
            }
            Command::List { .. } => panic!("expected detect"),
        }
    }

    #[test]
    fn test_detect_requires_model_and_input() {
        assert!(Cli::try_parse_from(["blurx", "detect", "photos"]).is_err());
        assert!(Cli::try_parse_from(["blurx", "detect", "--model", "m.bin"]).is_err());
    }

    #[test]
    fn test_single_input_is_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_inputs(&[dir.path().to_path_buf()]).unwrap_err();
        let load = err.downcast_ref::<LoadError>().unwrap();
        assert!(matches!(load, LoadError::NoImages(_)));
    }

    #[test]
    fn test_several_inputs_are_taken_verbatim() {
        let images = open_inputs(&[PathBuf::from("b.png"), PathBuf::from("a.notes")]).unwrap();
        assert_eq!(images.remaining(), 2);
    }

    #[test]
    fn test_text_output_format() {
        let detections = ImageDetections {
            path: PathBuf::from("group.jpg"),
            width: 100,
            height: 100,
            faces: vec![DetectedFace {
                bbox: BoundingBox {
                    x1: 10.0,
                    y1: 20.0,
                    x2: 30.0,
                    y2: 40.0,
                    score: 5.25,
                },
                keypoints: None,
            }],
        };
        let mut out = Vec::new();
        write_text(&mut out, &detections).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "group.jpg: 1 face(s)\n  bbox=(10, 20, 30, 40) score=5.250\n"
        );
    }
}
