use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use lattice::{
    DragGesture, DragMode, EasingPreset, LayerSpan, ProjectId, ProjectStore, SnapTargets,
    WorkspaceSettings, classify_import, easing_handles,
};

#[derive(Parser, Debug)]
#[command(name = "lattice", version)]
struct Cli {
    /// Workspace settings JSON (snap tolerances, grid, zoom).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every easing preset with its bezier handles.
    Presets,
    /// Print the bezier handles of one easing preset as JSON.
    Easing {
        /// Preset name, e.g. `easeInOutCubic`.
        name: String,
    },
    /// Compute a layer's timing window after a drag.
    Drag(DragArgs),
    /// Classify a file against the import allow-list.
    ImportKind {
        path: PathBuf,
    },
    /// Manage saved projects.
    Projects {
        /// Project directory.
        #[arg(long, default_value = "projects")]
        dir: PathBuf,

        #[command(subcommand)]
        cmd: ProjectsCommand,
    },
}

#[derive(Parser, Debug)]
struct DragArgs {
    #[arg(long, value_enum, default_value_t = ModeChoice::Move)]
    mode: ModeChoice,

    /// Layer in-point before the drag.
    #[arg(long = "in")]
    in_point: i64,

    /// Layer out-point before the drag.
    #[arg(long = "out")]
    out_point: i64,

    /// Composition length in frames.
    #[arg(long)]
    frames: i64,

    /// Pointer travel in pixels.
    #[arg(long, allow_hyphen_values = true)]
    dx: f64,

    /// Zoom; defaults to the settings value.
    #[arg(long)]
    pixels_per_frame: Option<f64>,

    /// Snap targets (comma separated frames). Snapping is off when omitted.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    snap: Option<Vec<i64>>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Move,
    ResizeLeft,
    ResizeRight,
}

impl From<ModeChoice> for DragMode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Move => DragMode::Move,
            ModeChoice::ResizeLeft => DragMode::ResizeLeft,
            ModeChoice::ResizeRight => DragMode::ResizeRight,
        }
    }
}

#[derive(Subcommand, Debug)]
enum ProjectsCommand {
    /// List saved projects, newest first.
    List,
    /// Delete a saved project.
    Delete { id: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => WorkspaceSettings::from_path(path)
            .with_context(|| format!("load settings {}", path.display()))?,
        None => WorkspaceSettings::default(),
    };

    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Easing { name } => cmd_easing(&name),
        Command::Drag(args) => cmd_drag(args, &settings),
        Command::ImportKind { path } => {
            let kind = classify_import(&path)?;
            println!("{}", serde_json::to_string(&kind)?);
            Ok(())
        }
        Command::Projects { dir, cmd } => cmd_projects(ProjectStore::new(dir), cmd),
    }
}

fn cmd_presets() -> anyhow::Result<()> {
    for preset in EasingPreset::ALL {
        let handles = serde_json::to_string(&preset.handles())?;
        println!("{}\t{handles}", preset.name());
    }
    Ok(())
}

fn cmd_easing(name: &str) -> anyhow::Result<()> {
    let handles =
        easing_handles(name).with_context(|| format!("unknown easing preset {name:?}"))?;
    println!("{}", serde_json::to_string(&handles)?);
    Ok(())
}

fn cmd_drag(args: DragArgs, settings: &WorkspaceSettings) -> anyhow::Result<()> {
    let span = LayerSpan::new(args.in_point, args.out_point)?;
    let ppf = args.pixels_per_frame.unwrap_or(settings.pixels_per_frame);
    let gesture = DragGesture::begin(args.mode.into(), 0.0, span, ppf, args.frames)
        .context("start drag")?
        .with_tolerance(settings.timeline_snap_tolerance_frames);
    let targets = args.snap.map(SnapTargets::from_frames);
    let result = gesture.update(args.dx, targets.as_ref());
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn cmd_projects(store: ProjectStore, cmd: ProjectsCommand) -> anyhow::Result<()> {
    match cmd {
        ProjectsCommand::List => {
            for p in store.list()? {
                println!("{}", serde_json::to_string(&p)?);
            }
        }
        ProjectsCommand::Delete { id } => {
            store
                .delete(&ProjectId(id.clone()))
                .with_context(|| format!("delete project {id}"))?;
        }
    }
    Ok(())
}
