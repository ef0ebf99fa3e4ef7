use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use auto_version::cli::{run_release, ReleaseArgs};
use auto_version::config;
use auto_version::domain::BumpKind;
use auto_version::git::SystemGit;
use auto_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "auto-version",
    version,
    about = "Bump the project version, commit, tag and push the release"
)]
struct Args {
    #[arg(help = "Version component to bump: major, minor or patch [default: patch]")]
    bump: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Directory holding the manifest [default: current directory]")]
    workdir: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Argument errors exit 1 like every other usage error; help and version still exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.exit_code() == 0 => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            ui::display_error(rendered.trim_start_matches("error: ").trim_end());
            std::process::exit(1);
        }
    };

    // Reject a bad bump type before anything is read or written
    let bump = match args.bump.as_deref() {
        None => BumpKind::Patch,
        Some(value) => match value.parse::<BumpKind>() {
            Ok(bump) => bump,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
    };

    let workdir = match args.workdir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let config = match config::load_config(args.config.as_deref(), &workdir) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let release_args = ReleaseArgs {
        bump,
        workdir: workdir.clone(),
        dry_run: args.dry_run,
    };
    let git = SystemGit::new(&workdir);

    match run_release(&release_args, &config, &git, chrono::Utc::now()) {
        Ok(outcome) if outcome.published => {
            ui::display_release_complete(&outcome.version.to_string(), &outcome.tag);
        }
        Ok(_) => {}
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
