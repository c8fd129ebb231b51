use bili_embed::plugin::{CONVERT_COMMAND, PasteOutcome};
use bili_embed::settings::{SETTING_TOGGLES, SettingKey, Settings};
use bili_embed::{CursorState, Position, WriteOptions};
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(
    name = "bili-embed",
    version,
    about = "Turn Bilibili video links in a document into embedded players."
)]
struct Cli {
    /// Settings data file.
    #[arg(long, global = true, default_value = "data.json")]
    settings: PathBuf,

    /// Log decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert the link under the cursor (or the selection) into a player.
    Convert(DocArgs),

    /// Paste clipboard text read from stdin at the cursor.
    Paste(DocArgs),

    /// Show or change settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Args)]
struct DocArgs {
    /// Document to edit.
    file: PathBuf,

    /// Cursor line, zero-based.
    #[arg(long, default_value_t = 0)]
    line: usize,

    /// Cursor column in chars, zero-based.
    #[arg(long, default_value_t = 0)]
    ch: usize,

    /// Other end of the selection as LINE:CH; the selection runs from the
    /// cursor to here.
    #[arg(long = "select-to", value_name = "LINE:CH", value_parser = parse_position)]
    select_to: Option<Position>,

    /// Write the result back to FILE instead of printing it.
    #[arg(long)]
    in_place: bool,
}

impl DocArgs {
    fn state(&self) -> CursorState {
        CursorState {
            cursor: Position::new(self.line, self.ch),
            anchor: self.select_to,
        }
    }

    fn write_options(&self) -> WriteOptions {
        WriteOptions {
            in_place: self.in_place,
        }
    }
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Print every setting with its current value.
    Show,
    /// Change one setting and save.
    Set {
        /// Setting name, e.g. enableDanmaku or enable-danmaku.
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (line, ch) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:CH, got {s:?}"))?;
    let line = line.trim().parse().map_err(|e| format!("bad line {line:?}: {e}"))?;
    let ch = ch.trim().parse().map_err(|e| format!("bad column {ch:?}: {e}"))?;
    Ok(Position::new(line, ch))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut settings = Settings::load(&cli.settings)?;

    match cli.command {
        Command::Convert(args) => {
            let (text, ids) = bili_embed::convert_file(
                &args.file,
                args.state(),
                &settings,
                &args.write_options(),
            )?;
            if ids.is_none() {
                eprintln!("{}: no video link found, document unchanged.", CONVERT_COMMAND.name);
            }
            if !args.in_place {
                print!("{}", text);
            }
        }
        Command::Paste(args) => {
            let mut clipboard = String::new();
            io::stdin().read_to_string(&mut clipboard)?;
            let clipboard = (!clipboard.is_empty()).then_some(clipboard.as_str());

            let (text, outcome) = bili_embed::paste_into_file(
                &args.file,
                args.state(),
                clipboard,
                &settings,
                &args.write_options(),
            )?;
            if let PasteOutcome::Passthrough(reason) = outcome {
                eprintln!("Pasted as plain text ({:?}).", reason);
            }
            if !args.in_place {
                print!("{}", text);
            }
        }
        Command::Settings(SettingsCommand::Show) => {
            for toggle in SETTING_TOGGLES {
                println!(
                    "{:<20} {:<5}  {}: {}",
                    toggle.key.as_str(),
                    settings.get(toggle.key),
                    toggle.name,
                    toggle.description
                );
            }
        }
        Command::Settings(SettingsCommand::Set { key, value }) => {
            let key = SettingKey::parse(&key)?;
            settings.toggle(key, value, &cli.settings)?;
            println!("{} = {}", key.as_str(), value);
        }
    }

    Ok(())
}
