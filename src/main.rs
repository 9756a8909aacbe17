mod render;

use muse::config::MuseConfig;
use muse::pagination;
use muse::remote::IdeaFeed;
use muse::remote::ideas::IdeasClient;
use uuid::Uuid;

enum Command {
    List { page: u64 },
    Add { content: String },
    Edit { id: Uuid, content: String },
    Delete { id: Uuid, assume_yes: bool },
    Help,
}

const USAGE: &str = "\
muse — a personal idea notebook

Usage:
  muse [list [PAGE]]        Show a page of ideas (newest first)
  muse add TEXT...          Capture a new idea
  muse edit ID TEXT...      Replace an idea's content
  muse delete ID [--yes]    Delete an idea (asks for confirmation)
  muse help                 Show this text

The data service is configured in the config file or via the
MUSE_SERVICE_URL and MUSE_SERVICE_KEY environment variables.";

fn parse_command(args: &[String]) -> Result<Command, String> {
    let mut args = args.iter();
    match args.next().map(String::as_str) {
        None => Ok(Command::List { page: 1 }),
        Some("list") => {
            let page = match args.next() {
                Some(raw) => raw
                    .parse::<u64>()
                    .ok()
                    .filter(|p| *p >= 1)
                    .ok_or_else(|| format!("'{}' is not a valid page number", raw))?,
                None => 1,
            };
            Ok(Command::List { page })
        }
        Some("add") => {
            let content = args.cloned().collect::<Vec<_>>().join(" ");
            if content.is_empty() {
                return Err("add needs the idea text".to_string());
            }
            Ok(Command::Add { content })
        }
        Some("edit") => {
            let id = parse_id(args.next())?;
            let content = args.cloned().collect::<Vec<_>>().join(" ");
            if content.is_empty() {
                return Err("edit needs the new idea text".to_string());
            }
            Ok(Command::Edit { id, content })
        }
        Some("delete") => {
            let rest: Vec<&String> = args.collect();
            let assume_yes = rest.iter().any(|a| a.as_str() == "--yes" || a.as_str() == "-y");
            let id = parse_id(rest.iter().find(|a| !a.starts_with('-')).copied())?;
            Ok(Command::Delete { id, assume_yes })
        }
        Some("help") | Some("--help") | Some("-h") => Ok(Command::Help),
        Some(other) => Err(format!("unknown command '{}'", other)),
    }
}

fn parse_id(raw: Option<&String>) -> Result<Uuid, String> {
    let raw = raw.ok_or("expected an idea id")?;
    Uuid::parse_str(raw).map_err(|_| format!("'{}' is not a valid idea id", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MuseConfig::load();

    // Set up logging to the systemd user journal (`journalctl --user -t muse -f`).
    // Wrapper filters: muse crate at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                if metadata.target().starts_with("muse") {
                    let max = if muse::debug_logging() {
                        log::LevelFilter::Debug
                    } else {
                        log::LevelFilter::Info
                    };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()
            .unwrap()
            .with_syslog_identifier("muse".to_string());

        muse::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).unwrap();
        // Global max must be Debug so muse debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    let cli_args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_command(&cli_args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
    };

    if let Command::Help = command {
        println!("{}", USAGE);
        return Ok(());
    }

    if !config.is_configured() {
        eprintln!(
            "No data service configured. Edit {} or set MUSE_SERVICE_URL and MUSE_SERVICE_KEY.",
            MuseConfig::path().display()
        );
        std::process::exit(1);
    }

    let client = IdeasClient::new(&config.service_url, &config.service_key)?;
    let feed = IdeaFeed::new(client, config.items_per_page);

    match command {
        Command::List { page } => {
            // First fetch tells us how many pages exist; clamp and refetch
            // only when the requested page differs.
            let mut loaded = feed.fetch_page(1).await?;
            let target = pagination::clamp_page(page, loaded.total_pages);
            if target != loaded.page {
                loaded = feed.fetch_page(target).await?;
            }
            render::print_page(&loaded);
        }
        Command::Add { content } => {
            let loaded = feed.add(&content).await?;
            println!("Idea added.\n");
            render::print_page(&loaded);
        }
        Command::Edit { id, content } => {
            let loaded = feed.update(id, &content, 1).await?;
            println!("Idea updated.\n");
            render::print_page(&loaded);
        }
        Command::Delete { id, assume_yes } => {
            let Some(idea) = feed.fetch_idea(id).await? else {
                eprintln!("No idea with id {}.", id);
                std::process::exit(1);
            };
            if !assume_yes && !render::confirm_delete(&idea) {
                println!("Cancelled.");
                return Ok(());
            }
            let loaded = feed.delete(id, 1).await?;
            println!("Idea deleted.\n");
            render::print_page(&loaded);
        }
        Command::Help => {}
    }

    Ok(())
}
