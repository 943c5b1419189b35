use pinboard::config::BoardConfig;
use pinboard::controller::{Board, ListController, ListState};
use pinboard::core::kind::ListKind;
use pinboard::core::row::Row;
use pinboard::error::Error;

fn print_usage() {
    eprintln!("usage: pinboard <links|notes|tasks> show");
    eprintln!("       pinboard <links|notes|tasks> add <name> [value]");
    eprintln!("       pinboard <links|notes|tasks> remove <index>");
    eprintln!("       pinboard <links|notes|tasks> export");
    eprintln!("       pinboard export-all");
    eprintln!("       pinboard import <file>");
}

fn print_list(kind: ListKind, rows: &[Row], state: ListState) {
    if state == ListState::Error {
        eprintln!("{}: remote unavailable and nothing cached yet", kind.label());
        return;
    }
    if rows.is_empty() {
        println!("{}: nothing here yet", kind.label());
        return;
    }
    let (name_col, value_col) = kind.headers();
    println!("{}  ({name_col} / {value_col})", kind.label());
    for (index, row) in rows.iter().enumerate() {
        if row.value.is_empty() {
            println!("  [{index}] {}", row.name);
        } else {
            println!("  [{index}] {}  {}", row.name, row.value);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BoardConfig::load();

    pinboard::set_debug_logging(config.debug_logging);
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(
            "pinboard",
            if config.debug_logging {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();

    if let Err(e) = config.ensure_dirs() {
        log::warn!("could not create cache dir: {e}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut board = Board::from_config(&config)?;

    match args.iter().map(String::as_str).collect::<Vec<_>>()[..] {
        ["export-all"] => {
            board.load_all().await;
            print!("{}", board.export_all());
        }
        ["import", path] => {
            let input = std::fs::read_to_string(path)?;
            match board.import(&input) {
                Ok(()) => println!("imported {path}"),
                Err(e @ Error::FormatUnrecognized(_)) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
        [list, ref rest @ ..] if ListKind::from_key(list).is_some() => {
            let kind = ListKind::from_key(list).unwrap_or(ListKind::Links);
            run_list_command(&mut board, kind, rest).await?;
        }
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn run_list_command(
    board: &mut Board,
    kind: ListKind,
    args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let list = board.get_mut(kind);
    match args {
        ["show"] => {
            let state = list.load().await;
            print_list(kind, list.rows(), state);
        }
        ["add", name] => {
            list.load().await;
            add_row(list, Row::new(*name, "")).await;
        }
        ["add", name, value] => {
            list.load().await;
            add_row(list, Row::new(*name, *value)).await;
        }
        ["remove", index] => {
            let Ok(index) = index.parse::<usize>() else {
                eprintln!("not an index: {index}");
                std::process::exit(1);
            };
            list.load().await;
            list.delete(index).await?;
            if !list.mirrors_writes() {
                println!("(removed from the local cache only)");
            }
            print_list(kind, list.rows(), list.state());
        }
        ["export"] => {
            list.load().await;
            print!("{}", list.export());
        }
        _ => {
            print_usage();
            std::process::exit(2);
        }
    }
    Ok(())
}

async fn add_row(list: &mut ListController, row: Row) {
    match list.append(row).await {
        Ok(()) if list.mirrors_writes() => println!("added ({} rows)", list.rows().len()),
        Ok(()) => println!("added ({} rows, local cache only)", list.rows().len()),
        Err(e @ Error::Validation(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            // Remote and storage failures degrade silently; the local list
            // already reflects the change where it could.
            log::warn!("{e}");
        }
    }
}
