//! Diagnostic CLI: prints the derived facts for every active display.

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        "screen-facts {}
Prints derived facts (display ID, dock, notch) for every active display

USAGE:
    screen-facts [OPTIONS]

OPTIONS:
    -h, --help       Print this help message
    -v, --version    Print version information

ENVIRONMENT:
    RUST_LOG         Set log level (error, warn, info, debug, trace)",
        VERSION
    );
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        match args[0].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-v" | "--version" => {
                println!("screen-facts {}", VERSION);
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[0]);
                eprintln!("Try 'screen-facts --help' for more information.");
                std::process::exit(1);
            }
        }
    }

    // Initialize logging (flush each line for interactive debugging).
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    logger
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {:>5} {}] {}",
                chrono::Utc::now().to_rfc3339(),
                record.level(),
                record.target(),
                record.args()
            )?;
            buf.flush()
        })
        .init();

    run();
}

#[cfg(target_os = "macos")]
fn run() {
    use screen_facts::macos::{all_screens, AppMenuBar, UserDefaultsReader};

    let Some(mtm) = objc2::MainThreadMarker::new() else {
        log::error!("screen-facts must run on the main thread");
        std::process::exit(1);
    };

    let prefs = UserDefaultsReader;
    let menu_bar = AppMenuBar::new(mtm);
    let screens = all_screens(mtm);
    log::debug!("found {} active display(s)", screens.len());

    for (index, screen) in screens.iter().enumerate() {
        let id = screen_facts::display_id(screen)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "screen {}: id={} frame={}x{} visible={}x{} dock={} notch={}",
            index,
            id,
            screen.frame.width,
            screen.frame.height,
            screen.visible_frame.width,
            screen.visible_frame.height,
            screen_facts::has_dock(screen, &prefs, &menu_bar),
            screen_facts::has_notch(screen),
        );
    }
}

#[cfg(not(target_os = "macos"))]
fn run() {
    eprintln!("screen-facts only reports displays on macOS.");
    std::process::exit(1);
}
