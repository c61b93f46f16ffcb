// Sortty: terminal sorting-algorithm visualizer with live complexity metrics

use std::io;
use std::path::Path;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::input::{self, DataOrder};
use sortty::runner;
use sortty::sorts::Algorithm;
use sortty::step::NoopSink;
use sortty::ui::{App, RunConfig};

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] [FILE]", program);
    eprintln!();
    eprintln!("FILE is newline-delimited integers, one per line. Without a file,");
    eprintln!("an array is generated.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --algo NAME    bubble | insertion | selection | merge | heap |");
    eprintln!("                 quick | quick-median3        (default: bubble)");
    eprintln!("  --compare      run all seven algorithms side by side");
    eprintln!("  --count N      generated element count      (default: 50)");
    eprintln!("  --order KIND   random | asc | desc          (default: random)");
    eprintln!("  --max V        upper bound of random values (default: 1000)");
    eprintln!("  --speed N      animation speed, 1..=10      (default: 5)");
    eprintln!("  --no-animate   skip the TUI, print metrics to stdout");
    eprintln!("  -h, --help     show this message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --algo merge --count 200", program);
    eprintln!("  {} --compare --order desc", program);
    eprintln!("  {} --compare --no-animate numbers.txt", program);
}

/// Exit with a parse error and the usage text.
fn die(program: &str, message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!();
    print_usage(program);
    process::exit(1);
}

/// The value following a flag, or a usage error if it is missing.
fn flag_value<'a>(args: &'a [String], i: usize, program: &str) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value.as_str(),
        None => die(program, &format!("{} requires a value", args[i])),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("sortty")
        .to_string();

    let mut algorithm = Algorithm::Bubble;
    let mut compare = false;
    let mut order = DataOrder::Random;
    let mut count = 50usize;
    let mut max = 1000i64;
    let mut speed = 5u64;
    let mut animate = true;
    let mut file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--algo" => {
                algorithm = match flag_value(&args, i, &program).parse() {
                    Ok(a) => a,
                    Err(e) => die(&program, &e),
                };
                i += 1;
            }
            "--compare" => compare = true,
            "--order" => {
                order = match flag_value(&args, i, &program).parse() {
                    Ok(o) => o,
                    Err(e) => die(&program, &e),
                };
                i += 1;
            }
            "--count" => {
                count = match flag_value(&args, i, &program).parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => die(&program, "--count must be a positive integer"),
                };
                i += 1;
            }
            "--max" => {
                max = match flag_value(&args, i, &program).parse::<i64>() {
                    Ok(v) if v >= 1 => v,
                    _ => die(&program, "--max must be a positive integer"),
                };
                i += 1;
            }
            "--speed" => {
                speed = match flag_value(&args, i, &program).parse::<u64>() {
                    Ok(s) if (1..=10).contains(&s) => s,
                    _ => die(&program, "--speed must be between 1 and 10"),
                };
                i += 1;
            }
            "--no-animate" => animate = false,
            "-h" | "--help" => {
                print_usage(&program);
                return Ok(());
            }
            arg if arg.starts_with('-') => {
                die(&program, &format!("unknown option '{}'", arg));
            }
            arg => {
                if file.is_some() {
                    die(&program, "only one input file may be given");
                }
                file = Some(arg.to_string());
            }
        }
        i += 1;
    }

    // Build the input array: file data wins over generation. A malformed
    // file is reported and nothing is adopted.
    let data = match &file {
        Some(path) => match input::load_file(Path::new(path)) {
            Ok(values) => {
                eprintln!("Loaded {} values from {}", values.len(), path);
                values
            }
            Err(e) => {
                eprintln!("Error reading '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let values = input::generate(&mut rand::thread_rng(), count, order, max);
            eprintln!("Generated {} elements.", values.len());
            values
        }
    };

    // Headless path: harvest metrics with no animation and no delay
    if !animate {
        if compare {
            let results = runner::compare_all(&data);
            println!("{:<26} {:>12} {:>12}", "Algorithm", "Loop Count", "Aux Space");
            for algo in Algorithm::ALL {
                if let Some(metrics) = results.get(&algo) {
                    println!("{:<26} {:>12} {:>12}", algo.name(), metrics.loops, metrics.space);
                }
            }
        } else {
            let mut sorted = data.clone();
            let metrics = algorithm.run(&mut sorted, &mut NoopSink);
            println!("{}", algorithm.name());
            println!("  Loop count (time):  {}", metrics.loops);
            println!("  Aux space:          {}", metrics.space);
        }
        return Ok(());
    }

    let config = RunConfig {
        algorithm,
        compare,
        order,
        count,
        max,
        speed,
        from_file: file.is_some(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config, data);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
