//! Demand-paged virtual memory simulator CLI.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use pagesim::{BackingStore, Policy, SimConfig, Translator};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "Demand-paged virtual memory translation simulator",
    long_about = None,
)]
struct Cli {
    /// Command file: one base-10 virtual address or directive
    /// (PageTable, TLB) per line.
    addresses: String,

    /// Number of physical frames.
    #[arg(short = 'n', long, default_value_t = 256)]
    frames: usize,

    /// Page-replacement algorithm.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Fifo)]
    algorithm: Algorithm,

    /// Backing store image holding page contents.
    #[arg(short, long, default_value = "BACKING_STORE.bin")]
    backing_store: String,

    /// Write translations and dumps to a file instead of stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Print the final report as JSON.
    #[arg(long)]
    json_stats: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    Fifo,
    Lru,
}

impl From<Algorithm> for Policy {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::Fifo => Policy::Fifo,
            Algorithm::Lru => Policy::Lru,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let store = BackingStore::open(&cli.backing_store).unwrap_or_else(|e| fatal(&e.to_string()));

    let config = SimConfig::new(cli.frames, cli.algorithm.into());
    let mut translator = Translator::new(&config, store).unwrap_or_else(|e| fatal(&e.to_string()));

    let commands = File::open(&cli.addresses)
        .unwrap_or_else(|e| fatal(&format!("cannot open '{}': {}", cli.addresses, e)));

    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .unwrap_or_else(|e| fatal(&format!("cannot create '{}': {}", path, e))),
        ),
        None => Box::new(io::stdout()),
    };

    run(&mut translator, BufReader::new(commands), &mut sink)
        .unwrap_or_else(|e| fatal(&e.to_string()));

    print_report(&translator, cli.json_stats);
}

fn run<R: BufRead>(
    translator: &mut Translator,
    commands: R,
    sink: &mut dyn Write,
) -> io::Result<()> {
    for line in commands.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.to_ascii_lowercase().as_str() {
            "pagetable" => dump_page_table(translator, sink)?,
            "tlb" => dump_tlb(translator, sink)?,
            // Signed parse: negative addresses are legal input and wrap
            // into the 16-bit space like any other out-of-range value.
            _ => match line.parse::<i64>() {
                Ok(raw) => {
                    let t = translator
                        .translate(raw as u32)
                        .unwrap_or_else(|e| fatal(&e.to_string()));
                    writeln!(
                        sink,
                        "Virtual address: {}  Physical address: {}  Value: {}",
                        raw,
                        t.phys.val(),
                        t.value
                    )?;
                }
                Err(_) => {
                    eprintln!("warning: skipping unparseable line '{}'", line);
                }
            },
        }
    }
    sink.flush()
}

fn dump_page_table(translator: &Translator, sink: &mut dyn Write) -> io::Result<()> {
    writeln!(sink, "###########")?;
    writeln!(sink, "Page - Frame - Valid")?;
    writeln!(sink, "###########")?;
    for (page, frame, valid) in translator.page_table_entries() {
        writeln!(sink, "{} - {} - {}", page, frame, valid as u8)?;
    }
    Ok(())
}

fn dump_tlb(translator: &Translator, sink: &mut dyn Write) -> io::Result<()> {
    writeln!(sink, "************")?;
    writeln!(sink, "Page - Frame")?;
    writeln!(sink, "************")?;
    for entry in translator.tlb_entries() {
        writeln!(sink, "{} - {}", entry.page, entry.frame)?;
    }
    Ok(())
}

fn print_report(translator: &Translator, json: bool) {
    let stats = translator.stats();

    if json {
        // Rates are derived rather than stored, so attach them here.
        let report = serde_json::json!({
            "accesses": stats.accesses,
            "tlb_hits": stats.tlb_hits,
            "tlb_hit_rate": stats.tlb_hit_rate(),
            "page_faults": stats.page_faults,
            "page_fault_rate": stats.fault_rate(),
        });
        println!("{}", report);
        return;
    }

    println!("----- Statistics -----");
    println!("Total accesses: {}", stats.accesses);
    println!(
        "TLB hits: {}  -> rate: {:.2}%",
        stats.tlb_hits,
        stats.tlb_hit_rate()
    );
    println!(
        "Page faults: {}  -> rate: {:.2}%",
        stats.page_faults,
        stats.fault_rate()
    );
}

fn fatal(msg: &str) -> ! {
    eprintln!("\n\x1b[1;31m[!] FATAL:\x1b[0m {}", msg);
    process::exit(1);
}
