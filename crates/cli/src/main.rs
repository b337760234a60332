//! PW-700 simulator CLI.
//!
//! This binary provides a single entry point for all simulator modes. It performs:
//! 1. **Run:** Execute a program for a fixed cycle budget and print memory, registers, and stats.
//! 2. **Debug:** Step a program interactively, printing the machine state after each step.
//! 3. **Asm:** Translate mnemonic source into the 24-digit program format.
//! 4. **Disasm:** List a program file as mnemonics.

mod shell;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pw700_core::config::Config;
use pw700_core::core::cpu::snapshot::CpuSnapshot;
use pw700_core::isa::{asm, disasm};
use pw700_core::sim::{Simulator, loader};

use crate::shell::{Command, Shell};

#[derive(Parser, Debug)]
#[command(
    name = "pw700",
    author,
    version,
    about = "PW-700 pipelined CPU simulator",
    long_about = "Run or single-step PW-700 programs, and translate between mnemonics and the 24-digit program format.\n\nExamples:\n  pw700 asm prog.asm -o prog.txt\n  pw700 run prog.txt\n  pw700 debug prog.txt"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program for a fixed number of cycles.
    Run {
        /// Program file (one 24-digit binary word per line).
        program: PathBuf,

        /// Cycles to run (default from config, 1024).
        #[arg(short, long)]
        cycles: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Step through a program interactively.
    Debug {
        /// Program file (one 24-digit binary word per line).
        program: PathBuf,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Assemble mnemonic source into the program format.
    Asm {
        /// Assembly source file.
        input: PathBuf,

        /// Output file (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Disassemble a program file.
    Disasm {
        /// Program file (one 24-digit binary word per line).
        program: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    path.map_or_else(
        || Ok(Config::default()),
        |p| {
            Config::from_json_file(p)
                .with_context(|| format!("could not load config `{}`", p.display()))
        },
    )
}

/// Builds a simulator with `program` loaded into command memory.
fn load_simulator(program: &Path, config: &Config) -> Result<Simulator> {
    let mut sim = Simulator::new(config);
    let count = loader::load_program_file(&mut sim.cpu, program)
        .with_context(|| format!("could not load program `{}`", program.display()))?;
    tracing::info!(
        program = %program.display(),
        instructions = count,
        max_cycles = config.run.max_cycles,
        "program loaded"
    );
    Ok(sim)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            program,
            cycles,
            config,
            json,
        } => cmd_run(&program, cycles, config.as_deref(), json),
        Commands::Debug { program, config } => cmd_debug(&program, config.as_deref()),
        Commands::Asm { input, output } => cmd_asm(&input, output.as_deref()),
        Commands::Disasm { program } => cmd_disasm(&program),
    }
}

/// Runs the program for the cycle budget and reports the final state.
fn cmd_run(
    program: &Path,
    cycles: Option<u64>,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(n) = cycles {
        config.run.max_cycles = n;
    }
    let mut sim = load_simulator(program, &config)?;
    let stats = sim.run();
    tracing::info!(
        cycles = stats.cycles,
        committed = stats.instructions_retired,
        "run finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
        return Ok(());
    }
    println!("MEM[0:{}] {:?}", config.run.dump_words, sim.memory_dump());
    println!("REGS: {:?}", sim.cpu.registers());
    println!("PC: {}", sim.cpu.pc());
    sim.cpu.stats.print();
    Ok(())
}

fn print_state(snap: &CpuSnapshot, mem_words: usize) {
    println!("Cycle: {}", snap.cycle);
    println!("PC: {}", snap.pc);
    println!("Cur command: {}", snap.current);
    println!("MEM[0:{mem_words}] {:?}", snap.memory);
    println!("REGS: {:?}", snap.registers);
    let pipe: Vec<String> = snap
        .pipeline
        .iter()
        .map(|s| format!("{} {}", s.stage, s.text))
        .collect();
    println!("PIPE: [{}]", pipe.join(" | "));
}

/// Interactive stepping: Enter steps, `si N` steps N, `c` continues, `q` quits.
fn cmd_debug(program: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let mut sim = load_simulator(program, &config)?;
    let mut shell = Shell::new().context("could not start line editor")?;

    println!(
        "Enter - step one cycle\nsi N - step N cycles\nc - run to {} cycles\nq - exit",
        config.run.max_cycles
    );
    print_state(&sim.snapshot(), config.run.dump_words);
    loop {
        match shell.read_command()? {
            Command::Quit => break,
            Command::Step(n) => sim.step(n),
            Command::Continue => {
                let left = config.run.max_cycles.saturating_sub(sim.cpu.stats.cycles);
                sim.step(left);
            }
        }
        println!("Cycle Results:");
        print_state(&sim.snapshot(), config.run.dump_words);
    }
    sim.cpu.stats.print();
    Ok(())
}

fn cmd_asm(input: &Path, output: Option<&Path>) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("could not read file `{}`", input.display()))?;
    let words = asm::assemble(&source)
        .with_context(|| format!("could not assemble `{}`", input.display()))?;
    let listing = asm::to_listing(&words);
    match output {
        Some(path) => fs::write(path, listing)
            .with_context(|| format!("could not write file `{}`", path.display()))?,
        None => print!("{listing}"),
    }
    Ok(())
}

fn cmd_disasm(program: &Path) -> Result<()> {
    let mut sim = Simulator::new(&Config::default());
    let count = loader::load_program_file(&mut sim.cpu, program)
        .with_context(|| format!("could not load program `{}`", program.display()))?;
    for (addr, word) in sim.cpu.commands().iter().take(count).enumerate() {
        println!("{addr:>4}: {word:06x}  {}", disasm::disassemble(*word));
    }
    Ok(())
}
