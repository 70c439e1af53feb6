use clap::{Parser, Subcommand};
use cuid::{Cuid, CuidGenerator, ProcessIdentity};

#[derive(Parser)]
#[command(name = "cuid")]
#[command(about = "Collision-resistant identifier (CUID) generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate identifiers
    Generate {
        /// How many identifiers to emit
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Decode the blocks of an identifier
    Inspect {
        /// Identifier in canonical form
        id: String,
    },
    /// Print the fingerprint this process embeds in its identifiers
    Fingerprint,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { count }) => {
            let generator = CuidGenerator::new()?;
            for _ in 0..count {
                println!("{}", generator.generate());
            }
        }
        Some(Commands::Inspect { id }) => match Cuid::parse(&id) {
            Ok(id) => {
                let (rand1, rand2) = id.random_blocks();
                println!("timestamp:   {} ({})", id.timestamp_block(), id.timestamp_value());
                println!("counter:     {} ({})", id.counter_block(), id.counter());
                println!("fingerprint: {}", id.fingerprint_block());
                println!("random:      {} {}", rand1, rand2);
            }
            Err(e) => eprintln!("Error inspecting identifier: {}", e),
        },
        Some(Commands::Fingerprint) => {
            println!("{}", ProcessIdentity::from_env()?.fingerprint());
        }
        None => {
            println!("Use 'cuid --help' for commands");
        }
    }

    Ok(())
}
