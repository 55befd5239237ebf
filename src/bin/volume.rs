use clap::{Parser, Subcommand};
use shopping_list_rust::volume::helpers::clamp_level;
use shopping_list_rust::volume::VolumeController;

/// Read or change the system output volume
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: VolumeCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum VolumeCommand {
    /// Print the current output volume (0-100)
    Get,
    /// Set the output volume; values outside 0-100 are clamped
    Set {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Mute the output
    Mute,
    /// Unmute the output
    Unmute,
    /// Print the volume and the mute flag
    Status,
}

fn main() -> anyhow::Result<()> {
    shopping_list_rust::init_tracing("warn");

    let args = Args::parse();
    let controller = VolumeController::new();

    match args.command {
        VolumeCommand::Get => println!("{}", controller.get_volume()),
        VolumeCommand::Set { level } => {
            controller.set_volume(level);
            println!("Volume set to {}%", clamp_level(level));
        }
        VolumeCommand::Mute => {
            controller.mute();
            println!("Output muted");
        }
        VolumeCommand::Unmute => {
            controller.unmute();
            println!("Output unmuted");
        }
        VolumeCommand::Status => {
            let muted = if controller.is_muted() { "muted" } else { "unmuted" };
            println!("Volume {}% ({})", controller.get_volume(), muted);
        }
    }

    Ok(())
}
