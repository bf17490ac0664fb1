use baazsim::config::{self, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use baazsim::debug_map;
use baazsim::error::SimError;
use baazsim::game::{Game, Settings};
use baazsim::logging;
use baazsim::map::Map;
use baazsim::platform::MacroquadPlatform;
use baazsim::player::PlayerShape;
use clap::Parser;
use log::{Level, error, info, log_enabled};
use macroquad::Window;
use macroquad::prelude::Conf;
use std::path::PathBuf;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file to load. '#' marks a wall, any other character is open space.
    map_file: Option<PathBuf>,

    /// Player speed in pixels per frame on each axis.
    #[arg(long, default_value_t = config::PLAYER_SPEED)]
    speed: f32,

    /// Player body shape.
    #[arg(long, value_enum, default_value_t = PlayerShape::Circle)]
    shape: PlayerShape,

    /// Draw the walls on top of the sensor trace instead of hiding them beneath it.
    #[arg(long)]
    reveal_map: bool,

    /// Debug filter to specify log topics (e.g., "map,sensor,player")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn load_map(args: &Args) -> Result<Map, SimError> {
    let path = args.map_file.as_deref().ok_or(SimError::MissingArgument)?;
    info!("Loading map from {}", path.display());
    let map = Map::load(path)?;
    debug_map!("Parsed map:\n{}", map);
    Ok(map)
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(e) = logging::init_logger(
        logging::parse_level(&args.log_level),
        args.debug_filter.as_deref(),
    ) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    // Everything that can fail happens before the window opens
    let map = match load_map(&args) {
        Ok(map) => map,
        Err(e) => {
            if log_enabled!(Level::Error) {
                error!("{}", e);
            } else {
                eprintln!("[ERROR] {}", e);
            }
            process::exit(e.exit_code());
        }
    };

    let settings = Settings {
        speed: args.speed,
        shape: args.shape,
        reveal_map: args.reveal_map,
    };
    let mut game = Game::new(map, &settings);

    info!("Opening {}x{} window", WINDOW_WIDTH, WINDOW_HEIGHT);
    Window::from_config(window_conf(), async move {
        let mut platform = MacroquadPlatform::new();
        game.run(&mut platform).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_map_argument() {
        let args = Args::try_parse_from(["baazsim"]).unwrap();
        assert!(args.map_file.is_none());
        assert!(matches!(load_map(&args), Err(SimError::MissingArgument)));
    }

    #[test]
    fn test_nonexistent_map_file() {
        let args = Args::try_parse_from(["baazsim", "no/such/dir/map.txt"]).unwrap();
        match load_map(&args) {
            Err(SimError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("no/such/dir/map.txt"))
            }
            other => panic!("expected FileNotFound, got {:?}", other.map(|m| m.rows())),
        }
    }

    #[test]
    fn test_cli_options() {
        let args = Args::try_parse_from([
            "baazsim",
            "maps/room.txt",
            "--speed",
            "2.5",
            "--shape",
            "rect",
            "--reveal-map",
        ])
        .unwrap();
        assert_eq!(args.map_file, Some(PathBuf::from("maps/room.txt")));
        assert_eq!(args.speed, 2.5);
        assert_eq!(args.shape, PlayerShape::Rect);
        assert!(args.reveal_map);
        assert_eq!(args.log_level, "info");
    }
}
