use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

/// Parses `#-v&--categories=4&--seed=abc` style URL fragments.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match parse_args(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (
            parse_args("").expect("default arguments must parse"),
            Some(err),
        ),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring invalid arguments {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeopardy_core::GameConfig;

    #[test]
    fn empty_fragment_uses_standard_board() {
        let args = parse_args("").unwrap();

        assert_eq!(args.game.game_config(), GameConfig::standard());
        assert_eq!(args.game.fixed_seed(), None);
    }

    #[test]
    fn fragment_arguments_configure_the_board() {
        let args = parse_args("#--categories=4&--clues=3&--pool=20&--seed=12").unwrap();

        assert_eq!(args.game.game_config(), GameConfig::new(4, 3, 20));
        assert_eq!(args.game.fixed_seed(), Some(12));
    }

    #[test]
    fn out_of_range_board_size_is_rejected() {
        assert!(parse_args("#--categories=300").is_err());
        assert!(parse_args("#--bogus").is_err());
    }

    #[test]
    fn verbosity_flags_raise_log_level() {
        let quiet = parse_args("").unwrap();
        let loud = parse_args("#-vv").unwrap();

        assert!(loud.verbose.log_level() > quiet.verbose.log_level());
    }
}
