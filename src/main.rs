use rand::Rng;
use wordle_game::cli::{ConsoleInput, ConsoleOutput, parse_cli};
use wordle_game::info_log;
use wordle_game::round::run_menu;
use wordle_game::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let wordbank = match (&cli.secret, &cli.wordbank_path) {
        (Some(word), _) => vec![word.trim().to_ascii_lowercase()],
        (None, Some(path)) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return;
            }
        },
        (None, None) => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    info_log!("loaded {} candidate words", wordbank.len());

    let mut input = ConsoleInput;
    let mut output = ConsoleOutput;
    let picker = |words: &[String]| rand::rng().random_range(0..words.len());

    if let Err(e) = run_menu(&wordbank, picker, &mut input, &mut output) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
