mod cli;
mod expression;
mod generator;
mod hints;
mod multiset;
mod round;
mod solutions;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
