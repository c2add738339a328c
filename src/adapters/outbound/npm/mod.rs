/// npm adapters for obtaining the dependency listing
mod npm_cli_reader;

pub use npm_cli_reader::NpmCliReader;
