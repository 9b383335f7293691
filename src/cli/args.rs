use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "city-merger")]
#[command(about = "Merge CityListA.json, CityListB.avro and CityListC.csv into CombinedCityList.csv")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value = ".",
        help = "Directory holding the city lists; the combined list is written here"
    )]
    pub data_dir: PathBuf,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}
