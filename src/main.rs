use colored::Colorize;
use ipkit::logging::init_logging;
use ipkit::output::{print_field, AddressReport, NetworkReport, RangeReport};
use ipkit::{parse_input, Address, ParsedInput};
use std::error::Error;

/// Address shown when no argument or `IPKIT_DEFAULT_ADDRESS` is given.
const DEFAULT_ADDRESS: &str = "::7f00:1";
const LABEL_WIDTH: usize = 9;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    log::info!("#Start main()");

    let input = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("IPKIT_DEFAULT_ADDRESS").ok())
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
    log::debug!("input={input}");

    match parse_input(&input)? {
        ParsedInput::Address(ip) => {
            print_field("ip", ip, LABEL_WIDTH);
            print_field("bin", ip.to_binary(), LABEL_WIDTH);
            print_field("hex", ip.to_hex(), LABEL_WIDTH);
            print_field("numeric", ip.to_numeric(), LABEL_WIDTH);
            print_field("version", ip.version(), LABEL_WIDTH);
            println!("{}", serde_json::to_string_pretty(&AddressReport::from(&ip))?);
        }
        ParsedInput::Network(network) => {
            println!("{}", serde_json::to_string_pretty(&NetworkReport::from(&network))?);
        }
        ParsedInput::Range(range) => {
            println!("{}", serde_json::to_string_pretty(&RangeReport::from(&range))?);
        }
    }

    let round_trip = Address::parse("2130706433")?;
    println!("{} {}", "parse(2130706433) =".green(), round_trip);

    Ok(())
}
