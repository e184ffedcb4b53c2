use anyhow::Context;
use rock_tower::{solve, Config, Result};
use std::io::Read;

fn parse_count(arg: Option<String>, default: i64) -> Result<i64> {
    match arg {
        Some(s) => s
            .parse()
            .with_context(|| format!("bad number of rocks: {:?}", s)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let part_a = parse_count(args.next(), 2022)?;
    let part_b = parse_count(args.next(), 1_000_000_000_000)?;

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    let config = Config::default();

    let outcome = solve(&config, &buffer, part_a)?;
    println!(
        "Tower height after {} rocks dropped: {}",
        part_a, outcome.height
    );

    let outcome = solve(&config, &buffer, part_b)?;
    println!(
        "Tower height after {} rocks dropped: {} ({} simulated)",
        part_b, outcome.height, outcome.simulated
    );

    Ok(())
}
