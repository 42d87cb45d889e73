//! Running the simulation and printing the result.

use crate::args::{Args, Format};
use log::{info, trace};
use serde::Serialize;
use std::fmt::Write;
use terca_lib::{Error, SpacetimeField, World};

/// What is printed in the JSON format.
#[derive(Serialize)]
struct Output<'a> {
    rule: u32,
    width: usize,
    generations: usize,
    field: &'a SpacetimeField,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<Vec<[usize; 3]>>,
}

/// Number of cells in each state, for every generation.
fn counts(field: &SpacetimeField) -> Vec<[usize; 3]> {
    field.iter().map(|row| row.counts()).collect()
}

/// Displays the world in the plaintext format,
/// with a header line like `x = 100, t = 100, rule = W7518`.
fn plaintext(world: &World, stats: bool) -> String {
    let field = world.spacetime();
    let mut str = format!(
        "x = {}, t = {}, rule = W{}\n",
        field.width(),
        world.time(),
        world.rule().rule_number()
    );
    if stats {
        for (t, (row, [zero, one, two])) in field.iter().zip(counts(field)).enumerate() {
            writeln!(str, "{} {:>4} {:>4} {:>4} {:>4}", row, t, zero, one, two)
                .expect("writing to a String never fails");
        }
    } else {
        write!(str, "{}", field).expect("writing to a String never fails");
    }
    str
}

fn json(world: &World, stats: bool) -> String {
    let field = world.spacetime();
    let output = Output {
        rule: world.rule().rule_number(),
        width: field.width(),
        generations: field.generations(),
        field,
        counts: stats.then(|| counts(field)),
    };
    serde_json::to_string(&output).expect("the output only contains integers and arrays")
}

/// Evolves the world and prints the spacetime field.
pub(crate) fn run(args: Args) -> Result<(), Error> {
    let Args {
        config,
        mut world,
        format,
        stats,
    } = args;
    info!(
        "Running rule W{} on {} cells for {} steps",
        config.rule_number,
        world.len(),
        config.time
    );
    let steps = world.evolve_while(config.time, |t, row| {
        trace!("Generation {}: {}", t, row);
        true
    })?;
    info!("Finished after {} steps", steps);
    let output = match format {
        Format::Plaintext => plaintext(&world, stats),
        Format::Json => json(&world, stats),
    };
    print!("{}", output);
    Ok(())
}
