use std::{error::Error, sync::Arc};
use terca_lib::{
    build_rule_table, init, rules::NEIGHBORHOODS, Config, Error as CaError, Neighborhood, Row,
    RuleTable, Symbol, World,
};

/// Next state is the state of the left neighbor.
const SHIFT: i64 = 19305;
/// Next state is the state of the cell itself.
const IDENTITY: i64 = 15897;

#[test]
fn zero_rule() -> Result<(), Box<dyn Error>> {
    let table = build_rule_table(0)?;
    for nbhd in NEIGHBORHOODS {
        assert_eq!(table.get(nbhd), Symbol::ZERO);
    }
    let mut world = World::new(0, &[1, 2, 0])?;
    world.evolve(1)?;
    assert_eq!(world.current(), &"000".parse::<Row>()?);
    Ok(())
}

#[test]
fn rule_7518() -> Result<(), Box<dyn Error>> {
    let table: RuleTable = "W7518".parse()?;
    let outputs: Vec<u8> = table.entries().map(|(_, s)| s.value()).collect();
    assert_eq!(outputs, vec![0, 1, 1, 2, 2, 0, 1, 0, 1]);
    assert_eq!(table.rule_number(), 7518);
    assert_eq!(table.to_string(), "W7518");
    Ok(())
}

#[test]
fn entries_order() -> Result<(), Box<dyn Error>> {
    let table = build_rule_table(1234)?;
    let nbhds: Vec<Neighborhood> = table.entries().map(|(n, _)| n).collect();
    assert_eq!(nbhds, NEIGHBORHOODS.to_vec());
    for (i, nbhd) in NEIGHBORHOODS.iter().enumerate() {
        assert_eq!(nbhd.index(), i);
    }
    Ok(())
}

#[test]
fn invalid_rule() {
    assert_eq!(build_rule_table(-5), Err(CaError::InvalidRule(-5)));
    assert_eq!(build_rule_table(19683), Err(CaError::InvalidRule(19683)));
    assert!(build_rule_table(19682).is_ok());
    assert_eq!(
        "rule".parse::<RuleTable>(),
        Err(CaError::ParseRule(String::from("rule")))
    );
    assert_eq!("-1".parse::<RuleTable>(), Err(CaError::InvalidRule(-1)));
}

#[test]
fn evolution() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(7518, &[0, 1, 2, 0, 2, 1, 0])?;
    world.evolve(4)?;
    assert_eq!(world.time(), 4);
    assert_eq!(
        world.spacetime().to_string(),
        ".AB.BA.\n\
         .A.AA.B\n\
         AABABBA\n\
         BB...A.\n\
         AAA..AB\n"
    );
    assert_eq!(world.current(), &Row::from_values(&[1, 1, 1, 0, 0, 1, 2])?);
    assert_eq!(world.initial(), &Row::from_values(&[0, 1, 2, 0, 2, 1, 0])?);
    Ok(())
}

#[test]
fn wraparound() -> Result<(), Box<dyn Error>> {
    // Only the neighborhood `(2, 0)` maps to `1`.
    let table = RuleTable::from_fn(|nbhd| {
        if nbhd == Neighborhood::new(Symbol::TWO, Symbol::ZERO) {
            Symbol::ONE
        } else {
            Symbol::ZERO
        }
    });
    assert_eq!(table.rule_number(), 729);
    let mut world = World::with_rule(table, Row::from_values(&[0, 0, 2])?);
    world.step();
    // The left neighbor of the first cell is the last cell.
    assert_eq!(world.current(), &Row::from_values(&[1, 0, 0])?);
    Ok(())
}

#[test]
fn shift() -> Result<(), Box<dyn Error>> {
    let initial = [1, 2, 0, 0, 2, 1];
    let mut world = World::new(SHIFT, &initial)?;
    world.evolve(1)?;
    assert_eq!(world.current(), &Row::from_values(&[1, 1, 2, 0, 0, 2])?);
    world.evolve(5)?;
    assert_eq!(world.current(), world.initial());

    let mut world = World::new(IDENTITY, &initial)?;
    world.evolve(3)?;
    assert!(world.spacetime().iter().all(|row| row == world.initial()));
    Ok(())
}

#[test]
fn invalid_symbol() {
    assert_eq!(
        World::new(7518, &[0, 1, 3, 2]).map(|_| ()),
        Err(CaError::InvalidSymbol { index: 2, value: 3 })
    );
    assert_eq!(
        World::new(7518, &[-1]).map(|_| ()),
        Err(CaError::InvalidSymbol {
            index: 0,
            value: -1
        })
    );
    assert_eq!(
        ".AC".parse::<Row>(),
        Err(CaError::InvalidSymbol {
            index: 2,
            value: 'C' as i64
        })
    );
}

#[test]
fn invalid_step_count() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(7518, &[0, 1, 2])?;
    assert_eq!(world.evolve(-1), Err(CaError::InvalidStepCount(-1)));
    assert_eq!(world.time(), 0);
    assert_eq!(world.spacetime().len(), 1);
    Ok(())
}

#[test]
fn no_op() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(7518, &[2, 1, 0, 1])?;
    world.evolve(2)?;
    let current = world.current().clone();
    world.evolve(0)?;
    assert_eq!(world.current(), &current);
    assert_eq!(world.spacetime().len(), 3);
    Ok(())
}

#[test]
fn empty_world() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(7518, &[])?;
    assert!(world.is_empty());
    world.evolve(5)?;
    assert_eq!(world.spacetime().generations(), 6);
    assert_eq!(world.spacetime().width(), 0);
    assert!(world.spacetime().iter().all(|row| row.is_empty()));
    assert_eq!(world.spacetime().to_string(), "\n".repeat(6));
    Ok(())
}

#[test]
fn evolve_while() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(7518, &[0, 1, 2, 0, 2, 1, 0])?;
    let mut seen = Vec::new();
    let steps = world.evolve_while(10, |t, row| {
        seen.push(t);
        row.counts()[0] != 0
    })?;
    // The second generation `AABABBA` has no zeros.
    assert_eq!(steps, 2);
    assert_eq!(seen, vec![1, 2]);
    assert_eq!(world.time(), 2);
    assert_eq!(
        world.evolve_while(-2, |_, _| true),
        Err(CaError::InvalidStepCount(-2))
    );
    Ok(())
}

#[test]
fn shared_rule() -> Result<(), Box<dyn Error>> {
    let rule = Arc::new(build_rule_table(7518)?);
    let initial = Row::from_values(&[1, 0, 2, 2, 1])?;
    let mut world_1 = World::with_rule(Arc::clone(&rule), initial.clone());
    let mut world_2 = World::with_rule(&*rule, initial);
    world_1.evolve(8)?;
    world_2.evolve(8)?;
    assert_eq!(world_1.spacetime(), world_2.spacetime());
    Ok(())
}

#[test]
fn spacetime_grid() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(1, &[1, 2, 0, 0, 0])?;
    world.evolve(3)?;
    let field = world.spacetime();
    assert_eq!(
        field.to_grid(),
        vec![
            vec![1, 2, 0, 0, 0],
            vec![0, 0, 0, 1, 1],
            vec![0, 1, 1, 0, 0],
            vec![1, 0, 0, 0, 1],
        ]
    );
    assert_eq!(field.counts(1), Some([3, 2, 0]));
    assert_eq!(field.counts(4), None);
    assert_eq!(
        serde_json::to_string(field)?,
        "[[1,2,0,0,0],[0,0,0,1,1],[0,1,1,0,0],[1,0,0,0,1]]"
    );
    Ok(())
}

#[test]
fn wrapped_index() -> Result<(), Box<dyn Error>> {
    let row: Row = "012".parse()?;
    assert_eq!(row.get_wrapped(-1), Some(Symbol::TWO));
    assert_eq!(row.get_wrapped(3), Some(Symbol::ZERO));
    assert_eq!(row.get_wrapped(-4), Some(Symbol::TWO));
    assert_eq!(Row::default().get_wrapped(0), None);
    assert_eq!(row.neighborhood(0), Neighborhood::new(Symbol::TWO, Symbol::ZERO));
    assert_eq!(row.to_string(), ".AB");
    Ok(())
}

#[test]
fn random_row() -> Result<(), Box<dyn Error>> {
    let row_1 = init::create_initial_condition(50, Some(42))?;
    let row_2 = init::create_initial_condition(50, Some(42))?;
    assert_eq!(row_1.len(), 50);
    assert_eq!(row_1, row_2);
    assert!(init::create_initial_condition(0, None)?.is_empty());
    assert_eq!(
        init::create_initial_condition(-1, None),
        Err(CaError::InvalidLength(-1))
    );
    Ok(())
}

#[test]
fn config() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    assert_eq!(config, Config::new(7518, 100, 100));
    let world = config.set_seed(7).run()?;
    assert_eq!(world.spacetime().generations(), 101);
    assert_eq!(world.spacetime().width(), 100);

    let config = Config::new(SHIFT, 0, 2).set_initial(Row::from_values(&[1, 0, 0])?);
    let world = config.run()?;
    assert_eq!(world.current(), &Row::from_values(&[0, 0, 1])?);

    assert_eq!(
        Config::new(19683, 10, 10).run().map(|_| ()),
        Err(CaError::InvalidRule(19683))
    );
    assert_eq!(
        Config::new(0, -3, 10).run().map(|_| ()),
        Err(CaError::InvalidLength(-3))
    );
    assert_eq!(
        Config::new(0, 3, -10).world().map(|_| ()),
        Err(CaError::InvalidStepCount(-10))
    );
    Ok(())
}

#[test]
fn config_json() -> Result<(), Box<dyn Error>> {
    let config: Config = serde_json::from_str(r#"{"rule_number": 1, "initial": [1, 2, 0, 0, 0]}"#)?;
    assert_eq!(config.time, 100);
    assert_eq!(config.initial, Some(Row::from_values(&[1, 2, 0, 0, 0])?));
    assert!(serde_json::from_str::<Config>(r#"{"initial": [0, 5]}"#).is_err());
    let json = serde_json::to_string(&Config::new(3, 4, 5))?;
    assert_eq!(serde_json::from_str::<Config>(&json)?, Config::new(3, 4, 5));
    Ok(())
}

#[test]
fn neighborhoods() -> Result<(), Box<dyn Error>> {
    let row: Row = "A".parse()?;
    assert_eq!(row.neighborhood(0), Neighborhood::new(Symbol::ONE, Symbol::ONE));
    let row: Row = "012".parse()?;
    assert_eq!(row.neighborhood(2), Neighborhood::new(Symbol::ONE, Symbol::TWO));
    Ok(())
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn neighborhood_of_empty_row() {
    Row::default().neighborhood(0);
}
