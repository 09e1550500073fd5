//! Prints the latest observed and nearest forecast level of the Trinity River at Dallas.

use nws::{simple_time, Nws, NwsError};

fn main() -> Result<(), NwsError> {
    let river = Nws::new()?.hydrograph("dllt2")?;

    let latest = river.level().call()?;
    println!(
        "Latest: {:?} ft, {:?} kcfs at {}",
        latest.stage,
        latest.flow,
        simple_time(&latest.time)
    );

    for index in 1..4 {
        match river.level().historical_index(index).call() {
            Ok(level) => println!("  -{}: {:?} ft at {}", index, level.stage, simple_time(&level.time)),
            Err(e) => {
                println!("  {}", e);
                break;
            }
        }
    }

    match river.nearest_level().offset(1).call() {
        Ok(next) => println!("Next: {:?} ft at {}", next.stage, next.time),
        Err(e) => println!("No forecast row after the current hour: {}", e),
    }
    Ok(())
}
