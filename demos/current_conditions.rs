//! Prints the current conditions and the next forecast period for downtown Dallas.

use nws::{simple_time, LatLon, Nws, NwsError, Reading};

fn show(label: &str, reading: &Reading) {
    match reading.observation() {
        Some(observation) => {
            let unit = observation
                .unit
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default();
            println!(
                "{:<18} {:>7.1} {:<4} (from {})",
                label,
                observation.value,
                unit,
                simple_time(&observation.time)
            );
        }
        None => println!("{:<18} no data", label),
    }
}

fn main() -> Result<(), NwsError> {
    let nws = Nws::new()?;
    let gridpoint = nws.gridpoint(LatLon(32.7767, -96.7970))?;
    println!("Gridpoint: {}", gridpoint.url());

    let now = gridpoint.current_conditions().call()?;
    show("Temperature", &now.temperature);
    show("Dew point", &now.dew_point);
    show("Humidity", &now.relative_humidity);
    show("Wind chill", &now.wind_chill);
    show("Wind speed", &now.wind_speed);
    show("Wind direction", &now.wind_direction);

    let later = gridpoint
        .get("temperature")
        .offset(3)
        .local_time(true)
        .call()?;
    show("Temperature +3", &later);

    println!("{}", gridpoint.forecast().include_elevation(true).call()?);
    Ok(())
}
