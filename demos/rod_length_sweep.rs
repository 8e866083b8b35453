use earth_grounding::prelude::*;

fn main() -> Result<(), DomainError> {
    // 5/8" rod in farmland, lengths 0.5 m .. 10 m.
    let rod: ElectrodeConfiguration = SingleRod::new(STANDARD_ROD_LENGTH, 0.015)?.into();
    let rho = SoilKind::Farmland.typical_resistivity();
    let engine = GroundingEngine::default();

    let points = engine.sweep(&rod, rho, SweepParameter::Length, linspace(0.5, 10.0, 20))?;

    println!("length(m), R(ohm), status");
    for p in points {
        println!("{:.2}, {:.2}, {}", p.value, p.resistance, p.status);
    }
    Ok(())
}
