use clap::{Parser, Subcommand};
use lq_components::{CircularSection, Pipeline, RectangularSection};
use lq_core::units::{celsius_of, degc, m, pa};
use lq_core::{MaterialId, SubstanceId};
use lq_fluids::{Liquid, catalog};
use std::error::Error;
use tracing::debug;

#[derive(Parser)]
#[command(name = "lq-cli")]
#[command(about = "LiquiFlow CLI - liquid property and pipeline geometry tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List substances available in the builtin property tables
    Substances,
    /// Resolve liquid properties at a temperature and pressure
    State {
        /// Substance id or name (e.g. 1 or "water")
        substance: String,
        /// Temperature in °C
        #[arg(long, default_value_t = 20.0)]
        temp_c: f64,
        /// Pressure in Pa
        #[arg(long, default_value_t = 101_325.0)]
        pressure_pa: f64,
    },
    /// Walk water through a temperature change, printing properties at each step
    Demo,
    /// Compute effective pipeline diameter from cross-section geometry
    #[command(subcommand)]
    Pipe(PipeCommands),
}

#[derive(Subcommand)]
enum PipeCommands {
    /// Circular cross-section
    Circular {
        /// Pipe material id
        #[arg(long, default_value_t = 1)]
        material_id: i64,
        /// Pipe length in meters
        #[arg(long)]
        length_m: f64,
        /// Inner diameter in meters
        #[arg(long)]
        diameter_m: f64,
    },
    /// Rectangular duct cross-section
    Rectangular {
        /// Pipe material id
        #[arg(long, default_value_t = 1)]
        material_id: i64,
        /// Pipe length in meters
        #[arg(long)]
        length_m: f64,
        /// Duct width in meters
        #[arg(long)]
        width_m: f64,
        /// Duct height in meters
        #[arg(long)]
        height_m: f64,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Substances => cmd_substances(),
        Commands::State {
            substance,
            temp_c,
            pressure_pa,
        } => cmd_state(&substance, temp_c, pressure_pa),
        Commands::Demo => cmd_demo(),
        Commands::Pipe(pipe_cmd) => match pipe_cmd {
            PipeCommands::Circular {
                material_id,
                length_m,
                diameter_m,
            } => cmd_pipe_circular(material_id, length_m, diameter_m),
            PipeCommands::Rectangular {
                material_id,
                length_m,
                width_m,
                height_m,
            } => cmd_pipe_rectangular(material_id, length_m, width_m, height_m),
        },
    }
}

fn cmd_substances() -> Result<(), Box<dyn Error>> {
    let tables = catalog::builtin();
    println!("Builtin substances:");
    for (id, name) in tables.substances() {
        println!("  {id}  {name}");
    }
    Ok(())
}

fn resolve_substance(query: &str) -> Result<SubstanceId, Box<dyn Error>> {
    let id = catalog::builtin()
        .find(query)
        .ok_or_else(|| format!("unknown substance '{query}' (try `lq-cli substances`)"))?;
    debug!(%id, query, "resolved substance");
    Ok(id)
}

fn cmd_state(substance: &str, temp_c: f64, pressure_pa: f64) -> Result<(), Box<dyn Error>> {
    let tables = catalog::builtin();
    let id = resolve_substance(substance)?;
    let liq = Liquid::new(tables, id, degc(temp_c), pa(pressure_pa))?;
    print_state(&liq);
    Ok(())
}

fn cmd_demo() -> Result<(), Box<dyn Error>> {
    let tables = catalog::builtin();
    let water = resolve_substance("water")?;
    let mut liq = Liquid::new(tables, water, degc(0.0), pa(101_325.0))?;
    print_state(&liq);

    println!("Setting temperature to 10 °C.");
    liq.set_temperature(tables, degc(10.0))?;
    print_state(&liq);
    Ok(())
}

fn cmd_pipe_circular(
    material_id: i64,
    length_m: f64,
    diameter_m: f64,
) -> Result<(), Box<dyn Error>> {
    let material = MaterialId::from_raw(material_id)?;
    let section = CircularSection::new(m(diameter_m))?;
    let pipe = Pipeline::new(material, m(length_m), &section)?;
    print_pipeline(&pipe);
    Ok(())
}

fn cmd_pipe_rectangular(
    material_id: i64,
    length_m: f64,
    width_m: f64,
    height_m: f64,
) -> Result<(), Box<dyn Error>> {
    let material = MaterialId::from_raw(material_id)?;
    let section = RectangularSection::new(m(width_m), m(height_m))?;
    let pipe = Pipeline::new(material, m(length_m), &section)?;
    print_pipeline(&pipe);
    Ok(())
}

fn print_state(liq: &Liquid) {
    let name = catalog::builtin().name_of(liq.substance()).unwrap_or("?");
    println!("{} (id {})", name, liq.substance());
    println!("  temperature:         {:.2} °C", celsius_of(liq.temperature()));
    println!("  pressure:            {:.0} Pa", liq.pressure().value);
    println!("  density:             {:.1} kg/m³", liq.density().value);
    println!(
        "  dynamic viscosity:   {:.3} mPa·s",
        liq.viscosity_dynamic().value * 1000.0
    );
    println!("  kinematic viscosity: {:.2e} m²/s", liq.viscosity_kinematic());
}

fn print_pipeline(pipe: &Pipeline) {
    println!("Pipeline (material id {})", pipe.material());
    println!("  length:             {:.3} m", pipe.length().value);
    println!("  effective diameter: {:.4} m", pipe.diameter().value);
}
