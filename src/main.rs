use clap::{Parser, Subcommand};
use sitex::latex::preamble::{render_preamble, QUANTITY_PREAMBLE};
use sitex::parser;
use sitex::quantity::Quantity;
use sitex::units;

#[derive(Parser)]
#[command(name = "sitex")]
#[command(about = "Render physical quantities as siunitx LaTeX markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a TOML quantity file as LaTeX
    Render {
        /// Quantity file path
        path: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Prepend the required package declarations
        #[arg(long)]
        document: bool,

        /// Emit structured commands as JSON instead of LaTeX
        #[arg(long)]
        json: bool,
    },

    /// Translate a unit expression (e.g. "m/s^2") into siunitx markup
    Translate {
        /// Unit expression
        expr: String,
    },

    /// Render a single inline quantity (e.g. "3.14 +- 0.3 m/s")
    Quantity {
        /// Quantity string
        text: String,

        /// Emit the structured command as JSON instead of LaTeX
        #[arg(long)]
        json: bool,
    },

    /// Print the package declarations quantity markup requires
    Preamble,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            path,
            output,
            document,
            json,
        } => match render_file(&path, output.as_deref(), document, json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Translate { expr } => match translate_expression(&expr) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Quantity { text, json } => match render_quantity(&text, json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Preamble => {
            print!("{}", render_preamble(QUANTITY_PREAMBLE));
        }
    }
}

fn render_file(
    path: &str,
    output: Option<&str>,
    document: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let quantities = parser::load_quantities_from_file(path)?;

    let rendered = if json {
        let commands: Vec<_> = quantities.iter().map(|q| q.command()).collect();
        let mut text = serde_json::to_string_pretty(&commands)?;
        text.push('\n');
        text
    } else {
        let mut lines = String::new();
        if document {
            lines.push_str(&render_preamble(QUANTITY_PREAMBLE));
            lines.push('\n');
        }
        for quantity in &quantities {
            lines.push_str(&quantity.dumps());
            lines.push('\n');
        }
        lines
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &rendered)?;
        println!("Markup written to {}", output_path);
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn translate_expression(expr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let dim = parser::parse_unit_expression(expr)?;
    println!("{}", units::dimensionality_to_siunitx(&dim));
    Ok(())
}

fn render_quantity(text: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = parser::parse_quantity_string(text)?;
    let quantity = Quantity::new(value);

    if json {
        println!("{}", serde_json::to_string_pretty(quantity.command())?);
    } else {
        println!("{}", quantity.dumps());
    }

    Ok(())
}
