//-- parse-obj

mod literal;
mod obj;

#[macro_use]
extern crate log; //info/debug/error

use clap::Parser;
use num_format::{Locale, ToFormattedString};
use std::io::{self, Write};
use std::path::PathBuf;

const USAGE: &str = "Usage: ./parse-obj.py <filename> <output-variable>";

#[derive(Parser)]
#[command(name = "parse-obj")]
#[command(about = "convert the vertices/faces of an OBJ file to C++ array literals")]
#[command(author, version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// OBJ file to read
    #[arg(allow_hyphen_values = true)]
    filename: PathBuf,
    /// prefix of the generated variables
    #[arg(allow_hyphen_values = true)]
    variable: String,
    /// namespace of FaceDefinition and Mesh
    #[arg(long, default_value = literal::DEFAULT_NAMESPACE)]
    namespace: String,
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{}", USAGE);
            return;
        }
    };
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), obj::ObjError> {
    info!("===== parse-obj =====");
    info!("reading {}", cli.filename.display());
    let doc = obj::Document::from_path(&cli.filename)?;
    info!(
        "# vertices: {}",
        doc.vertex_count().to_formatted_string(&Locale::en)
    );
    info!(
        "# faces: {}",
        doc.face_count().to_formatted_string(&Locale::en)
    );

    let mut t = literal::Template::new(&cli.variable);
    t.namespace = &cli.namespace;
    let out = t.render(&doc);
    write_block(&mut io::stdout(), &out)?;
    info!("✅");
    Ok(())
}

fn write_block<W: Write>(w: &mut W, out: &str) -> Result<(), obj::ObjError> {
    w.write_all(format!("{}\n", out).as_bytes())
        .and_then(|_| w.flush())
        .map_err(obj::ObjError::Write)
}
