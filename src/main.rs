use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sheet2sql::convert;
use sheet2sql::model::TableName;
use sheet2sql::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;
    match cli.command {
        Command::Generate(args) => execute_generate(args),
        Command::Interactive => run_interactive(),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_directives = if verbose { "sheet2sql=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn execute_generate(args: GenerateArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ToolError::MissingInput(args.input));
    }

    let output = args
        .output
        .unwrap_or_else(|| convert::default_output_path(&args.input));
    let table = if args.temp {
        TableName::temporary(args.table)
    } else {
        TableName::new(args.table)
    };

    convert::excel_to_sql(&args.input, &output, &table, args.sheet.as_deref())?;
    println!("SQL script written to {}", output.display());
    Ok(())
}

fn run_interactive() -> Result<()> {
    let current_directory = std::env::current_dir()?;
    println!("Current directory: {}", current_directory.display());

    loop {
        let mut file_name =
            prompt("Enter the name of the Excel file (without .xlsx) or type 'exit' to quit: ")?;
        if file_name.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            return Ok(());
        }
        if !file_name.ends_with(".xlsx") {
            file_name.push_str(".xlsx");
        }

        let input = current_directory.join(&file_name);
        println!("Looking for file: {}", input.display());
        if !input.exists() {
            println!(
                "File not found in '{}'. Please ensure the file is in the same directory.",
                current_directory.display()
            );
            continue;
        }

        let temporary = confirm("Is this a temporary table? (yes/no): ")?;
        let name = prompt("Enter the table name (without #, e.g. 'my_table'): ")?;
        let table = if temporary {
            TableName::temporary(name)
        } else {
            TableName::new(name)
        };
        let output = convert::default_output_path(&input);

        match convert::excel_to_sql(&input, &output, &table, None) {
            Ok(()) => println!(
                "SQL script created successfully! Output saved to {}",
                output.display()
            ),
            Err(error) => {
                println!("An error occurred while processing the file: {error}");
                pause()?;
            }
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    use std::io::Write;

    print!("{message}");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    // 0 bytes read means stdin reached EOF.
    if std::io::stdin().read_line(&mut answer)? == 0 {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    Ok(answer.trim().to_string())
}

fn confirm(message: &str) -> Result<bool> {
    let answer = prompt(message)?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn pause() -> Result<()> {
    prompt("Press Enter to continue...")?;
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert Excel workbooks into batched SQL insert scripts."
)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a SQL script from a workbook without prompting.
    Generate(GenerateArgs),
    /// Prompt for the workbook and table details in a loop.
    Interactive,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Input workbook path.
    #[arg(long)]
    input: PathBuf,

    /// Target table name, used verbatim in the generated statements.
    #[arg(long)]
    table: String,

    /// Create the table as a temporary table with a '#' prefix.
    #[arg(long)]
    temp: bool,

    /// Output script path. Defaults to the input's base name with an
    /// `_output.sql` suffix, next to the input.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Worksheet to read. Defaults to the first sheet in the workbook.
    #[arg(long)]
    sheet: Option<String>,
}
