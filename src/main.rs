use husk::flags::Flags;
use husk::logging;
use husk::shell::Shell;
use std::env;
use std::process;

fn main() -> Result<(), husk::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("husk: {}", e);
        flags.print_help();
        process::exit(2);
    }

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("husk {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init_logging(flags.is_set("debug"))?;

    let mut shell = Shell::new(flags)?;
    shell.run()
}
