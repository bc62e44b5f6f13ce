use std::io;

fn main() {
    euchre_cli::logging::init_logging();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();
    let code = euchre_cli::run(std::env::args(), &mut out, &mut err);
    drop(out);
    std::process::exit(code);
}
